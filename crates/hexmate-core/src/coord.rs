//! Cubic hexagonal coordinates.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::direction::Direction;
use crate::error::CoordError;
use crate::notation;

/// A cell on a hexagonal board in cubic coordinates.
///
/// The three components always satisfy `q + r + s == 0`. External callers can
/// only build a coordinate through [`HexCoord::new`], which rejects triples
/// that break the invariant; internal arithmetic (addition, subtraction,
/// negation) preserves it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCoord {
    q: i32,
    r: i32,
    s: i32,
}

impl HexCoord {
    /// The center cell `(0, 0, 0)`.
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0, s: 0 };

    /// Create a coordinate from a cubic triple.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::InvalidCoordinate`] if `q + r + s != 0`.
    pub fn new(q: i32, r: i32, s: i32) -> Result<HexCoord, CoordError> {
        if !Self::is_valid_cubic(q, r, s) {
            return Err(CoordError::InvalidCoordinate { q, r, s });
        }
        Ok(HexCoord { q, r, s })
    }

    /// Create a coordinate from its axial part; `s` is derived as `-q - r`.
    #[inline]
    pub const fn from_axial(q: i32, r: i32) -> HexCoord {
        HexCoord { q, r, s: -q - r }
    }

    /// Return `true` if the triple satisfies the cubic constraint.
    #[inline]
    pub const fn is_valid_cubic(q: i32, r: i32, s: i32) -> bool {
        q as i64 + r as i64 + s as i64 == 0
    }

    #[inline]
    pub const fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub const fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub const fn s(self) -> i32 {
        self.s
    }

    /// Return the components as a `(q, r, s)` tuple.
    #[inline]
    pub const fn to_tuple(self) -> (i32, i32, i32) {
        (self.q, self.r, self.s)
    }

    /// Pointwise sum, usable in const tables.
    #[inline]
    pub const fn offset(self, by: HexCoord) -> HexCoord {
        HexCoord {
            q: self.q + by.q,
            r: self.r + by.r,
            s: self.s + by.s,
        }
    }

    /// Multiply every component by `k`.
    #[inline]
    pub const fn scale(self, k: i32) -> HexCoord {
        HexCoord {
            q: self.q * k,
            r: self.r * k,
            s: self.s * k,
        }
    }

    /// Reflect across the q axis by swapping `r` and `s`.
    ///
    /// This maps White's half of the initial layout onto Black's.
    #[inline]
    pub const fn mirrored(self) -> HexCoord {
        HexCoord {
            q: self.q,
            r: self.s,
            s: self.r,
        }
    }

    /// Number of steps from the origin.
    #[inline]
    pub const fn length(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Number of single steps between two cells: `(|dq| + |dr| + |ds|) / 2`.
    #[inline]
    pub fn distance(self, other: HexCoord) -> i32 {
        (self - other).length()
    }

    /// Largest absolute component, i.e. the ring this cell sits on.
    #[inline]
    pub const fn ring(self) -> i32 {
        self.max_abs() as i32
    }

    /// Largest component magnitude, exact even for `i32::MIN`.
    #[inline]
    const fn max_abs(self) -> u32 {
        let a = self.q.unsigned_abs();
        let b = self.r.unsigned_abs();
        let c = self.s.unsigned_abs();
        let ab = if a > b { a } else { b };
        if ab > c { ab } else { c }
    }

    /// Return `true` if this cell lies on a hexagonal board of the given radius.
    #[inline]
    pub const fn is_on_board(self, radius: i32) -> bool {
        radius >= 0
            && Self::is_valid_cubic(self.q, self.r, self.s)
            && self.max_abs() <= radius as u32
    }

    /// The adjacent cell in the given primary direction.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> HexCoord {
        self + direction.vector()
    }

    /// Iterate over every cell of a board with the given radius, ordered by
    /// `q` then `r`.
    pub fn all_on_board(radius: i32) -> impl Iterator<Item = HexCoord> {
        (-radius..=radius).flat_map(move |q| {
            let r_min = (-radius).max(-q - radius);
            let r_max = radius.min(-q + radius);
            (r_min..=r_max).map(move |r| HexCoord::from_axial(q, r))
        })
    }

    /// Board label such as `"F6"`, see [`crate::notation::cell_label`].
    pub fn label(self, radius: i32) -> String {
        notation::cell_label(self, radius)
    }

    /// Parse a board label; `None` if malformed or off the board.
    pub fn from_label(label: &str, radius: i32) -> Option<HexCoord> {
        notation::parse_cell_label(label, radius)
    }
}

impl Add for HexCoord {
    type Output = HexCoord;

    #[inline]
    fn add(self, rhs: HexCoord) -> HexCoord {
        self.offset(rhs)
    }
}

impl Sub for HexCoord {
    type Output = HexCoord;

    #[inline]
    fn sub(self, rhs: HexCoord) -> HexCoord {
        self.offset(-rhs)
    }
}

impl Neg for HexCoord {
    type Output = HexCoord;

    #[inline]
    fn neg(self) -> HexCoord {
        HexCoord {
            q: -self.q,
            r: -self.r,
            s: -self.s,
        }
    }
}

impl TryFrom<(i32, i32, i32)> for HexCoord {
    type Error = CoordError;

    fn try_from((q, r, s): (i32, i32, i32)) -> Result<Self, Self::Error> {
        HexCoord::new(q, r, s)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.q, self.r, self.s)
    }
}

impl fmt::Debug for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexCoord({}, {}, {})", self.q, self.r, self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::HexCoord;
    use crate::direction::Direction;
    use crate::error::CoordError;
    use crate::radius::BoardRadius;

    #[test]
    fn new_rejects_non_cubic_triples() {
        for q in -3..=3 {
            for r in -3..=3 {
                for s in -3..=3 {
                    let result = HexCoord::new(q, r, s);
                    if q + r + s == 0 {
                        assert!(result.is_ok(), "({q},{r},{s}) should be accepted");
                    } else {
                        assert_eq!(
                            result,
                            Err(CoordError::InvalidCoordinate { q, r, s }),
                            "({q},{r},{s}) should be rejected"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn new_rejects_triples_whose_sum_overflows() {
        for (q, r, s) in [(i32::MAX, i32::MAX, 2), (i32::MAX, 1, 0), (i32::MIN, -1, 0)] {
            assert_eq!(
                HexCoord::new(q, r, s),
                Err(CoordError::InvalidCoordinate { q, r, s }),
                "({q},{r},{s}) should be rejected"
            );
        }
        let extreme = HexCoord::new(i32::MIN, i32::MAX, 1).unwrap();
        assert!(!extreme.is_on_board(5));
    }

    #[test]
    fn from_axial_derives_s() {
        let c = HexCoord::from_axial(2, -5);
        assert_eq!(c.to_tuple(), (2, -5, 3));
    }

    #[test]
    fn add_and_sub_preserve_invariant() {
        let a = HexCoord::new(1, -3, 2).unwrap();
        let b = HexCoord::new(-2, 0, 2).unwrap();
        let sum = a + b;
        let diff = a - b;
        assert_eq!(sum.to_tuple(), (-1, -3, 4));
        assert_eq!(diff.to_tuple(), (3, -3, 0));
        assert!(HexCoord::is_valid_cubic(sum.q(), sum.r(), sum.s()));
        assert!(HexCoord::is_valid_cubic(diff.q(), diff.r(), diff.s()));
        assert_eq!(-a, HexCoord::ORIGIN - a);
    }

    #[test]
    fn distance_is_half_manhattan() {
        let a = HexCoord::new(1, -5, 4).unwrap();
        let b = HexCoord::new(-2, 3, -1).unwrap();
        assert_eq!(a.distance(b), (3 + 8 + 5) / 2);
        assert_eq!(a.distance(a), 0);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(HexCoord::from_axial(0, -5).length(), 5);
    }

    #[test]
    fn is_on_board_matches_max_norm_exhaustively() {
        for radius in [4, 5] {
            for q in -7..=7 {
                for r in -7..=7 {
                    let c = HexCoord::from_axial(q, r);
                    let expected = q.abs().max(r.abs()).max(c.s().abs()) <= radius;
                    assert_eq!(c.is_on_board(radius), expected, "{c:?} radius {radius}");
                }
            }
        }
    }

    #[test]
    fn all_on_board_counts() {
        for radius in BoardRadius::ALL {
            assert_eq!(
                HexCoord::all_on_board(radius.value()).count(),
                radius.cell_count()
            );
        }
        assert!(HexCoord::all_on_board(5).all(|c| c.is_on_board(5)));
    }

    #[test]
    fn neighbor_is_one_step_away() {
        let c = HexCoord::from_axial(2, -1);
        for dir in Direction::ALL {
            assert_eq!(c.distance(c.neighbor(dir)), 1, "{dir:?}");
        }
    }

    #[test]
    fn mirrored_swaps_r_and_s() {
        let c = HexCoord::new(1, -5, 4).unwrap();
        assert_eq!(c.mirrored().to_tuple(), (1, 4, -5));
        assert_eq!(c.mirrored().mirrored(), c);
    }

    #[test]
    fn display_and_debug() {
        let c = HexCoord::new(0, -1, 1).unwrap();
        assert_eq!(format!("{c}"), "0,-1,1");
        assert_eq!(format!("{c:?}"), "HexCoord(0, -1, 1)");
    }

    #[test]
    fn try_from_tuple() {
        assert!(HexCoord::try_from((1, 1, -2)).is_ok());
        assert!(HexCoord::try_from((1, 1, 1)).is_err());
    }

    #[test]
    fn labels() {
        let king = HexCoord::new(1, -5, 4).unwrap();
        assert_eq!(king.label(5), "G1");
        assert_eq!(HexCoord::from_label("G1", 5), Some(king));
        assert_eq!(HexCoord::from_label("Z9", 5), None);
    }
}
