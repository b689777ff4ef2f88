//! Direction vectors: the six primary steps and the tables derived from them.

use crate::coord::HexCoord;

/// One of the six primary directions, in counter-clockwise order.
///
/// "North" points toward increasing `r`, which is the direction White's pawns
/// advance in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    NorthEast = 0,
    North = 1,
    NorthWest = 2,
    SouthWest = 3,
    South = 4,
    SouthEast = 5,
}

impl Direction {
    /// Total number of primary directions.
    pub const COUNT: usize = 6;

    /// All directions in index order.
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the direction `steps` places further counter-clockwise.
    #[inline]
    pub const fn rotate(self, steps: usize) -> Direction {
        Direction::ALL[(self.index() + steps) % Direction::COUNT]
    }

    /// Return the opposite direction.
    #[inline]
    pub const fn opposite(self) -> Direction {
        self.rotate(3)
    }

    /// The unit vector for this direction.
    #[inline]
    pub const fn vector(self) -> HexCoord {
        ROOK_DIRECTIONS[self.index()]
    }
}

/// Unit vectors of the six primary directions, indexed by [`Direction::index`].
pub const ROOK_DIRECTIONS: [HexCoord; 6] = [
    HexCoord::from_axial(1, 0),  // NE (1, 0, -1)
    HexCoord::from_axial(0, 1),  // N  (0, 1, -1)
    HexCoord::from_axial(-1, 1), // NW (-1, 1, 0)
    HexCoord::from_axial(-1, 0), // SW (-1, 0, 1)
    HexCoord::from_axial(0, -1), // S  (0, -1, 1)
    HexCoord::from_axial(1, -1), // SE (1, -1, 0)
];

/// Diagonal directions: the sum of each pair of adjacent primary directions.
///
/// Each is a distance-2 jump but counts as a single sliding step.
pub const BISHOP_DIRECTIONS: [HexCoord; 6] = {
    let mut table = [HexCoord::ORIGIN; 6];
    let mut i = 0;
    while i < 6 {
        table[i] = ROOK_DIRECTIONS[i].offset(ROOK_DIRECTIONS[(i + 1) % 6]);
        i += 1;
    }
    table
};

/// Rook and bishop directions together.
pub const QUEEN_DIRECTIONS: [HexCoord; 12] = {
    let mut table = [HexCoord::ORIGIN; 12];
    let mut i = 0;
    while i < 6 {
        table[i] = ROOK_DIRECTIONS[i];
        table[i + 6] = BISHOP_DIRECTIONS[i];
        i += 1;
    }
    table
};

/// Knight jumps: two steps along a primary direction, then one step along a
/// neighbouring primary direction. All twelve land at distance 3.
///
/// Summing one step with the direction two places round (`d[i] + d[i±2]`)
/// only lands on the six adjacent cells, which cannot give a twelve-jump
/// knight, so the leg is lengthened to two steps instead.
pub const KNIGHT_OFFSETS: [HexCoord; 12] = {
    let mut table = [HexCoord::ORIGIN; 12];
    let mut i = 0;
    while i < 6 {
        let straight = ROOK_DIRECTIONS[i].scale(2);
        table[2 * i] = straight.offset(ROOK_DIRECTIONS[(i + 1) % 6]);
        table[2 * i + 1] = straight.offset(ROOK_DIRECTIONS[(i + 5) % 6]);
        i += 1;
    }
    table
};
