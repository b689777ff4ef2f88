//! Supported board sizes.

use std::fmt;

use crate::error::BoardError;

/// Distance from the center cell to the edge of the board.
///
/// Fixed for the lifetime of a game; selects the initial layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardRadius {
    /// 61 cells.
    Four,
    /// 91 cells, the standard board with files A-K.
    #[default]
    Five,
}

impl BoardRadius {
    /// Both supported radii.
    pub const ALL: [BoardRadius; 2] = [BoardRadius::Four, BoardRadius::Five];

    /// Return the radius as an integer.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            BoardRadius::Four => 4,
            BoardRadius::Five => 5,
        }
    }

    /// Number of cells on a board of this radius: `3R(R+1) + 1`.
    #[inline]
    pub const fn cell_count(self) -> usize {
        let r = self.value() as usize;
        3 * r * (r + 1) + 1
    }
}

impl TryFrom<i32> for BoardRadius {
    type Error = BoardError;

    fn try_from(radius: i32) -> Result<Self, Self::Error> {
        match radius {
            4 => Ok(BoardRadius::Four),
            5 => Ok(BoardRadius::Five),
            _ => Err(BoardError::InvalidRadius { radius }),
        }
    }
}

impl fmt::Display for BoardRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
