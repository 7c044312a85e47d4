use crate::hex::Hex;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The 6 directions in which cells can line up side-to-side. For any given
/// cell, a direction points from its center to the center of one neighbor.
///
/// Variants are listed in index order, each one a sixth of a turn past the
/// previous. The compass names describe how the directions look under the
/// pointy-top [Orientation](crate::Orientation) on a screen where `+y` points
/// down. Under the flat-top orientation everything is rotated 30 degrees, but
/// the indexes and vectors are the same.
///
/// | Index | Variant     | Vector `(q, r, s)` |
/// |-------|-------------|--------------------|
/// | 0     | `East`      | `(1, 0, -1)`       |
/// | 1     | `NorthEast` | `(1, -1, 0)`       |
/// | 2     | `NorthWest` | `(0, -1, 1)`       |
/// | 3     | `West`      | `(-1, 0, 1)`       |
/// | 4     | `SouthWest` | `(-1, 1, 0)`       |
/// | 5     | `SouthEast` | `(0, 1, -1)`       |
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    /// All directions, in index order
    pub const ALL: &'static [Self] = &[
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Look up a direction by its index. Returns an error if the index is not
    /// in `[0, 6)`.
    pub fn from_index(index: usize) -> anyhow::Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            anyhow!(
                "Invalid direction index {}; must be in [0, {})",
                index,
                Self::ALL.len()
            )
        })
    }

    /// Index of this direction, in `[0, 6)`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the unit vector that moves a cell one step in this direction
    pub fn to_vector(self) -> Hex {
        match self {
            Self::East => Hex::new(1, 0),
            Self::NorthEast => Hex::new(1, -1),
            Self::NorthWest => Hex::new(0, -1),
            Self::West => Hex::new(-1, 0),
            Self::SouthWest => Hex::new(-1, 1),
            Self::SouthEast => Hex::new(0, 1),
        }
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// The next direction in index order, i.e. one sixth of a turn
    /// counterclockwise on a y-down screen
    pub fn rotate_counterclockwise(self) -> Self {
        self.rotate(1)
    }

    /// The previous direction in index order, i.e. one sixth of a turn
    /// clockwise on a y-down screen
    pub fn rotate_clockwise(self) -> Self {
        self.rotate(Self::ALL.len() - 1)
    }

    fn rotate(self, steps: usize) -> Self {
        Self::ALL[(self.index() + steps) % Self::ALL.len()]
    }
}
