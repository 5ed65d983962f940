//! Tile kinds and the movement-cost table.

use std::fmt;

/// Sentinel cost meaning "impassable" (wall and trap tiles).
///
/// Walkable tiles always have a finite cost ≥ 1; the cost of an
/// unwalkable tile is never consulted by the search algorithms.
pub const UNREACHABLE: i32 = i32::MAX;

/// The kind of a maze tile. Fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TileKind {
    Grass,
    Wall,
    Trap,
    Start,
    Goal,
    Checkpoint,
}

impl TileKind {
    /// Movement cost for entering a tile of this kind.
    ///
    /// Grass, start and goal cost 1, checkpoints cost 2, and walls and
    /// traps are [`UNREACHABLE`].
    #[inline]
    pub const fn cost(self) -> i32 {
        match self {
            Self::Grass | Self::Start | Self::Goal => 1,
            Self::Checkpoint => 2,
            Self::Wall | Self::Trap => UNREACHABLE,
        }
    }

    /// Whether a tile of this kind can be entered at all.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall | Self::Trap)
    }

    /// Map a level-template character to a tile kind.
    ///
    /// Legend: `G`=grass, `W`=wall, `T`=trap, `S`=start, `E`=goal (end),
    /// `C`=checkpoint. Any other character is treated as grass.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        match ch {
            'W' => Self::Wall,
            'T' => Self::Trap,
            'S' => Self::Start,
            'E' => Self::Goal,
            'C' => Self::Checkpoint,
            _ => Self::Grass,
        }
    }

    /// The template character for this tile kind.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Grass => 'G',
            Self::Wall => 'W',
            Self::Trap => 'T',
            Self::Start => 'S',
            Self::Goal => 'E',
            Self::Checkpoint => 'C',
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grass => "grass",
            Self::Wall => "wall",
            Self::Trap => "trap",
            Self::Start => "start",
            Self::Goal => "goal",
            Self::Checkpoint => "checkpoint",
        };
        f.write_str(name)
    }
}
