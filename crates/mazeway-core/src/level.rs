//! The maze level model: a rectangular grid of tiles with a designated
//! start and goal.
//!
//! A [`Level`] is validated on construction and immutable afterwards. The
//! search engine assumes these invariants hold and does not re-check them.

use std::fmt;

use crate::geom::Point;
use crate::tile::TileKind;

/// An immutable rectangular maze with start and goal coordinates.
///
/// Tiles are stored row-major. `start` and `goal` are guaranteed to be in
/// bounds and walkable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    tiles: Vec<TileKind>,
    size: Point,
    start: Point,
    goal: Point,
}

impl Level {
    /// Build a level from rows of tiles.
    ///
    /// Validates that the grid is non-empty and rectangular, and that
    /// `start` and `goal` are in bounds and not wall or trap tiles.
    pub fn new(rows: Vec<Vec<TileKind>>, start: Point, goal: Point) -> Result<Self, LevelError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(LevelError::Empty);
        }
        let width = rows[0].len();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::InconsistentWidth { row: y });
            }
        }
        let size = Point::new(width as i32, rows.len() as i32);
        let level = Self {
            tiles: rows.into_iter().flatten().collect(),
            size,
            start,
            goal,
        };
        for p in [start, goal] {
            let Some(tile) = level.at(p) else {
                return Err(LevelError::OutOfBounds(p));
            };
            if !tile.is_walkable() {
                return Err(LevelError::Blocked(p));
            }
        }
        Ok(level)
    }

    /// Parse a level from a text template.
    ///
    /// Lines are trimmed individually, so indented template literals work.
    /// See [`TileKind::from_char`] for the character legend. `start` and
    /// `goal` are given explicitly rather than derived from `S`/`E` tiles:
    /// some levels contain decoy goal tiles.
    pub fn parse(template: &str, start: Point, goal: Point) -> Result<Self, LevelError> {
        let rows: Vec<Vec<TileKind>> = template
            .trim()
            .lines()
            .map(|line| line.trim().chars().map(TileKind::from_char).collect())
            .collect();
        Self::new(rows, start, goal)
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    /// Width of the grid in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    /// Height of the grid in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// The start coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal coordinate.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size.x && p.y >= 0 && p.y < self.size.y
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<TileKind> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[(p.y * self.size.x + p.x) as usize])
    }

    /// Append the in-bounds cardinal neighbours of `p` to `buf`, in up,
    /// right, down, left order. Diagonal moves are never produced.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Whether the tile at `p` can be entered. `p` must be in bounds.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.tile(p).is_walkable()
    }

    /// Movement cost for entering the tile at `p`. `p` must be in bounds.
    #[inline]
    pub fn cost(&self, p: Point) -> i32 {
        self.tile(p).cost()
    }

    #[inline]
    fn tile(&self, p: Point) -> TileKind {
        match self.at(p) {
            Some(t) => t,
            None => panic!("level coordinate out of bounds: {p}"),
        }
    }
}

/// Errors that can occur when building a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth { row: usize },
    /// Start or goal lies outside the grid.
    OutOfBounds(Point),
    /// Start or goal is a wall or trap tile.
    Blocked(Point),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "level grid is empty"),
            Self::InconsistentWidth { row } => {
                write!(f, "level row {row} has a different width than row 0")
            }
            Self::OutOfBounds(p) => write!(f, "start/goal {p} is out of bounds"),
            Self::Blocked(p) => write!(f, "start/goal {p} is not walkable"),
        }
    }
}

impl std::error::Error for LevelError {}
