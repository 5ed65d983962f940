//! **mazeway-core** — Maze grid model and level catalog (core types).
//!
//! This crate provides the foundational types used across the *mazeway*
//! ecosystem: the [`Point`] coordinate type, [`TileKind`] and its
//! movement-cost table, the validated [`Level`] grid model, and the
//! built-in [`catalog`] of levels parsed from text templates.

pub mod catalog;
pub mod geom;
pub mod level;
pub mod tile;

pub use catalog::{Difficulty, LevelSpec};
pub use geom::Point;
pub use level::{Level, LevelError};
pub use tile::{TileKind, UNREACHABLE};
