//! The built-in level catalog.
//!
//! Templates live in `data/levels/` and are embedded at compile time.

use std::fmt;

use crate::geom::Point;
use crate::level::Level;

/// Difficulty rating of a catalog level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A catalog entry: level metadata plus its text template.
///
/// `start` and `goal` are stored alongside the template because they
/// cannot be derived from it (some templates contain decoy goal tiles).
#[derive(Debug, Clone, Copy)]
pub struct LevelSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub template: &'static str,
    pub start: Point,
    pub goal: Point,
}

impl LevelSpec {
    /// Parse this entry's template into a [`Level`].
    ///
    /// Catalog templates are validated by tests, so this cannot fail.
    pub fn level(&self) -> Level {
        match Level::parse(self.template, self.start, self.goal) {
            Ok(level) => level,
            Err(err) => panic!("invalid catalog level {}: {err}", self.id),
        }
    }
}

/// All built-in levels, ordered by progression.
pub fn all() -> &'static [LevelSpec] {
    LEVELS
}

/// Look up a catalog level by id.
pub fn by_id(id: &str) -> Option<&'static LevelSpec> {
    LEVELS.iter().find(|spec| spec.id == id)
}

const LEVELS: &[LevelSpec] = &[
    LevelSpec {
        id: "level-1",
        name: "First Steps",
        difficulty: Difficulty::Easy,
        description: "A simple path to learn the basics.",
        template: include_str!("../data/levels/01-first-steps.txt"),
        start: Point::new(0, 0),
        goal: Point::new(4, 0),
    },
    LevelSpec {
        id: "level-2",
        name: "The Winding Path",
        difficulty: Difficulty::Easy,
        description: "Navigate through a serpentine maze.",
        template: include_str!("../data/levels/02-winding-path.txt"),
        start: Point::new(0, 0),
        goal: Point::new(6, 6),
    },
    LevelSpec {
        id: "level-3",
        name: "Trap Alley",
        difficulty: Difficulty::Medium,
        description: "Watch out for the dangerous traps!",
        template: include_str!("../data/levels/03-trap-alley.txt"),
        start: Point::new(0, 0),
        goal: Point::new(7, 1),
    },
    LevelSpec {
        id: "level-4",
        name: "The Labyrinth",
        difficulty: Difficulty::Medium,
        description: "A classic labyrinth with multiple paths.",
        template: include_str!("../data/levels/04-labyrinth.txt"),
        start: Point::new(0, 0),
        goal: Point::new(9, 9),
    },
    LevelSpec {
        id: "level-5",
        name: "Deadly Choices",
        difficulty: Difficulty::Medium,
        description: "Choose your path wisely - traps await the careless.",
        template: include_str!("../data/levels/05-deadly-choices.txt"),
        start: Point::new(0, 0),
        goal: Point::new(7, 6),
    },
    LevelSpec {
        id: "level-6",
        name: "The Spiral",
        difficulty: Difficulty::Hard,
        description: "A spiral path that tests your pathfinding skills.",
        template: include_str!("../data/levels/06-spiral.txt"),
        start: Point::new(0, 0),
        goal: Point::new(10, 10),
    },
    LevelSpec {
        id: "level-7",
        name: "Trap Maze",
        difficulty: Difficulty::Hard,
        description: "Navigate through a maze filled with deadly traps.",
        template: include_str!("../data/levels/07-trap-maze.txt"),
        start: Point::new(0, 0),
        goal: Point::new(10, 10),
    },
    LevelSpec {
        id: "level-8",
        name: "The Ultimate Challenge",
        difficulty: Difficulty::Hard,
        description: "Only the best can find their way through this maze.",
        template: include_str!("../data/levels/08-ultimate-challenge.txt"),
        start: Point::new(0, 0),
        goal: Point::new(13, 14),
    },
];
