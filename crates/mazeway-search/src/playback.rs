//! Step-by-step replay of a finished search.
//!
//! A [`Playback`] walks a result's step trace one element at a time,
//! accumulating the tile sets a renderer needs to paint progress. It holds
//! no timer: pacing is the caller's concern, typically a timer that calls
//! [`Playback::advance`] once per tick.

use std::collections::HashSet;

use mazeway_core::Point;

use crate::trace::{AlgorithmResult, AlgorithmStep, StepKind};

/// Where a replay currently stands.
///
/// `Idle → Exploring → Solved | Failed`; the transition to a terminal
/// state happens when the last step (always `Found` or `DeadEnd`) has
/// been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackState {
    Idle,
    Exploring,
    Solved,
    Failed,
}

/// Replays an [`AlgorithmResult`] step by step.
#[derive(Debug, Clone)]
pub struct Playback {
    result: AlgorithmResult,
    cursor: usize,
    state: PlaybackState,
    explored_tiles: HashSet<Point>,
    backtrack_tiles: HashSet<Point>,
    path_tiles: HashSet<Point>,
}

impl Playback {
    /// Start a replay at the beginning, nothing revealed.
    pub fn new(result: AlgorithmResult) -> Self {
        Self {
            result,
            cursor: 0,
            state: PlaybackState::Idle,
            explored_tiles: HashSet::new(),
            backtrack_tiles: HashSet::new(),
            path_tiles: HashSet::new(),
        }
    }

    /// Reveal the next step and return it, or `None` when the trace is
    /// exhausted.
    ///
    /// Explore steps accumulate into [`explored_tiles`](Self::explored_tiles),
    /// backtrack steps into [`backtrack_tiles`](Self::backtrack_tiles).
    /// Revealing the final step transitions to `Solved` (and fills
    /// [`path_tiles`](Self::path_tiles) from the result path) or `Failed`.
    pub fn advance(&mut self) -> Option<&AlgorithmStep> {
        if self.cursor >= self.result.steps.len() {
            return None;
        }

        let step = &self.result.steps[self.cursor];
        match step.kind {
            StepKind::Explore => {
                self.explored_tiles.insert(step.pos);
            }
            StepKind::Backtrack => {
                self.backtrack_tiles.insert(step.pos);
            }
            _ => {}
        }
        self.cursor += 1;

        if self.cursor == self.result.steps.len() {
            if self.result.success {
                self.path_tiles.extend(self.result.path.iter().copied());
                self.state = PlaybackState::Solved;
            } else {
                self.state = PlaybackState::Failed;
            }
        } else {
            self.state = PlaybackState::Exploring;
        }

        Some(&self.result.steps[self.cursor - 1])
    }

    /// Reveal all remaining steps at once.
    pub fn run_to_end(&mut self) {
        while self.advance().is_some() {}
    }

    /// Rewind to the beginning, clearing everything revealed so far.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        self.explored_tiles.clear();
        self.backtrack_tiles.clear();
        self.path_tiles.clear();
    }

    /// The most recently revealed step, if any.
    pub fn current(&self) -> Option<&AlgorithmStep> {
        if self.cursor == 0 {
            None
        } else {
            Some(&self.result.steps[self.cursor - 1])
        }
    }

    /// Number of steps revealed so far.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current replay state.
    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether every step has been revealed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.result.steps.len()
    }

    /// Tiles revealed by explore steps.
    pub fn explored_tiles(&self) -> &HashSet<Point> {
        &self.explored_tiles
    }

    /// Tiles revealed by backtrack steps.
    pub fn backtrack_tiles(&self) -> &HashSet<Point> {
        &self.backtrack_tiles
    }

    /// Final-path tiles; populated only once the replay reaches `Solved`.
    pub fn path_tiles(&self) -> &HashSet<Point> {
        &self.path_tiles
    }

    /// The underlying result being replayed.
    pub fn result(&self) -> &AlgorithmResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::solve_astar;
    use crate::backtrack::solve_backtracking;
    use mazeway_core::Level;

    fn corridor() -> Level {
        Level::parse("SGGGE", Point::new(0, 0), Point::new(4, 0)).unwrap()
    }

    fn walled() -> Level {
        Level::parse("SWE", Point::new(0, 0), Point::new(2, 0)).unwrap()
    }

    #[test]
    fn starts_idle_with_nothing_revealed() {
        let pb = Playback::new(solve_astar(&corridor()));
        assert_eq!(pb.state(), PlaybackState::Idle);
        assert_eq!(pb.cursor(), 0);
        assert!(pb.current().is_none());
        assert!(pb.explored_tiles().is_empty());
        assert!(pb.path_tiles().is_empty());
    }

    #[test]
    fn advances_through_every_step_in_order() {
        let result = solve_astar(&corridor());
        let steps = result.steps.clone();
        let mut pb = Playback::new(result);
        for expected in &steps {
            let step = pb.advance().expect("trace ended early");
            assert_eq!(step, expected);
        }
        assert!(pb.advance().is_none());
        assert_eq!(pb.cursor(), steps.len());
    }

    #[test]
    fn successful_replay_ends_solved_with_path_tiles() {
        let result = solve_astar(&corridor());
        let path: Vec<Point> = result.path.clone();
        let mut pb = Playback::new(result);
        pb.run_to_end();
        assert_eq!(pb.state(), PlaybackState::Solved);
        assert!(pb.is_finished());
        for p in path {
            assert!(pb.path_tiles().contains(&p));
        }
    }

    #[test]
    fn failed_replay_ends_failed_without_path_tiles() {
        let mut pb = Playback::new(solve_astar(&walled()));
        pb.run_to_end();
        assert_eq!(pb.state(), PlaybackState::Failed);
        assert!(pb.path_tiles().is_empty());
    }

    #[test]
    fn explore_and_backtrack_tiles_accumulate_separately() {
        let level = Level::parse(
            "GWE\n\
             SWG\n\
             GGG",
            Point::new(0, 1),
            Point::new(2, 0),
        )
        .unwrap();
        let mut pb = Playback::new(solve_backtracking(&level));
        pb.run_to_end();
        assert!(pb.backtrack_tiles().contains(&Point::new(0, 0)));
        assert!(pb.explored_tiles().contains(&Point::new(0, 1)));
        assert!(!pb.backtrack_tiles().contains(&Point::new(2, 0)));
    }

    #[test]
    fn reset_rewinds_completely() {
        let mut pb = Playback::new(solve_astar(&corridor()));
        pb.run_to_end();
        pb.reset();
        assert_eq!(pb.state(), PlaybackState::Idle);
        assert_eq!(pb.cursor(), 0);
        assert!(pb.explored_tiles().is_empty());
        assert!(pb.backtrack_tiles().is_empty());
        assert!(pb.path_tiles().is_empty());
        // Replayable again.
        assert!(pb.advance().is_some());
        assert_eq!(pb.state(), PlaybackState::Exploring);
    }
}
