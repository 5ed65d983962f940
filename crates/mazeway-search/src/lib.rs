//! Deterministic maze search with replayable step traces.
//!
//! This crate provides the two search algorithms of the *mazeway*
//! ecosystem, both operating on a [`mazeway_core::Level`]:
//!
//! - **A\*** weighted shortest-path search ([`solve_astar`])
//! - **Backtracking** exhaustive depth-first search ([`solve_backtracking`])
//!
//! Both are pure functions: the same level always yields a structurally
//! identical [`AlgorithmResult`] — the same step sequence, path, explored
//! order and cost — so traces can be replayed and snapshot-tested. The
//! step trace is the contract: it records every decision in the exact
//! order it was made and drives animation, statistics and comparison
//! views through [`Playback`].
//!
//! | Algorithm | Guarantee | `total_cost` |
//! |---|---|---|
//! | [`solve_astar`] | cheapest path under the tile cost table | summed tile costs |
//! | [`solve_backtracking`] | reachability only | `path.len() - 1` |

mod astar;
mod backtrack;
mod distance;
mod playback;
mod trace;

pub use astar::solve_astar;
pub use backtrack::solve_backtracking;
pub use distance::manhattan;
pub use playback::{Playback, PlaybackState};
pub use trace::{AlgorithmResult, AlgorithmStep, SearchStats, StepKind};
