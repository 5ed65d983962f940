//! Step traces and search results.
//!
//! Every decision a search makes is recorded as an [`AlgorithmStep`] in the
//! exact temporal order it was made. The step sequence is the authoritative
//! audit trail of the search: consumers replay it element by element and
//! must never reorder or deduplicate it.

use mazeway_core::Point;

/// The kind of event a step records.
///
/// `Path` is part of the public vocabulary for trace consumers (a revealed
/// final-path tile) even though neither search emits it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StepKind {
    Explore,
    Path,
    Backtrack,
    Found,
    DeadEnd,
}

/// A single recorded search decision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmStep {
    pub kind: StepKind,
    pub pos: Point,
    pub message: String,
    /// Accumulated cost at this step, where the algorithm tracks one.
    pub cost: Option<i32>,
    /// Heuristic estimate at this step, where the algorithm computes one.
    pub heuristic: Option<i32>,
}

impl AlgorithmStep {
    pub(crate) fn new(kind: StepKind, pos: Point, message: String) -> Self {
        Self {
            kind,
            pos,
            message,
            cost: None,
            heuristic: None,
        }
    }

    pub(crate) fn with_cost(mut self, cost: i32) -> Self {
        self.cost = Some(cost);
        self
    }

    pub(crate) fn with_heuristic(mut self, heuristic: i32) -> Self {
        self.heuristic = Some(heuristic);
        self
    }
}

/// The complete, immutable outcome of one search invocation.
///
/// "No path exists" is a normal result (`success == false`, empty `path`,
/// terminal [`StepKind::DeadEnd`] step), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmResult {
    /// Start-to-goal coordinates; empty when the search failed.
    pub path: Vec<Point>,
    /// Every decision made, in temporal order. Never empty.
    pub steps: Vec<AlgorithmStep>,
    /// Coordinates in the order they were committed to.
    pub explored: Vec<Point>,
    pub success: bool,
    /// A*: the summed tile costs of `path` ([`mazeway_core::UNREACHABLE`]
    /// on failure). Backtracking: `path.len() - 1`, a length proxy.
    pub total_cost: i32,
}

/// Summary numbers for a finished search, as shown in comparison views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub explored: usize,
    pub steps: usize,
    pub path_len: usize,
    pub total_cost: i32,
}

impl SearchStats {
    /// Summarize a result.
    pub fn of(result: &AlgorithmResult) -> Self {
        Self {
            explored: result.explored.len(),
            steps: result.steps.len(),
            path_len: result.path.len(),
            total_cost: result.total_cost,
        }
    }
}
