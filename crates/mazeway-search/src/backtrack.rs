//! Depth-first search with backtracking.

use log::debug;
use mazeway_core::{Level, Point};

use crate::trace::{AlgorithmResult, AlgorithmStep, StepKind};

/// A cell on the candidate path and how many of its neighbours have been
/// tried so far.
struct Frame {
    pos: Point,
    next: usize,
}

/// Exhaustively search for *a* path from start to goal, depth first,
/// backtracking out of dead ends.
///
/// Neighbours are tried in the fixed up, right, down, left order, and the
/// first success short-circuits. Cells are never retried once visited, so
/// the search terminates in O(cells). Unlike A* this makes no optimality
/// claim: it answers reachability, and `total_cost` is a path-length
/// proxy (`path.len() - 1`), **not** a cost-table sum.
///
/// On total failure the path is empty and `total_cost` is therefore `-1`.
/// This sentinel is deliberate: it mirrors the length proxy rather than
/// inventing a separate failure value, and callers should branch on
/// `success`, not on the cost.
///
/// The recursion of the textbook formulation is replaced by an explicit
/// frame stack with identical visit order and step emission timing.
pub fn solve_backtracking(level: &Level) -> AlgorithmResult {
    let start = level.start();
    let goal = level.goal();
    debug!("backtracking search from {start} to {goal}");

    let mut steps: Vec<AlgorithmStep> = Vec::new();
    let mut explored: Vec<Point> = Vec::new();

    let width = level.width();
    let len = (width * level.height()) as usize;
    let idx = |p: Point| (p.y * width + p.x) as usize;

    let mut visited = vec![false; len];
    let mut path: Vec<Point> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    steps.push(AlgorithmStep::new(
        StepKind::Explore,
        start,
        format!("Starting backtracking from {start}"),
    ));

    // Enter the start cell. Start is walkable by level invariant.
    visited[idx(start)] = true;
    path.push(start);
    explored.push(start);
    steps.push(AlgorithmStep::new(
        StepKind::Explore,
        start,
        format!("Exploring {start} - path length: {}", path.len()),
    ));

    let mut found = start == goal;
    if found {
        steps.push(AlgorithmStep::new(
            StepKind::Found,
            start,
            format!("Goal reached! Path length: {}", path.len()),
        ));
    } else {
        stack.push(Frame { pos: start, next: 0 });
    }

    while let Some(top) = stack.len().checked_sub(1) {
        let pos = stack[top].pos;

        if stack[top].next < 4 {
            let n = pos.neighbors_4()[stack[top].next];
            stack[top].next += 1;

            // Pruned silently: out of bounds, already committed to, or
            // unwalkable cells produce no step.
            if !level.contains(n) || visited[idx(n)] || !level.is_walkable(n) {
                continue;
            }

            visited[idx(n)] = true;
            path.push(n);
            explored.push(n);
            steps.push(AlgorithmStep::new(
                StepKind::Explore,
                n,
                format!("Exploring {n} - path length: {}", path.len()),
            ));

            if n == goal {
                steps.push(AlgorithmStep::new(
                    StepKind::Found,
                    n,
                    format!("Goal reached! Path length: {}", path.len()),
                ));
                found = true;
                break;
            }
            stack.push(Frame { pos: n, next: 0 });
        } else {
            // All four neighbours tried: abandon this cell. It stays
            // visited and is never retried.
            path.pop();
            steps.push(AlgorithmStep::new(
                StepKind::Backtrack,
                pos,
                format!("Dead end at {pos} - backtracking..."),
            ));
            stack.pop();
        }
    }

    if !found {
        steps.push(AlgorithmStep::new(
            StepKind::DeadEnd,
            goal,
            "No path found to the goal!".to_string(),
        ));
    }

    debug!(
        "backtracking {}: {} explored",
        if found { "solved" } else { "exhausted" },
        explored.len()
    );

    let total_cost = path.len() as i32 - 1;
    AlgorithmResult {
        path,
        steps,
        explored,
        success: found,
        total_cost,
    }
}
