//! Best-first (A*) search.

use log::debug;
use mazeway_core::{Level, Point, UNREACHABLE};

use crate::distance::manhattan;
use crate::trace::{AlgorithmResult, AlgorithmStep, StepKind};

/// An open-list entry. Best known `g`/`parent` per cell live in flat
/// arrays indexed by cell, so entries stay cheap to overwrite.
#[derive(Clone, Copy)]
struct OpenNode {
    pos: Point,
    g: i32,
    h: i32,
    f: i32,
}

/// Compute the cheapest path from start to goal using A* with the
/// Manhattan heuristic, recording every decision as a step.
///
/// The returned path cost is minimal under the tile cost table. On
/// failure the result carries an empty path and
/// `total_cost == UNREACHABLE`.
///
/// Deterministic: ties on `f` are broken by whichever entry comes first
/// in the open list's current order (stable first-minimum selection).
pub fn solve_astar(level: &Level) -> AlgorithmResult {
    let start = level.start();
    let goal = level.goal();
    debug!("A* search from {start} to {goal}");

    let mut steps: Vec<AlgorithmStep> = Vec::new();
    let mut explored: Vec<Point> = Vec::new();

    let len = (level.width() * level.height()) as usize;
    let width = level.width();
    let idx = |p: Point| (p.y * width + p.x) as usize;

    // Per-cell node arena: best g, parent cell, closed flag.
    let mut g_score = vec![UNREACHABLE; len];
    let mut parent = vec![usize::MAX; len];
    let mut closed = vec![false; len];

    let start_h = manhattan(start, goal);
    g_score[idx(start)] = 0;

    let mut open: Vec<OpenNode> = vec![OpenNode {
        pos: start,
        g: 0,
        h: start_h,
        f: start_h,
    }];

    steps.push(
        AlgorithmStep::new(StepKind::Explore, start, format!("Starting A* from {start}"))
            .with_cost(0)
            .with_heuristic(start_h),
    );

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while !open.is_empty() {
        // Stable first-minimum selection on f.
        let mut best = 0;
        for i in 1..open.len() {
            if open[i].f < open[best].f {
                best = i;
            }
        }
        let current = open.remove(best);
        let ci = idx(current.pos);

        if current.pos == goal {
            let mut path = Vec::new();
            let mut node = ci;
            while node != usize::MAX {
                path.push(Point::new(node as i32 % width, node as i32 / width));
                node = parent[node];
            }
            path.reverse();

            steps.push(
                AlgorithmStep::new(
                    StepKind::Found,
                    current.pos,
                    format!("Goal reached! Total cost: {}", current.g),
                )
                .with_cost(current.g),
            );

            debug!("A* solved: cost {}, {} explored", current.g, explored.len());
            return AlgorithmResult {
                path,
                steps,
                explored,
                success: true,
                total_cost: current.g,
            };
        }

        closed[ci] = true;
        explored.push(current.pos);

        steps.push(
            AlgorithmStep::new(
                StepKind::Explore,
                current.pos,
                format!(
                    "Exploring {} | g={}, h={:.2}, f={:.2}",
                    current.pos, current.g, current.h as f64, current.f as f64
                ),
            )
            .with_cost(current.g)
            .with_heuristic(current.h),
        );

        nbuf.clear();
        level.neighbors(current.pos, &mut nbuf);

        for &np in &nbuf {
            let ni = idx(np);
            if closed[ni] || !level.is_walkable(np) {
                continue;
            }

            let tentative_g = current.g + level.cost(np);
            if tentative_g >= g_score[ni] {
                continue;
            }

            g_score[ni] = tentative_g;
            parent[ni] = ci;
            let h = manhattan(np, goal);
            let node = OpenNode {
                pos: np,
                g: tentative_g,
                h,
                f: tentative_g + h,
            };

            // A coordinate never holds two live open entries: overwrite
            // the stale one in place, or append.
            match open.iter().position(|n| n.pos == np) {
                Some(existing) => open[existing] = node,
                None => open.push(node),
            }
        }
    }

    steps.push(AlgorithmStep::new(
        StepKind::DeadEnd,
        goal,
        "No path found to the goal!".to_string(),
    ));

    debug!("A* exhausted: no path, {} explored", explored.len());
    AlgorithmResult {
        path: Vec::new(),
        steps,
        explored,
        success: false,
        total_cost: UNREACHABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(template: &str, start: Point, goal: Point) -> Level {
        Level::parse(template, start, goal).unwrap()
    }

    const CORRIDOR: &str = "\
        SGGGE
        GWWWG
        GGGGG
        GWWWG
        GGGGG";

    #[test]
    fn straight_corridor() {
        let level = parse(CORRIDOR, Point::new(0, 0), Point::new(4, 0));
        let result = solve_astar(&level);
        assert!(result.success);
        assert_eq!(
            result.path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0),
            ]
        );
        assert_eq!(result.total_cost, 4);
    }

    #[test]
    fn trace_starts_and_ends_as_specified() {
        let level = parse(CORRIDOR, Point::new(0, 0), Point::new(4, 0));
        let result = solve_astar(&level);
        let first = &result.steps[0];
        assert_eq!(first.kind, StepKind::Explore);
        assert_eq!(first.message, "Starting A* from (0, 0)");
        assert_eq!(first.cost, Some(0));
        assert_eq!(first.heuristic, Some(4));
        let last = result.steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.message, "Goal reached! Total cost: 4");
        assert_eq!(last.cost, Some(4));
    }

    #[test]
    fn explore_message_two_decimal_precision() {
        let level = parse(CORRIDOR, Point::new(0, 0), Point::new(4, 0));
        let result = solve_astar(&level);
        // Second step is the start cell being expanded.
        assert_eq!(
            result.steps[1].message,
            "Exploring (0, 0) | g=0, h=4.00, f=4.00"
        );
    }

    #[test]
    fn goal_gets_no_explore_step() {
        let level = parse(CORRIDOR, Point::new(0, 0), Point::new(4, 0));
        let result = solve_astar(&level);
        assert!(!result.explored.contains(&Point::new(4, 0)));
        assert!(
            result
                .steps
                .iter()
                .all(|s| s.kind != StepKind::Explore || s.pos != Point::new(4, 0))
        );
    }

    #[test]
    fn checkpoint_route_beats_longer_grass_detour() {
        // Via the checkpoint: 2 + 1 = 3. Around the wall: 6 unit steps.
        let level = parse(
            "SCE\n\
             GWG\n\
             GGG",
            Point::new(0, 0),
            Point::new(2, 0),
        );
        let result = solve_astar(&level);
        assert!(result.success);
        assert_eq!(result.total_cost, 3);
        assert_eq!(
            result.path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn expensive_checkpoint_corridor_is_avoided() {
        // Direct row: 2 + 2 + 2 + 1 = 7 through three checkpoints. The
        // grass detour below is 6 unit steps. Cell count is not the
        // objective; summed tile cost is.
        let level = parse(
            "SCCCE\n\
             GGGGG",
            Point::new(0, 0),
            Point::new(4, 0),
        );
        let result = solve_astar(&level);
        assert_eq!(result.total_cost, 6);
        assert!(
            result
                .path
                .iter()
                .all(|&p| level.at(p) != Some(mazeway_core::TileKind::Checkpoint))
        );
    }

    #[test]
    fn walled_off_goal_fails_cleanly() {
        let level = parse(
            "SGWGE\n\
             GGWGG\n\
             GGWGG",
            Point::new(0, 0),
            Point::new(4, 0),
        );
        let result = solve_astar(&level);
        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.total_cost, UNREACHABLE);
        let last = result.steps.last().unwrap();
        assert_eq!(last.kind, StepKind::DeadEnd);
        assert_eq!(last.pos, Point::new(4, 0));
        assert_eq!(last.message, "No path found to the goal!");
    }

    #[test]
    fn traps_are_never_entered() {
        let level = parse(
            "SGGGGGGG\n\
             WTWTWTWE\n\
             GGGGGGGG",
            Point::new(0, 0),
            Point::new(7, 1),
        );
        let result = solve_astar(&level);
        assert!(result.success);
        for &p in &result.path {
            assert!(level.is_walkable(p));
        }
        for &p in &result.explored {
            assert!(level.is_walkable(p));
        }
    }

    #[test]
    fn path_is_4_connected_and_walkable() {
        let level = parse(CORRIDOR, Point::new(0, 0), Point::new(4, 4));
        let result = solve_astar(&level);
        assert!(result.success);
        assert_eq!(result.path[0], level.start());
        assert_eq!(*result.path.last().unwrap(), level.goal());
        for pair in result.path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1);
            assert!(level.is_walkable(pair[1]));
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let level = parse(CORRIDOR, Point::new(0, 0), Point::new(4, 4));
        let a = solve_astar(&level);
        let b = solve_astar(&level);
        assert_eq!(a, b);
    }

    #[test]
    fn single_cell_start_is_goal() {
        // Start tile doubling as the goal coordinate: the start node pops
        // first and the search returns immediately with a zero-cost path.
        let level = Level::new(
            vec![vec![mazeway_core::TileKind::Start]],
            Point::ZERO,
            Point::ZERO,
        )
        .unwrap();
        let result = solve_astar(&level);
        assert!(result.success);
        assert_eq!(result.path, vec![Point::ZERO]);
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[1].kind, StepKind::Found);
        assert!(result.explored.is_empty());
    }
}
