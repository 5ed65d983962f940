use mazeway_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent as an A* heuristic on a 4-connected grid
/// whose minimum step cost is 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
