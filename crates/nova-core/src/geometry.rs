//! Pure geometry helpers used by the simulation systems.

/// A point in playfield space. x grows to the right, y grows downward.
pub type Point = glam::DVec2;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Linear interpolation from `start` to `end`.
///
/// `t` is not clamped; callers decide whether overshoot is meaningful.
pub fn lerp_point(start: Point, end: Point, t: f64) -> Point {
    start + (end - start) * t
}

/// Axis-aligned proximity test: both |dx| and |dy| strictly below `tolerance`.
///
/// Impact resolution uses this box test while blast collision uses a true
/// circular radius.
pub fn within_box(a: Point, b: Point, tolerance: f64) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}
