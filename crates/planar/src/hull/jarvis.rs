//! Jarvis march (gift wrapping).

use crate::types::{orient, GeometryError, Point};

/// Tolerance for the start-point tie-break on X.
const START_EPS: f64 = 1e-6;

/// Convex hull by gift wrapping.
///
/// From the start point, each round keeps the remaining candidate (the
/// start point included, to detect closure) that turns furthest clockwise
/// off the current edge, under a non-strict test: of several exactly
/// collinear candidates the last one in scan order wins. Needs at least
/// two points. O(n·h) for h hull vertices.
pub fn jarvis(points: &[Point]) -> Result<Vec<Point>, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::OutOfRange {
            required: 2,
            actual: points.len(),
        });
    }

    let start = start_point(points);
    let mut remaining = points.to_vec();
    if let Some(idx) = remaining.iter().position(|&p| p == start) {
        remaining.remove(idx);
    }

    let mut hull = vec![start];
    let mut current = start;
    loop {
        // The start competes every round; picking it closes the polygon.
        let mut next = start;
        let mut next_idx = remaining.len();
        for (idx, &candidate) in remaining.iter().enumerate() {
            if dethrones(next, current, candidate) {
                next = candidate;
                next_idx = idx;
            }
        }
        if next_idx == remaining.len() {
            break;
        }
        remaining.remove(next_idx);
        hull.push(next);
        current = next;
        if next == start {
            break;
        }
    }

    Ok(hull)
}

/// Start point: minimum X, ties within [`START_EPS`] broken by maximum Y.
/// Deliberately a different convention than the Graham pivot; both are
/// valid hull starting points.
fn start_point(points: &[Point]) -> Point {
    let mut best = points[0];
    for &p in &points[1..] {
        if p.x < best.x {
            best = p;
        } else if (p.x - best.x).abs() < START_EPS && p.y > best.y {
            best = p;
        }
    }
    best
}

/// Non-strict turn test: `candidate` dethrones `best` when it lies on or
/// beyond the directed line `current → best`. On exact collinearity the
/// test still passes, so the last collinear candidate in scan order wins.
#[inline]
fn dethrones(best: Point, current: Point, candidate: Point) -> bool {
    orient(current, best, candidate) >= 0.0
}
