//! Graham scan: pivot, polar-angle sort, stack scan.

use std::cmp::Ordering;

use crate::types::{orient, GeometryError, Point};

/// Tolerance for the pivot tie-break: points whose Y lies within this band
/// of the minimum Y compete on X. Changing it changes which of several
/// near-minimal points becomes the pivot, so it is fixed here.
const PIVOT_EPS: f64 = 1e-6;

/// Convex hull by Graham scan.
///
/// Returns the hull vertices in counterclockwise order starting at the
/// pivot. Needs at least two points. O(n log n).
pub fn graham(points: &[Point]) -> Result<Vec<Point>, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::OutOfRange {
            required: 2,
            actual: points.len(),
        });
    }

    let pivot = pivot_point(points);

    // Ascending polar angle around the pivot; equal angles resolve by
    // distance from the pivot, nearest first.
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        let angle_a = (a.y - pivot.y).atan2(a.x - pivot.x);
        let angle_b = (b.y - pivot.y).atan2(b.x - pivot.x);
        match angle_a.partial_cmp(&angle_b).unwrap_or(Ordering::Equal) {
            Ordering::Equal => (a - pivot)
                .norm()
                .partial_cmp(&(b - pivot).norm())
                .unwrap_or(Ordering::Equal),
            o => o,
        }
    });

    let mut hull: Vec<Point> = Vec::with_capacity(pts.len());
    hull.push(pts[0]);
    hull.push(pts[1]);
    for &p in &pts[2..] {
        while hull.len() >= 2 && orient(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    Ok(hull)
}

/// Pivot: minimum Y, ties (within [`PIVOT_EPS`]) broken by minimum X.
/// Composed from the two minima; under an effective epsilon tie the
/// composed point may be none of the inputs, only the sort anchor.
fn pivot_point(points: &[Point]) -> Point {
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let min_x = points
        .iter()
        .filter(|p| (p.y - min_y).abs() < PIVOT_EPS)
        .map(|p| p.x)
        .fold(f64::INFINITY, f64::min);
    Point::new(min_x, min_y)
}
