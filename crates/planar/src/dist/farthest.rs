//! Farthest pair via rotating calipers.

use crate::hull::chains;
use crate::types::{square_distance, GeometryError, PairResult, Point};

/// Farthest pair of points.
///
/// One point yields `(p, p, 0)`; two points are returned unconditionally.
/// From three points on, only hull vertices can be farthest, so the
/// monotone chains are built first and two caliper indices walk them in
/// lockstep: `i` up the upper chain, `j` down the lower chain, recording
/// the antipodal candidate at every step. The recorded pair with maximum
/// squared distance wins; ties keep the first recorded pair.
pub fn farthest_pair(points: &[Point]) -> Result<PairResult, GeometryError> {
    match points.len() {
        0 => Err(GeometryError::OutOfRange {
            required: 1,
            actual: 0,
        }),
        1 => Ok(PairResult::new(points[0], points[0])),
        2 => Ok(PairResult::new(points[0], points[1])),
        _ => {
            let hull = chains(points);
            let (upper, lower) = (hull.upper, hull.lower);

            let mut pairs: Vec<(Point, Point)> = Vec::with_capacity(upper.len() + lower.len());
            let mut i = 0;
            let mut j = lower.len() - 1;
            while i < upper.len() - 1 || j > 0 {
                pairs.push((upper[i], lower[j]));
                if i == upper.len() - 1 {
                    j -= 1;
                } else if j == 0 {
                    i += 1;
                } else if (upper[i + 1].y - upper[i].y) * (lower[j].x - lower[j - 1].x)
                    > (lower[j].y - lower[j - 1].y) * (upper[i + 1].x - upper[i].x)
                {
                    // Cross-multiplied comparison of the chains' local slopes.
                    i += 1;
                } else {
                    j -= 1;
                }
            }

            let (mut point1, mut point2) = pairs[0];
            let mut best = square_distance(point1, point2);
            for &(a, b) in &pairs[1..] {
                let d2 = square_distance(a, b);
                if d2 > best {
                    best = d2;
                    point1 = a;
                    point2 = b;
                }
            }
            Ok(PairResult::new(point1, point2))
        }
    }
}
