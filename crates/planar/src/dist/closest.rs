//! Divide-and-conquer closest pair.

use std::cmp::Ordering;

use crate::types::{square_distance, GeometryError, PairResult, Point};

/// Best pair of a partition: slot indices into the caller's point slice
/// plus their squared distance. Squared distances only until the very end;
/// one `sqrt` per query.
#[derive(Clone, Copy, Debug)]
struct Best {
    i: usize,
    j: usize,
    dist2: f64,
}

/// Closest pair of points.
///
/// One point yields `(p, p, 0)`; two points are returned unconditionally.
/// From three points on, the set is recursively split along X while a
/// Y-sorted view travels along, so no level re-sorts: O(n log n) overall.
/// Ties everywhere resolve to the earliest pair in X-scan order under
/// strict less-than.
pub fn closest_pair(points: &[Point]) -> Result<PairResult, GeometryError> {
    match points.len() {
        0 => Err(GeometryError::OutOfRange {
            required: 1,
            actual: 0,
        }),
        1 => Ok(PairResult::new(points[0], points[0])),
        2 => Ok(PairResult::new(points[0], points[1])),
        _ => {
            // Slot-index views keep duplicate-valued points apart: the
            // Y view is partitioned by index below, never by value.
            let mut by_x: Vec<usize> = (0..points.len()).collect();
            by_x.sort_by(|&i, &j| cmp_key(points[i].x, points[j].x));
            let mut by_y: Vec<usize> = (0..points.len()).collect();
            by_y.sort_by(|&i, &j| cmp_key(points[i].y, points[j].y));

            let mut in_left = vec![false; points.len()];
            let best = divide(points, &by_x, &by_y, &mut in_left);
            Ok(PairResult::new(points[best.i], points[best.j]))
        }
    }
}

#[inline]
fn cmp_key(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Recursive core. `xs` is the partition in X order, `ys` the same slots in
/// Y order; `in_left` is a caller-shared scratch table, clear on entry and
/// on exit.
fn divide(points: &[Point], xs: &[usize], ys: &[usize], in_left: &mut [bool]) -> Best {
    if xs.len() <= 3 {
        return brute_force(points, xs);
    }

    // Left partition takes the extra point on odd counts.
    let split = xs.len() / 2 + 1;
    let (left_xs, right_xs) = xs.split_at(split);

    for &i in left_xs {
        in_left[i] = true;
    }
    let mut left_ys = Vec::with_capacity(left_xs.len());
    let mut right_ys = Vec::with_capacity(right_xs.len());
    for &i in ys {
        if in_left[i] {
            left_ys.push(i);
        } else {
            right_ys.push(i);
        }
    }
    for &i in left_xs {
        in_left[i] = false;
    }

    let left = divide(points, left_xs, &left_ys, in_left);
    let right = divide(points, right_xs, &right_ys, in_left);
    let mut best = if right.dist2 < left.dist2 { right } else { left };

    // Cross-partition pairs can only live within delta of the split line.
    let split_x = points[xs[split]].x;
    let delta = best.dist2.sqrt();
    let strip: Vec<usize> = ys
        .iter()
        .copied()
        .filter(|&i| points[i].x >= split_x - delta && points[i].x <= split_x + delta)
        .collect();

    // Each strip point checks only the next 7 in Y order: at most 8 points
    // fit in a 2·delta × delta box while staying pairwise farther apart
    // than delta.
    for (n, &i) in strip.iter().enumerate() {
        for &j in strip.iter().skip(n + 1).take(7) {
            let d2 = square_distance(points[i], points[j]);
            if d2 < best.dist2 {
                best = Best { i, j, dist2: d2 };
            }
        }
    }

    best
}

/// All-pairs scan for partitions of up to three points, in X order.
fn brute_force(points: &[Point], xs: &[usize]) -> Best {
    let mut best = Best {
        i: xs[0],
        j: xs[0],
        dist2: f64::MAX,
    };
    for (n, &i) in xs.iter().enumerate() {
        for &j in &xs[n + 1..] {
            let d2 = square_distance(points[i], points[j]);
            if d2 < best.dist2 {
                best = Best { i, j, dist2: d2 };
            }
        }
    }
    best
}
