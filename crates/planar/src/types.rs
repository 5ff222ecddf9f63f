//! Shared value types and scalar predicates.
//!
//! - `Point`: plain `nalgebra::Vector2<f64>`; equality is exact field
//!   comparison, ordering is defined per algorithm, never intrinsically.
//! - `orient`: the one orientation predicate every hull routine sign-tests.
//! - `PairResult`: two points plus their Euclidean distance.
//! - `GeometryError`: two-tier precondition taxonomy.

use std::fmt;

use nalgebra::Vector2;

/// A point in the plane. Equality is exact on both coordinates.
pub type Point = Vector2<f64>;

/// Signed area of the parallelogram spanned by `b - a` and `c - a`.
/// Positive when `a → b → c` turns counterclockwise, negative clockwise,
/// zero when collinear. Plain floating point, no robustness guarantees.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Squared Euclidean distance. Cheaper than `norm()` inside comparison
/// loops; monotone in the true distance, so argmin/argmax are unchanged.
#[inline]
pub fn square_distance(p: Point, q: Point) -> f64 {
    let d = p - q;
    d.x * d.x + d.y * d.y
}

/// Result of a pair query: two points of the input and their distance.
///
/// Invariants: `distance >= 0`, and `distance == 0` iff the two points are
/// value-equal (single-point inputs report `(p, p, 0)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairResult {
    pub point1: Point,
    pub point2: Point,
    pub distance: f64,
}

impl PairResult {
    /// Pack two points and compute their Euclidean distance.
    #[inline]
    pub fn new(point1: Point, point2: Point) -> Self {
        Self {
            point1,
            point2,
            distance: square_distance(point1, point2).sqrt(),
        }
    }
}

/// Precondition failures of the point-set operations.
///
/// Two tiers only: an unusable input collection, or too few points. All
/// checks run synchronously at entry; no operation returns partial results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// The input collection could not be used as given. Slices cannot be
    /// absent in Rust, so the native API never produces this variant; it
    /// exists for parity with bindings where a collection can be missing.
    InvalidArgument(&'static str),
    /// Fewer points than the operation's minimum (2 for hull finders,
    /// 1 for the pair finders).
    OutOfRange { required: usize, actual: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidArgument(what) => {
                write!(f, "invalid argument: {}", what)
            }
            GeometryError::OutOfRange { required, actual } => {
                write!(
                    f,
                    "point set too small: need at least {} points, got {}",
                    required, actual
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orient_sign_matches_turn_direction() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert!(orient(a, b, vector![1.0, 1.0]) > 0.0); // left
        assert!(orient(a, b, vector![1.0, -1.0]) < 0.0); // right
        assert_eq!(orient(a, b, vector![2.0, 0.0]), 0.0); // straight
    }

    #[test]
    fn pair_result_distance_is_euclidean() {
        let r = PairResult::new(vector![0.0, 0.0], vector![3.0, 4.0]);
        assert_eq!(r.distance, 5.0);
        let same = PairResult::new(vector![2.0, 2.0], vector![2.0, 2.0]);
        assert_eq!(same.distance, 0.0);
    }

    #[test]
    fn error_display_names_the_shortfall() {
        let e = GeometryError::OutOfRange {
            required: 2,
            actual: 1,
        };
        let msg = e.to_string();
        assert!(msg.contains("at least 2"));
        assert!(msg.contains("got 1"));
    }
}
