//! Geometric primitives over finite planar point sets.
//!
//! Purpose
//! - Provide the classic point-set queries as small, deterministic, pure
//!   functions: convex hull boundary (Graham scan, Jarvis march), closest
//!   pair (divide and conquer) and farthest pair (rotating calipers).
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit: plain
//!   `f64` predicates, fixed named epsilons where an algorithm needs one,
//!   no exact-arithmetic fallback.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (exact field-wise equality).
//! - Inputs are borrowed slices; every operation copies what it needs and
//!   never mutates caller data.
//! - Precondition failures surface as [`GeometryError`]; degenerate but
//!   valid inputs (all-collinear, duplicates) produce degenerate but
//!   correct results, never errors.

pub mod dist;
pub mod hull;
pub mod rand;
mod types;

pub use types::{GeometryError, PairResult, Point};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dist::{closest_pair, farthest_pair};
    pub use crate::hull::{chains, graham, jarvis, HullChains};
    pub use crate::rand::{draw_cloud, CloudCfg};
    pub use crate::{GeometryError, PairResult, Point};
}
