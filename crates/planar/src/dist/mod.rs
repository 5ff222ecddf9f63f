//! Extreme-distance pair queries.
//!
//! Purpose
//! - `closest_pair`: divide and conquer over parallel X/Y-sorted views,
//!   O(n log n).
//! - `farthest_pair`: rotating calipers over the monotone hull chains,
//!   O(n log n) dominated by the hull sort.
//!
//! Both share the trivial small-input contract: one point returns
//! `(p, p, 0)`, two points return them unconditionally; the empty set is
//! an out-of-range error.

mod closest;
mod farthest;

pub use closest::closest_pair;
pub use farthest::farthest_pair;
