//! Convex hull construction.
//!
//! Purpose
//! - Three routes to the hull boundary: the monotone-chain primitive
//!   (`chains`, also the backbone of the farthest-pair caliper walk), the
//!   Graham scan (`graham`) and the Jarvis march (`jarvis`).
//!
//! Conventions
//! - All three use sign tests on the same cross-product orientation
//!   predicate, but each keeps its own historical tie-break rules: Graham
//!   pivots on min-Y (epsilon tie-break on min-X), Jarvis starts at min-X
//!   (tie-break max-Y), and the two are intentionally not unified.
//! - Conformance is vertex-set equality; traversal order differs per
//!   algorithm (Graham is CCW from its pivot, Jarvis follows its wrap).

mod chain;
mod graham;
mod jarvis;

pub use chain::{chains, HullChains};
pub use graham::graham;
pub use jarvis::jarvis;
