//! Andrew's monotone-chain hull primitive.
//!
//! One X-sorted pass builds the lower and upper boundary stacks
//! independently. The caliper walk in `dist::farthest` consumes the two
//! chains directly; hull consumers merge them via [`HullChains::vertices`].

use crate::types::{orient, Point};

/// Lower and upper hull chains, both ascending in X.
///
/// The chains share their two endpoints (leftmost and rightmost point of
/// the set); every hull vertex appears in at least one chain. All-collinear
/// input collapses both chains to the two extremes; a single point yields
/// two one-point chains. Minimum-count rules are the callers' business.
#[derive(Clone, Debug, PartialEq)]
pub struct HullChains {
    pub lower: Vec<Point>,
    pub upper: Vec<Point>,
}

impl HullChains {
    /// Merge the chains into one boundary cycle, counting the shared
    /// endpoints once: the lower chain followed by the upper chain
    /// reversed, with the duplicated extremes dropped.
    pub fn vertices(&self) -> Vec<Point> {
        let mut hull = self.lower.clone();
        // Interior of the reversed upper chain; endpoints are already in.
        if self.upper.len() > 2 {
            hull.extend(self.upper[1..self.upper.len() - 1].iter().rev());
        }
        hull
    }
}

/// Build the lower/upper hull chains of `points`.
///
/// Sorts a private copy ascending by X (ties by Y) and grows both stacks in
/// a single scan: the upper stack discards its middle point while the turn
/// onto the candidate is left-or-straight, the lower stack on
/// right-or-straight. Plain floating-point predicate throughout.
pub fn chains(points: &[Point]) -> HullChains {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while upper.len() >= 2 && orient(upper[upper.len() - 2], upper[upper.len() - 1], p) >= 0.0 {
            upper.pop();
        }
        while lower.len() >= 2 && orient(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        upper.push(p);
        lower.push(p);
    }

    HullChains { lower, upper }
}
