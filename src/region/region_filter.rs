use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::Frustum;

/// A relative tolerance on the lateral inequality large enough to keep points
/// generated on the lateral surface itself despite rounding errors.
///
/// Pass it to [`RegionFilter::with_tolerance`]; the default filter is exact.
pub const SURFACE_TOLERANCE: Real = DEFAULT_EPSILON * 1000.0;

/// Keeps the points lying inside a frustum.
///
/// A point `(x, y, z)` is kept if both:
/// 1. `-height/2 ≤ y ≤ height/2`,
/// 2. `x² − m·(y − d)² + z² ≤ tolerance · max(r1, r2)²`, where `m` and `d` are the
///    [slope](Frustum::slope) and [apex height](Frustum::apex_height) of the frustum.
///
/// The tolerance is zero unless set with [`RegionFilter::with_tolerance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegionFilter {
    frustum: Frustum,
    lateral_bound: Real,
}

impl RegionFilter {
    /// A filter for `frustum` applying the exact inequalities.
    pub fn new(frustum: Frustum) -> Self {
        RegionFilter {
            frustum,
            lateral_bound: 0.0,
        }
    }

    /// A filter for `frustum` with a relative tolerance on the lateral
    /// inequality. Negative tolerances shrink the accepted region.
    pub fn with_tolerance(frustum: Frustum, tolerance: Real) -> Self {
        let max_radius = frustum.max_radius();

        RegionFilter {
            frustum,
            lateral_bound: tolerance * max_radius * max_radius,
        }
    }

    /// The frustum this filter selects points from.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Tests if a single point passes both the height and the lateral checks.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.frustum.contains_height(pt.y)
            && self.frustum.lateral_implicit(pt) <= self.lateral_bound
    }

    /// Returns the points of `points` passing [`RegionFilter::contains_point`], in
    /// their original order.
    pub fn filter(&self, points: &[Point<Real>]) -> Vec<Point<Real>> {
        let result: Vec<_> = points
            .iter()
            .filter(|pt| self.contains_point(pt))
            .copied()
            .collect();

        log::debug!(
            "Region filter kept {} of {} points.",
            result.len(),
            points.len()
        );

        result
    }
}

/// Returns the points of `points` lying inside `frustum`, in their original order.
///
/// This is [`RegionFilter::filter`] without any tolerance.
pub fn filter_points(points: &[Point<Real>], frustum: &Frustum) -> Vec<Point<Real>> {
    RegionFilter::new(*frustum).filter(points)
}
