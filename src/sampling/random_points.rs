use crate::math::{Point, Real};
use crate::shape::Frustum;
use na::RealField;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// The axis-aligned box random candidate points are drawn from.
///
/// With `v = 1/2 − atan(height / r1) / π`, the box spans `[-M, M]` along `x` and `z`
/// where `M = (1 − v)·r1 + v·r2`, and `[-Y, Y]` along `y` where
/// `Y = −(height / 2)·(2v − 1)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SamplingBox {
    /// The half-extent `M` of the box along the `x` and `z` axes.
    pub half_extent_xz: Real,
    /// The half-extent `Y` of the box along the `y` axis.
    pub half_extent_y: Real,
}

impl SamplingBox {
    /// Computes the sampling box of a frustum.
    pub fn new(frustum: &Frustum) -> Self {
        let v = 0.5 - (frustum.height / frustum.r1).atan() / Real::pi();

        SamplingBox {
            half_extent_xz: frustum.radius_at(v),
            half_extent_y: -frustum.half_height() * (2.0 * v - 1.0),
        }
    }

    /// Tests if `pt` lies inside this box (boundary included).
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        pt.x.abs() <= self.half_extent_xz
            && pt.z.abs() <= self.half_extent_xz
            && pt.y.abs() <= self.half_extent_y
    }
}

/// Draws `count` points independently and uniformly from the [`SamplingBox`] of `frustum`.
///
/// Coordinates are drawn in the order `x`, `y`, `z`. The frustum must be valid.
pub fn random_points<R: Rng + ?Sized>(
    frustum: &Frustum,
    count: usize,
    rng: &mut R,
) -> Vec<Point<Real>> {
    let bounds = SamplingBox::new(frustum);
    let xz = Uniform::new(-bounds.half_extent_xz, bounds.half_extent_xz);
    let y = Uniform::new(-bounds.half_extent_y, bounds.half_extent_y);

    (0..count)
        .map(|_| {
            let px = xz.sample(rng);
            let py = y.sample(rng);
            let pz = xz.sample(rng);
            Point::new(px, py, pz)
        })
        .collect()
}
