use crate::math::{Point, Real};
use crate::shape::Frustum;
use na::RealField;

/// Lays a regular `steps × steps` grid of points on the lateral surface of `frustum`.
///
/// The longitude parameter `u` walks `[-1, 1)` and the height parameter `v` walks
/// `[0, 1)`, both with `steps` regular steps. Each grid node maps to
/// `(radius(v)·sin(πu), (height/2)·(2v − 1), radius(v)·cos(πu))` where
/// `radius(v) = (1 − v)·r1 + v·r2`.
///
/// Exactly `steps²` points are returned, longitude-major.
pub fn precise_points(frustum: &Frustum, steps: usize) -> Vec<Point<Real>> {
    let mut points = Vec::with_capacity(steps * steps);
    let inv_steps = 1.0 / steps as Real;
    let half_height = frustum.half_height();

    for i in 0..steps {
        let u = -1.0 + 2.0 * i as Real * inv_steps;
        let (sin, cos) = (Real::pi() * u).sin_cos();

        for j in 0..steps {
            let v = j as Real * inv_steps;
            let radius = frustum.radius_at(v);
            let y = half_height * (2.0 * v - 1.0);
            points.push(Point::new(radius * sin, y, radius * cos));
        }
    }

    points
}
