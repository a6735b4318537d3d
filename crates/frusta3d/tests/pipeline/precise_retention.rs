use frusta3d::region::{filter_points, RegionFilter, SURFACE_TOLERANCE};
use frusta3d::sampling::{self, SampleConfig, SamplingMode};
use frusta3d::shape::Frustum;
use rand::SeedableRng;
use rand_isaac::IsaacRng;

#[test]
fn precise_points_are_retained_up_to_rounding() {
    let frustums = [
        Frustum::reference(),
        Frustum::try_new(7.0, 8.0, 20.0).unwrap(),
        Frustum::try_new(1.0, 3.0, 0.5).unwrap(),
        Frustum::try_new(100.0, 0.1, 250.0).unwrap(),
    ];
    let mut rng = IsaacRng::seed_from_u64(0);

    for frustum in frustums {
        let surface = RegionFilter::with_tolerance(frustum, SURFACE_TOLERANCE);
        let shell = SURFACE_TOLERANCE * frustum.max_radius() * frustum.max_radius();

        for steps in [1, 2, 10, 97] {
            let config = SampleConfig::new(1, SamplingMode::Precise, steps);
            let points = sampling::generate(&config, &frustum, &mut rng).unwrap();
            assert_eq!(points.len(), steps * steps);

            // Every grid point is on the surface, within floating-point tolerance.
            assert_eq!(
                surface.filter(&points),
                points,
                "{:?} with {} steps",
                frustum,
                steps
            );

            // The exact filter only drops points rounded just outside the surface.
            let exact = RegionFilter::new(frustum);
            for pt in points.iter().filter(|pt| !exact.contains_point(pt)) {
                assert!(frustum.contains_height(pt.y));
                assert!(frustum.lateral_implicit(pt).abs() <= shell);
            }
            assert!(filter_points(&points, &frustum).len() <= points.len());
        }
    }
}

#[test]
fn reference_precision_yields_the_full_grid() {
    let frustum = Frustum::reference();
    let config = SampleConfig::new(1, SamplingMode::Precise, 500);
    let points = sampling::generate(&config, &frustum, &mut IsaacRng::seed_from_u64(0)).unwrap();
    let surface = RegionFilter::with_tolerance(frustum, SURFACE_TOLERANCE);

    assert_eq!(points.len(), 250_000);
    assert_eq!(surface.filter(&points).len(), 250_000);
}
