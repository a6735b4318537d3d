use frusta3d::math::Real;
use frusta3d::region::{filter_points, RegionFilter};
use frusta3d::sampling::{self, SampleConfig, SamplingMode};
use frusta3d::shape::Frustum;
use rand::SeedableRng;
use rand_isaac::IsaacRng;

#[test]
fn random_points_satisfy_both_inequalities_after_filtering() {
    let frustum = Frustum::reference();
    let config = SampleConfig::new(5000, SamplingMode::Random, 500);
    let points = sampling::generate(&config, &frustum, &mut IsaacRng::seed_from_u64(42)).unwrap();
    assert_eq!(points.len(), 5000);

    let retained = filter_points(&points, &frustum);
    assert!(retained.len() <= 5000);
    assert!(!retained.is_empty());

    let m = frustum.slope();
    let d = frustum.apex_height();
    let half_height = frustum.height / 2.0;

    for pt in &retained {
        assert!(pt.y >= -half_height && pt.y <= half_height);
        assert!(pt.x * pt.x - m * (pt.y - d) * (pt.y - d) + pt.z * pt.z <= 0.0);
    }
}

#[test]
fn default_filter_never_keeps_points_outside_the_cone() {
    let frustum = Frustum::reference();
    let config = SampleConfig::new(5000, SamplingMode::Random, 500);

    for seed in 0..100 {
        let mut rng = IsaacRng::seed_from_u64(seed);
        let points = sampling::generate(&config, &frustum, &mut rng).unwrap();
        let outside = filter_points(&points, &frustum)
            .iter()
            .filter(|pt| frustum.lateral_implicit(pt) > 0.0)
            .count();

        assert_eq!(outside, 0, "seed {}", seed);
    }
}

#[test]
fn filtered_count_shrinks_with_the_region() {
    let points = sampling::generate(
        &SampleConfig::new(5000, SamplingMode::Random, 500),
        &Frustum::reference(),
        &mut IsaacRng::seed_from_u64(7),
    )
    .unwrap();

    // Same taper, shorter frustum: a subset of the reference region.
    let mut previous = usize::MAX;

    for height in [20.0, 15.0, 10.0, 5.0, 1.0 as Real] {
        let shrink = height / 20.0;
        let frustum = Frustum::try_new(
            7.5 + 0.5 * shrink,
            7.5 - 0.5 * shrink,
            height,
        )
        .unwrap();
        let count = RegionFilter::with_tolerance(frustum, 0.0)
            .filter(&points)
            .len();

        assert!(count <= previous);
        previous = count;
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = SampleConfig::new(1000, SamplingMode::Random, 500);
    let frustum = Frustum::reference();
    let a = sampling::generate(&config, &frustum, &mut IsaacRng::seed_from_u64(3)).unwrap();
    let b = sampling::generate(&config, &frustum, &mut IsaacRng::seed_from_u64(3)).unwrap();

    assert_eq!(a, b);
}
