use frusta3d::math::Real;
use frusta3d::pipeline::{Pipeline, PipelineParameters};
use frusta3d::region::filter_points;
use frusta3d::sampling::{SampleConfig, SamplingMode};
use frusta3d::shape::Frustum;
use frusta3d::transformation::{ConvexHullBuilder, CylindricalProjection, HullBuilder};
use rand::SeedableRng;
use rand_isaac::IsaacRng;

fn check_textured_hull(mode: SamplingMode, seed: u64) {
    let params = PipelineParameters::default();
    let pipeline = Pipeline::new(params);
    let config = SampleConfig::new(5000, mode, 60);
    let mesh = pipeline
        .run(&config, &mut IsaacRng::seed_from_u64(seed))
        .unwrap();
    let hull = mesh.hull();

    assert!(!mesh.is_empty());
    assert_eq!(hull.check_closed(), Ok(()));
    assert!(hull.is_convex(1.0e-3));
    assert!(hull.volume() > 0.0);
    assert_eq!(mesh.uvs().len(), hull.indices().len());
    assert_eq!(mesh.texture_scale(), params.texture_scale);

    let half_height = params.frustum.height / 2.0;

    for pt in hull.vertices() {
        assert!(pt.y >= -half_height && pt.y <= half_height);
        assert!(params.frustum.lateral_implicit(pt) <= 0.0, "{} is outside", pt);
    }

    for uv in mesh.uvs().iter().flatten() {
        assert!(uv.x >= 0.0 && uv.x < params.texture_scale, "u = {}", uv.x);
        assert!(uv.y >= 0.0 && uv.y <= 1.0, "v = {}", uv.y);
    }

    let (positions, coords) = mesh.unindexed_buffers();
    assert_eq!(positions.len(), hull.indices().len() * 3);
    assert_eq!(coords.len(), positions.len());
}

#[test]
fn random_reference_scene() {
    check_textured_hull(SamplingMode::Random, 0);
    check_textured_hull(SamplingMode::Random, 1234);
}

#[test]
fn random_hull_vertices_stay_inside_the_frustum() {
    for seed in 0..40 {
        check_textured_hull(SamplingMode::Random, seed);
    }
}

#[test]
fn precise_reference_scene() {
    check_textured_hull(SamplingMode::Precise, 0);
}

#[test]
fn precise_hull_volume_approaches_the_frustum_volume() {
    let frustum = Frustum::reference();
    let pipeline = Pipeline::new(PipelineParameters::default());
    let mesh = pipeline
        .run(
            &SampleConfig::new(1, SamplingMode::Precise, 100),
            &mut IsaacRng::seed_from_u64(0),
        )
        .unwrap();

    // π·h·(r1² + r1·r2 + r2²) / 3
    let exact = Real::acos(-1.0) * frustum.height
        * (frustum.r1 * frustum.r1 + frustum.r1 * frustum.r2 + frustum.r2 * frustum.r2)
        / 3.0;

    // The grid stops one step short of the top plane.
    assert!(mesh.hull().volume() < exact);
    assert_relative_eq!(mesh.hull().volume(), exact, max_relative = 0.02);
}

#[test]
fn seam_faces_exist_in_a_full_hull() {
    let params = PipelineParameters::default();
    let mesh = Pipeline::new(params)
        .run(
            &SampleConfig::new(5000, SamplingMode::Random, 500),
            &mut IsaacRng::seed_from_u64(9),
        )
        .unwrap();
    let projection = CylindricalProjection::new(&params.frustum, params.texture_scale).unwrap();

    assert!(mesh.uvs().iter().any(|face| projection.crosses_seam(face)));
}

#[test]
fn pipeline_matches_its_stages() {
    let params = PipelineParameters::default();
    let config = SampleConfig::new(1, SamplingMode::Precise, 30);
    let mesh = Pipeline::new(params)
        .run(&config, &mut IsaacRng::seed_from_u64(0))
        .unwrap();

    let points = frusta3d::sampling::precise_points(&params.frustum, 30);
    let hull = ConvexHullBuilder.build_hull(&filter_points(&points, &params.frustum));

    assert_eq!(*mesh.hull(), hull);
}
