use frusta3d::math::Real;
use frusta3d::pipeline::{Pipeline, PipelineParameters};
use frusta3d::sampling::{SampleConfig, SamplingMode};
use frusta3d::scene::{Controls, Material, Scene, SceneParameters};
use frusta3d::shape::Frustum;
use frusta3d::PipelineError;
use rand::SeedableRng;
use rand_isaac::IsaacRng;

fn scene_params() -> SceneParameters {
    SceneParameters {
        precision_steps: 40,
        texture_path: std::env::temp_dir().join("frusta3d_integration_no_texture.png"),
        ..SceneParameters::default()
    }
}

#[test]
fn a_single_point_gives_an_empty_mesh() {
    let pipeline = Pipeline::new(PipelineParameters::default());

    for seed in 0..10 {
        let mesh = pipeline
            .run(
                &SampleConfig::new(1, SamplingMode::Random, 500),
                &mut IsaacRng::seed_from_u64(seed),
            )
            .unwrap();

        assert!(mesh.is_empty());
        assert!(mesh.uvs().is_empty());
    }
}

#[test]
fn a_single_precise_step_gives_an_empty_mesh() {
    let pipeline = Pipeline::new(PipelineParameters::default());
    let mesh = pipeline
        .run(
            &SampleConfig::new(1, SamplingMode::Precise, 1),
            &mut IsaacRng::seed_from_u64(0),
        )
        .unwrap();

    assert!(mesh.is_empty());
}

#[test]
fn zero_counts_are_rejected() {
    let pipeline = Pipeline::new(PipelineParameters::default());
    let mut rng = IsaacRng::seed_from_u64(0);

    for config in [
        SampleConfig::new(0, SamplingMode::Random, 500),
        SampleConfig::new(5000, SamplingMode::Precise, 0),
    ] {
        assert!(matches!(
            pipeline.run(&config, &mut rng),
            Err(PipelineError::InvalidConfig(_))
        ));
    }
}

#[test]
fn invalid_frustums_are_rejected() {
    let invalid: [(Real, Real, Real); 4] = [
        (8.0, 8.0, 20.0),
        (8.0, 7.0, 0.0),
        (-8.0, 7.0, 20.0),
        (8.0, 7.0, Real::NAN),
    ];

    for (r1, r2, h) in invalid {
        assert!(Frustum::try_new(r1, r2, h).is_err());

        let params = PipelineParameters {
            frustum: Frustum { r1, r2, height: h },
            ..PipelineParameters::default()
        };
        let result = Pipeline::new(params).run(
            &SampleConfig::new(5000, SamplingMode::Random, 500),
            &mut IsaacRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(PipelineError::InvalidConfig(_))));
    }
}

#[test]
fn scene_keeps_its_mesh_on_invalid_config() {
    let mut scene = Scene::new(scene_params());
    let mut rng = IsaacRng::seed_from_u64(5);
    assert_eq!(*scene.material(), Material::Untextured);

    scene
        .regenerate_with_rng(&Controls::new(3000, SamplingMode::Random), &mut rng)
        .unwrap();
    let installed = scene.current_mesh().cloned().unwrap();

    let err = scene
        .regenerate_with_rng(&Controls::new(0, SamplingMode::Random), &mut rng)
        .unwrap_err();
    assert!(matches!(err, PipelineError::InvalidConfig(_)));
    assert_eq!(scene.current_mesh(), Some(&installed));

    // Switching to the grid ignores the point count, which is still validated.
    assert!(scene
        .regenerate_with_rng(&Controls::new(0, SamplingMode::Precise), &mut rng)
        .is_err());
    assert_eq!(scene.current_mesh(), Some(&installed));

    scene
        .regenerate_with_rng(&Controls::new(100, SamplingMode::Precise), &mut rng)
        .unwrap();
    assert!(scene.is_renderable());
    assert_ne!(scene.current_mesh(), Some(&installed));
}

#[test]
fn scene_reports_nothing_to_render_after_degenerate_input() {
    let mut scene = Scene::new(scene_params());
    let mut rng = IsaacRng::seed_from_u64(6);

    scene.regenerate_with_rng(&Controls::default(), &mut rng).unwrap();
    assert!(scene.is_renderable());

    scene
        .regenerate_with_rng(&Controls::new(1, SamplingMode::Random), &mut rng)
        .unwrap();
    assert!(!scene.is_renderable());
    assert_eq!(scene.elevation(), 12.0);
}
