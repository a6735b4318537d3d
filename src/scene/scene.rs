use super::{Controls, Material, DEFAULT_TEXTURE_PATH};
use crate::math::Real;
use crate::pipeline::{Pipeline, PipelineParameters, TexturedMesh};
use crate::sampling::DEFAULT_PRECISION_STEPS;
use crate::transformation::{ConvexHullBuilder, HullBuilder};
use crate::PipelineError;
use rand::Rng;
use std::path::PathBuf;

/// Height of the hull above the ground plane in the reference scene.
pub const DEFAULT_ELEVATION: Real = 12.0;

/// Parameters of a [`Scene`], fixed for its whole lifetime.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParameters {
    /// Frustum and texture scale.
    pub pipeline: PipelineParameters,
    /// Number of grid steps per axis in precise mode.
    pub precision_steps: usize,
    /// Vertical offset of the hull above the ground plane.
    pub elevation: Real,
    /// The texture wrapped around the hull.
    pub texture_path: PathBuf,
}

impl Default for SceneParameters {
    fn default() -> Self {
        Self {
            pipeline: PipelineParameters::default(),
            precision_steps: DEFAULT_PRECISION_STEPS,
            elevation: DEFAULT_ELEVATION,
            texture_path: PathBuf::from(DEFAULT_TEXTURE_PATH),
        }
    }
}

/// The renderable state: at most one current mesh, plus its material.
///
/// The mesh is rebuilt from scratch by [`Scene::regenerate`] and replaced
/// wholesale. A failed regeneration leaves the previous mesh in place.
#[derive(Debug)]
pub struct Scene<H = ConvexHullBuilder> {
    pipeline: Pipeline<H>,
    precision_steps: usize,
    elevation: Real,
    material: Material,
    controls: Controls,
    current_mesh: Option<TexturedMesh>,
}

impl Scene {
    /// Creates a scene backed by parry's convex hull, without any mesh yet.
    pub fn new(params: SceneParameters) -> Self {
        Self::with_hull_builder(params, ConvexHullBuilder)
    }

    /// Creates a scene and generates its first mesh from the default controls.
    pub fn startup(params: SceneParameters) -> Result<Self, PipelineError> {
        let mut scene = Self::new(params);
        scene.regenerate(&Controls::default())?;
        Ok(scene)
    }
}

impl<H: HullBuilder> Scene<H> {
    /// Creates a scene delegating hull construction to `hull_builder`.
    ///
    /// The texture is loaded immediately; see [`Material::from_texture_path`].
    pub fn with_hull_builder(params: SceneParameters, hull_builder: H) -> Self {
        Scene {
            pipeline: Pipeline::with_hull_builder(params.pipeline, hull_builder),
            precision_steps: params.precision_steps,
            elevation: params.elevation,
            material: Material::from_texture_path(&params.texture_path),
            controls: Controls::default(),
            current_mesh: None,
        }
    }

    /// Rebuilds the mesh for `controls`, sampling with the thread-local RNG.
    pub fn regenerate(&mut self, controls: &Controls) -> Result<(), PipelineError> {
        self.regenerate_with_rng(controls, &mut rand::thread_rng())
    }

    /// Rebuilds the mesh for `controls`.
    ///
    /// The new mesh is fully built before the current one is touched. On error,
    /// neither the mesh nor the recorded controls change.
    pub fn regenerate_with_rng<R: Rng + ?Sized>(
        &mut self,
        controls: &Controls,
        rng: &mut R,
    ) -> Result<(), PipelineError> {
        let config = controls.sample_config(self.precision_steps);
        let mesh = self.pipeline.run(&config, rng)?;

        self.controls = *controls;
        self.swap_mesh(mesh);
        Ok(())
    }

    /// Releases the current mesh, then installs `mesh`.
    ///
    /// An empty mesh leaves the scene with nothing to render.
    pub fn swap_mesh(&mut self, mesh: TexturedMesh) {
        let previous = self.current_mesh.take();
        drop(previous);

        if mesh.is_empty() {
            log::debug!("Scene cleared: the new mesh is empty.");
        } else {
            log::debug!(
                "Scene mesh replaced: {} triangles.",
                mesh.hull().indices().len()
            );
            self.current_mesh = Some(mesh);
        }
    }

    /// The mesh to render, if any.
    pub fn current_mesh(&self) -> Option<&TexturedMesh> {
        self.current_mesh.as_ref()
    }

    /// Is there a mesh to render?
    pub fn is_renderable(&self) -> bool {
        self.current_mesh.is_some()
    }

    /// The material of the hull.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Replaces the material of the hull.
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// The vertical offset of the hull above the ground plane.
    pub fn elevation(&self) -> Real {
        self.elevation
    }

    /// The controls used by the last successful regeneration.
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// The pipeline producing the meshes.
    pub fn pipeline(&self) -> &Pipeline<H> {
        &self.pipeline
    }
}
