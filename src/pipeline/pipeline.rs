use super::TexturedMesh;
use crate::math::Real;
use crate::region::RegionFilter;
use crate::sampling::{self, SampleConfig};
use crate::shape::Frustum;
use crate::transformation::{ConvexHullBuilder, CylindricalProjection, HullBuilder};
use crate::PipelineError;
use rand::Rng;

/// Number of texture repetitions around the frustum in the reference scene.
pub const DEFAULT_TEXTURE_SCALE: Real = 2.0;

/// Parameters that stay constant across regenerations.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PipelineParameters {
    /// The shape being sampled.
    pub frustum: Frustum,
    /// Number of texture repetitions around the `y` axis.
    pub texture_scale: Real,
}

impl Default for PipelineParameters {
    fn default() -> Self {
        Self {
            frustum: Frustum::reference(),
            texture_scale: DEFAULT_TEXTURE_SCALE,
        }
    }
}

/// Sampler, region filter, hull builder and UV projector, run in sequence.
///
/// Each [`Pipeline::run`] builds a brand new [`TexturedMesh`]; nothing is kept
/// from one run to the next.
#[derive(Clone, Debug)]
pub struct Pipeline<H = ConvexHullBuilder> {
    params: PipelineParameters,
    hull_builder: H,
}

impl Pipeline {
    /// A pipeline using parry's convex hull.
    pub fn new(params: PipelineParameters) -> Self {
        Self::with_hull_builder(params, ConvexHullBuilder)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineParameters::default())
    }
}

impl<H: HullBuilder> Pipeline<H> {
    /// A pipeline delegating hull construction to `hull_builder`.
    pub fn with_hull_builder(params: PipelineParameters, hull_builder: H) -> Self {
        Pipeline {
            params,
            hull_builder,
        }
    }

    /// The parameters of this pipeline.
    pub fn parameters(&self) -> &PipelineParameters {
        &self.params
    }

    /// Runs every stage of the pipeline on the calling thread.
    ///
    /// Configuration errors are reported before any point is generated. Degenerate
    /// geometry is not an error: it yields an empty mesh with no texture coordinates.
    pub fn run<R: Rng + ?Sized>(
        &self,
        config: &SampleConfig,
        rng: &mut R,
    ) -> Result<TexturedMesh, PipelineError> {
        let projection =
            CylindricalProjection::new(&self.params.frustum, self.params.texture_scale)?;
        let points = sampling::generate(config, &self.params.frustum, rng)?;
        let filtered = RegionFilter::new(self.params.frustum).filter(&points);
        let hull = self.hull_builder.build_hull(&filtered);

        let uvs = if hull.is_empty() {
            Vec::new()
        } else {
            projection.project(&hull)
        };

        Ok(TexturedMesh::new(hull, uvs, self.params.texture_scale))
    }
}
