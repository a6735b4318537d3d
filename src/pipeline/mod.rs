//! The full point-cloud to textured-mesh pipeline.

pub use self::pipeline::{Pipeline, PipelineParameters, DEFAULT_TEXTURE_SCALE};
pub use self::textured_mesh::TexturedMesh;

mod pipeline;
mod textured_mesh;
