//! Transformation of filtered point clouds into textured triangle meshes.

pub use self::hull::{ConvexHullBuilder, HullBuilder};
pub use self::hull_mesh::{HullMesh, MeshTopologyError};
pub use self::uv_projection::{
    cylindrical_u, cylindrical_v, project_uvs, CylindricalProjection, FaceUvs,
};

mod hull;
mod hull_mesh;
mod uv_projection;

#[cfg(feature = "wavefront")]
mod wavefront;
