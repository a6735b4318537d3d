use super::HullMesh;
use crate::math::{Point, Real, DEFAULT_EPSILON};

/// Relative volume, w.r.t. the cube of the mesh extent, under which a hull is
/// considered flat.
const FLAT_HULL_TOLERANCE: Real = DEFAULT_EPSILON * 1000.0;

/// Builds a closed convex triangle mesh around a point cloud.
///
/// Implementations never fail: degenerate input (fewer than four points, coplanar or
/// collinear clouds, …) yields [`HullMesh::empty`].
pub trait HullBuilder {
    /// Computes the convex hull of `points`.
    fn build_hull(&self, points: &[Point<Real>]) -> HullMesh;
}

/// The [`HullBuilder`] based on parry's incremental 3D convex hull.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvexHullBuilder;

impl ConvexHullBuilder {
    /// Creates a new hull builder.
    pub fn new() -> Self {
        ConvexHullBuilder
    }
}

impl HullBuilder for ConvexHullBuilder {
    fn build_hull(&self, points: &[Point<Real>]) -> HullMesh {
        if points.len() < 4 {
            log::debug!(
                "Skipping convex hull of {} points: at least 4 are needed.",
                points.len()
            );
            return HullMesh::empty();
        }

        let (vertices, indices) = match parry::transformation::try_convex_hull(points) {
            Ok(hull) => hull,
            Err(err) => {
                log::warn!("Convex hull of {} points failed: {}", points.len(), err);
                return HullMesh::empty();
            }
        };

        let mesh = HullMesh::new(vertices, indices);
        let extent = mesh.extent();
        let volume = mesh.volume();

        // Flat or lower-dimensional clouds come back as two-sided polygons.
        if mesh.indices().len() < 4
            || abs_diff_eq!(
                volume,
                0.0,
                epsilon = FLAT_HULL_TOLERANCE * extent * extent * extent
            )
        {
            log::warn!(
                "Convex hull of {} points has no volume; nothing will be rendered.",
                points.len()
            );
            return HullMesh::empty();
        }

        log::debug!(
            "Convex hull: {} vertices, {} triangles, volume {}.",
            mesh.vertices().len(),
            mesh.indices().len(),
            volume
        );

        mesh
    }
}
