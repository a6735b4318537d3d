use crate::math::{Point, Real, TexCoord};
use crate::transformation::{FaceUvs, HullMesh};

/// A hull mesh together with per-corner texture coordinates.
///
/// `uvs()[i]` holds the coordinates of the three corners of the triangle
/// `hull().indices()[i]`. An empty mesh has no coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TexturedMesh {
    hull: HullMesh,
    uvs: Vec<FaceUvs>,
    texture_scale: Real,
}

impl TexturedMesh {
    /// Assembles a textured mesh from a hull and its projected coordinates.
    ///
    /// `uvs` must have one entry per triangle of `hull`, which is what
    /// [`CylindricalProjection::project`](crate::transformation::CylindricalProjection::project)
    /// produces.
    pub(crate) fn new(hull: HullMesh, uvs: Vec<FaceUvs>, texture_scale: Real) -> Self {
        debug_assert_eq!(
            hull.indices().len(),
            uvs.len(),
            "Texture coordinates must be given for every triangle."
        );

        TexturedMesh {
            hull,
            uvs,
            texture_scale,
        }
    }

    /// The mesh with no triangle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Is there nothing to render?
    pub fn is_empty(&self) -> bool {
        self.hull.is_empty()
    }

    /// The underlying hull.
    pub fn hull(&self) -> &HullMesh {
        &self.hull
    }

    /// The texture coordinates of each triangle corner.
    pub fn uvs(&self) -> &[FaceUvs] {
        &self.uvs
    }

    /// The number of texture repetitions around the `y` axis.
    pub fn texture_scale(&self) -> Real {
        self.texture_scale
    }

    /// Flattens this mesh into non-indexed position and texture coordinate buffers.
    ///
    /// Both buffers have three entries per triangle, so that a vertex shared by
    /// several triangles can carry a different texture coordinate on each of them.
    pub fn unindexed_buffers(&self) -> (Vec<Point<Real>>, Vec<TexCoord<Real>>) {
        let positions = self.hull.triangles().flatten().collect();
        let uvs = self.uvs.iter().flatten().copied().collect();
        (positions, uvs)
    }
}
