//! Cylindrical texture coordinates around the `y` axis.
//!
//! The `u` coordinate follows the angle of a point around the `y` axis, the `v`
//! coordinate its height. Coordinates are computed independently for each corner of
//! each triangle, so a vertex shared by several triangles gets one coordinate per
//! triangle.
//!
//! No seam stitching is performed: a triangle crossing the half-plane `z = 0, x < 0`,
//! where the angle wraps from `π` back to `−π`, gets `u` values close to `0` on some
//! corners and close to `texture_scale` on the others, so the whole texture is squeezed
//! into that triangle. [`CylindricalProjection::crosses_seam`] detects such triangles.

use super::HullMesh;
use crate::math::{Point, Real, TexCoord};
use crate::shape::Frustum;
use crate::PipelineError;
use na::RealField;

/// The texture coordinates of the three corners of a triangle.
pub type FaceUvs = [TexCoord<Real>; 3];

/// Maps the angle of `(x, z)` around the `y` axis to `[0, texture_scale)`.
///
/// Computes `((atan2(z, x) + π) / 2π) · texture_scale`, so the texture repeats
/// `texture_scale` times around the axis. The angle is taken in `[−π, π)`.
#[inline]
pub fn cylindrical_u(x: Real, z: Real, texture_scale: Real) -> Real {
    let phi = z.atan2(x);
    let u = (phi + Real::pi()) / Real::two_pi() * texture_scale;

    // atan2 reaches +π (and rounding can reach it too), which is the same angle as −π.
    if u >= texture_scale {
        u - texture_scale
    } else {
        u
    }
}

/// Maps a height `y` to `(y + height/2) / height`, i.e., `0` on the bottom plane
/// of the frustum and `1` on its top plane.
#[inline]
pub fn cylindrical_v(y: Real, height: Real) -> Real {
    (y + height / 2.0) / height
}

/// A cylindrical projection, wrapping a texture around a frustum.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CylindricalProjection {
    height: Real,
    texture_scale: Real,
}

impl CylindricalProjection {
    /// Creates a projection for the given frustum.
    ///
    /// `texture_scale` is the number of times the texture repeats around the
    /// `y` axis. It must be finite and strictly positive.
    pub fn new(frustum: &Frustum, texture_scale: Real) -> Result<Self, PipelineError> {
        if !texture_scale.is_finite() || texture_scale <= 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "the texture scale must be finite and strictly positive, got {}",
                texture_scale
            )));
        }

        frustum.validate()?;

        Ok(CylindricalProjection {
            height: frustum.height,
            texture_scale,
        })
    }

    /// The number of texture repetitions around the `y` axis.
    pub fn texture_scale(&self) -> Real {
        self.texture_scale
    }

    /// The texture coordinates of a single point.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> TexCoord<Real> {
        TexCoord::new(
            cylindrical_u(pt.x, pt.z, self.texture_scale),
            cylindrical_v(pt.y, self.height),
        )
    }

    /// The texture coordinates of every corner of every triangle of `mesh`.
    ///
    /// The result is aligned with `mesh.indices()`: its `i`-th element holds the
    /// coordinates of the corners of the `i`-th triangle, in the same order.
    pub fn project(&self, mesh: &HullMesh) -> Vec<FaceUvs> {
        let uvs: Vec<FaceUvs> = mesh
            .triangles()
            .map(|tri| tri.map(|pt| self.project_point(&pt)))
            .collect();

        log::debug!(
            "Projected {} faces, {} of them crossing the texture seam.",
            uvs.len(),
            uvs.iter().filter(|face| self.crosses_seam(face)).count()
        );

        uvs
    }

    /// Does this triangle straddle the angular seam?
    ///
    /// Detected as a spread of the `u` coordinates larger than half a repetition.
    pub fn crosses_seam(&self, face: &FaceUvs) -> bool {
        let (min, max) = face.iter().fold((Real::MAX, Real::MIN), |(min, max), uv| {
            (min.min(uv.x), max.max(uv.x))
        });

        max - min > self.texture_scale / 2.0
    }
}

/// The texture coordinates of every corner of every triangle of `mesh`, wrapped
/// `texture_scale` times around `frustum`.
///
/// See [`CylindricalProjection::project`]. An empty mesh yields no coordinates.
pub fn project_uvs(
    mesh: &HullMesh,
    frustum: &Frustum,
    texture_scale: Real,
) -> Result<Vec<FaceUvs>, PipelineError> {
    Ok(CylindricalProjection::new(frustum, texture_scale)?.project(mesh))
}
