//! Truncated-cone shape with its principal axis aligned with the `y` axis.

use crate::math::{Point, Real};
use crate::PipelineError;

/// A cone truncated by the planes `y = -height / 2` and `y = height / 2`.
///
/// The lateral surface is the part of the double cone
/// `x² + z² = m·(y − d)²` lying between the two planes, where `m` is
/// [`Frustum::slope`] and `d` is [`Frustum::apex_height`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Frustum {
    /// The radius of the cross-section at `y = -height / 2`.
    pub r1: Real,
    /// The radius of the cross-section at `y = height / 2`.
    pub r2: Real,
    /// The distance between the two planes.
    pub height: Real,
}

impl Default for Frustum {
    fn default() -> Self {
        Self::reference()
    }
}

impl Frustum {
    /// Creates a new frustum, checking its invariants.
    ///
    /// # Arguments:
    /// * `r1` - the radius at the bottom plane, strictly positive.
    /// * `r2` - the radius at the top plane, strictly positive and different from `r1`.
    /// * `height` - the distance between the two planes, strictly positive.
    pub fn try_new(r1: Real, r2: Real, height: Real) -> Result<Self, PipelineError> {
        let result = Frustum { r1, r2, height };
        result.validate()?;
        Ok(result)
    }

    /// The frustum of the reference scene: `r1 = 8`, `r2 = 7`, `height = 20`.
    pub fn reference() -> Self {
        Frustum {
            r1: 8.0,
            r2: 7.0,
            height: 20.0,
        }
    }

    /// Checks that `r1 ≠ r2`, that both radii and the height are finite and
    /// strictly positive, and that the quantities derived from them do not overflow.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let all_finite = self.r1.is_finite() && self.r2.is_finite() && self.height.is_finite();

        if !all_finite {
            return Err(PipelineError::InvalidConfig(format!(
                "frustum dimensions must be finite, got {:?}",
                self
            )));
        }

        if self.height <= 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "frustum height must be strictly positive, got {}",
                self.height
            )));
        }

        if self.r1 <= 0.0 || self.r2 <= 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "frustum radii must be strictly positive, got {} and {}",
                self.r1, self.r2
            )));
        }

        // Equal radii put the apex at infinity.
        if self.r1 == self.r2 {
            return Err(PipelineError::InvalidConfig(format!(
                "frustum radii must differ, both are {}",
                self.r1
            )));
        }

        // Sampling spans `[-r, r]` and the lateral test squares distances to the apex.
        let max_radius = self.max_radius();
        let apex = self.apex_height();
        let reach = self.half_height() + apex.abs();
        let derived = [
            2.0 * max_radius,
            max_radius * max_radius,
            apex,
            self.slope() * reach * reach,
        ];

        if derived.iter().any(|value| !value.is_finite()) {
            return Err(PipelineError::InvalidConfig(format!(
                "frustum dimensions are too large to be represented, got {:?}",
                self
            )));
        }

        Ok(())
    }

    /// Half the distance between the two planes.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }

    /// The largest of the two radii.
    #[inline]
    pub fn max_radius(&self) -> Real {
        self.r1.max(self.r2)
    }

    /// The squared slope `m = (r1 − r2)² / height²` of the lateral surface.
    #[inline]
    pub fn slope(&self) -> Real {
        let dr = self.r1 - self.r2;
        dr * dr / (self.height * self.height)
    }

    /// The height `d = (height / 2)·(r1 + r2) / (r1 − r2)` of the cone apex.
    #[inline]
    pub fn apex_height(&self) -> Real {
        self.half_height() * (self.r1 + self.r2) / (self.r1 - self.r2)
    }

    /// The radius `(1 − t)·r1 + t·r2` interpolated between both planes.
    ///
    /// `t = 0` is the bottom plane and `t = 1` the top plane.
    #[inline]
    pub fn radius_at(&self, t: Real) -> Real {
        (1.0 - t) * self.r1 + t * self.r2
    }

    /// Evaluates `x² − m·(y − d)² + z²` at `pt`.
    ///
    /// This is negative inside the double cone carrying the lateral surface,
    /// zero on it and positive outside.
    #[inline]
    pub fn lateral_implicit(&self, pt: &Point<Real>) -> Real {
        let dy = pt.y - self.apex_height();
        pt.x * pt.x - self.slope() * dy * dy + pt.z * pt.z
    }

    /// Tests if the height `y` lies between the two planes, both included.
    #[inline]
    pub fn contains_height(&self, y: Real) -> bool {
        let half_height = self.half_height();
        y >= -half_height && y <= half_height
    }
}
