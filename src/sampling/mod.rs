//! Generation of candidate points around a frustum.
//!
//! Two interchangeable strategies are available, selected by [`SamplingMode`]:
//!
//! - [`SamplingMode::Random`] draws points uniformly inside a box around the
//!   frustum. Most of them are later discarded by the [`region`](crate::region) filter.
//! - [`SamplingMode::Precise`] lays a regular `(angle, height)` grid directly on the
//!   lateral surface.

pub use self::precise_points::precise_points;
pub use self::random_points::{random_points, SamplingBox};
pub use self::sample_config::{SampleConfig, SamplingMode, DEFAULT_PRECISION_STEPS};

use crate::math::{Point, Real};
use crate::shape::Frustum;
use crate::PipelineError;
use rand::Rng;

mod precise_points;
mod random_points;
mod sample_config;

/// Generates the candidate points described by `config` for the given frustum.
///
/// The configuration and the frustum are validated before anything is generated:
/// a zero point count, a zero precision, or an invalid frustum yield
/// [`PipelineError::InvalidConfig`] and no point at all.
///
/// `rng` is only used by [`SamplingMode::Random`]; pass a seeded generator to get
/// reproducible clouds.
pub fn generate<R: Rng + ?Sized>(
    config: &SampleConfig,
    frustum: &Frustum,
    rng: &mut R,
) -> Result<Vec<Point<Real>>, PipelineError> {
    config.validate()?;
    frustum.validate()?;

    let points = match config.mode {
        SamplingMode::Random => random_points(frustum, config.point_count, rng),
        SamplingMode::Precise => precise_points(frustum, config.precision_steps),
    };

    log::debug!(
        "Generated {} candidate points in {:?} mode.",
        points.len(),
        config.mode
    );

    Ok(points)
}
