/// Errors raised synchronously by the geometry pipeline.
///
/// Only configuration problems are reported this way. Degenerate geometry (too
/// few points left after filtering, coplanar input, …) is not an error: it
/// yields an empty mesh that is simply not rendered.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use frusta3d::sampling::{self, SampleConfig, SamplingMode};
/// use frusta3d::shape::Frustum;
/// use frusta3d::PipelineError;
///
/// let config = SampleConfig::new(0, SamplingMode::Random, 500);
/// let mut rng = rand::thread_rng();
///
/// match sampling::generate(&config, &Frustum::reference(), &mut rng) {
///     Err(PipelineError::InvalidConfig(msg)) => println!("rejected: {}", msg),
///     Ok(_) => unreachable!(),
/// }
/// # }
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// A count, a scale or a frustum dimension is out of its valid range.
    ///
    /// No point is generated and no scene state is modified when this is returned.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
