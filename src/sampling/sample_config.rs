use crate::PipelineError;

/// Number of grid steps per axis used by [`SamplingMode::Precise`] in the reference scene.
pub const DEFAULT_PRECISION_STEPS: usize = 500;

/// The point generation strategy.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SamplingMode {
    /// Points drawn uniformly at random inside a box around the frustum.
    #[default]
    Random,
    /// Points laid on a regular grid of the lateral surface.
    Precise,
}

impl SamplingMode {
    /// Converts the value of a `0`/`1` toggle widget: zero is random, anything else is precise.
    pub fn from_toggle(toggle: u32) -> Self {
        if toggle == 0 {
            SamplingMode::Random
        } else {
            SamplingMode::Precise
        }
    }
}

/// Parameters of a single point generation request.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SampleConfig {
    /// Number of points drawn in [`SamplingMode::Random`].
    pub point_count: usize,
    /// The generation strategy.
    pub mode: SamplingMode,
    /// Number of steps per grid axis in [`SamplingMode::Precise`].
    pub precision_steps: usize,
}

impl SampleConfig {
    /// Creates a new sampling configuration.
    ///
    /// The counts are only checked by [`SampleConfig::validate`], which every
    /// generation entry point calls.
    pub fn new(point_count: usize, mode: SamplingMode, precision_steps: usize) -> Self {
        Self {
            point_count,
            mode,
            precision_steps,
        }
    }

    /// Checks that both counts are strictly positive.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.point_count == 0 {
            return Err(PipelineError::InvalidConfig(
                "the point count must be strictly positive".to_string(),
            ));
        }

        if self.precision_steps == 0 {
            return Err(PipelineError::InvalidConfig(
                "the number of precision steps must be strictly positive".to_string(),
            ));
        }

        Ok(())
    }

    /// The exact number of points the sampler produces for this configuration.
    pub fn expected_len(&self) -> usize {
        match self.mode {
            SamplingMode::Random => self.point_count,
            SamplingMode::Precise => self.precision_steps * self.precision_steps,
        }
    }
}
