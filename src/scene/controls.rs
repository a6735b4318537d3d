use crate::sampling::{SampleConfig, SamplingMode};
use core::ops::RangeInclusive;

/// Values accepted by the point count slider.
pub const POINT_COUNT_RANGE: RangeInclusive<usize> = 100..=1_000_000;

/// Point count selected when the scene starts.
pub const DEFAULT_POINT_COUNT: usize = 5000;

/// The state of the user-facing controls.
///
/// A plain value: changing a control means building a new `Controls` and
/// passing it to [`Scene::regenerate`](super::Scene::regenerate).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Controls {
    /// Number of randomly sampled points.
    pub point_count: usize,
    /// `0` for random sampling, anything else for the precise grid.
    pub mode_toggle: u32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            mode_toggle: 0,
        }
    }
}

impl Controls {
    /// Creates a new set of control values.
    pub fn new(point_count: usize, mode: SamplingMode) -> Self {
        Self {
            point_count,
            mode_toggle: (mode == SamplingMode::Precise) as u32,
        }
    }

    /// These controls with the point count brought back into [`POINT_COUNT_RANGE`].
    ///
    /// This mirrors what the slider widget allows; the sampler itself never clamps.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            point_count: self
                .point_count
                .clamp(*POINT_COUNT_RANGE.start(), *POINT_COUNT_RANGE.end()),
            mode_toggle: self.mode_toggle,
        }
    }

    /// The sampling strategy selected by the toggle.
    pub fn mode(&self) -> SamplingMode {
        SamplingMode::from_toggle(self.mode_toggle)
    }

    /// The sampling request these controls describe.
    pub fn sample_config(&self, precision_steps: usize) -> SampleConfig {
        SampleConfig::new(self.point_count, self.mode(), precision_steps)
    }
}
