use std::num::NonZeroUsize;

use rangeline_core::{AnimationSpec, ConfigError};
use web_time::Duration;

use crate::{DomainRange, Step, Tick, ValueRounder, tick_strip};

const DEFAULT_MARK_STEP: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(n) => n,
    None => unreachable!(),
};

/// Read-only inputs of one slider instance.
///
/// ```rust
/// use rangeline::SliderConfig;
///
/// // Quarter hours, labelled every hour.
/// let config = SliderConfig::new(600.0, 810.0)?
///     .with_step(15.0)?
///     .with_mark_step(4)?;
/// assert_eq!(config.step().get(), 15.0);
/// # Ok::<(), rangeline_core::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderConfig {
    domain: DomainRange,
    #[cfg_attr(feature = "serde", serde(default))]
    step: Step,
    #[cfg_attr(feature = "serde", serde(default = "default_mark_step"))]
    mark_step: NonZeroUsize,
    #[cfg_attr(feature = "serde", serde(default = "default_settle"))]
    settle: Option<AnimationSpec>,
}

#[cfg(feature = "serde")]
fn default_mark_step() -> NonZeroUsize {
    DEFAULT_MARK_STEP
}

#[cfg(feature = "serde")]
fn default_settle() -> Option<AnimationSpec> {
    Some(AnimationSpec::default())
}

impl SliderConfig {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        Ok(Self::from_domain(DomainRange::new(min, max)?))
    }

    pub fn from_domain(domain: DomainRange) -> Self {
        Self {
            domain,
            step: Step::default(),
            mark_step: DEFAULT_MARK_STEP,
            settle: Some(AnimationSpec::default()),
        }
    }

    pub fn with_step(mut self, step: f64) -> Result<Self, ConfigError> {
        self.step = Step::new(step)?;
        Ok(self)
    }

    /// Every `n`th tick carries a label.
    pub fn with_mark_step(mut self, n: usize) -> Result<Self, ConfigError> {
        self.mark_step = NonZeroUsize::new(n).ok_or(ConfigError::ZeroMarkStep)?;
        Ok(self)
    }

    pub fn with_settle(mut self, spec: AnimationSpec) -> Self {
        self.settle = Some(spec);
        self
    }

    pub fn with_settle_duration(mut self, duration: Duration) -> Self {
        let spec = self.settle.unwrap_or_default();
        self.settle = Some(AnimationSpec { duration, ..spec });
        self
    }

    pub fn without_settle(mut self) -> Self {
        self.settle = None;
        self
    }

    pub fn domain(&self) -> &DomainRange {
        &self.domain
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn mark_step(&self) -> NonZeroUsize {
        self.mark_step
    }

    pub fn settle(&self) -> Option<&AnimationSpec> {
        self.settle.as_ref()
    }

    pub fn rounder(&self) -> ValueRounder {
        ValueRounder::new(self.domain, self.step)
    }

    /// Ruler marks for this configuration.
    pub fn ticks(&self, format_label: impl Fn(f64) -> String) -> Vec<Tick> {
        tick_strip(&self.domain, self.step, self.mark_step, format_label)
    }
}
