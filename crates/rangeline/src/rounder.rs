use rangeline_core::ConfigError;

use crate::{DomainRange, SelectedRange};

/// Slack for deciding that a value sits exactly halfway between two steps.
/// Pixel to domain conversions rarely land on a tie exactly.
const TIE_EPSILON: f64 = 1e-9;

/// Positive quantization granularity, in domain units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Step(f64);

impl Step {
    pub fn new(step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() {
            return Err(ConfigError::NonFiniteValue {
                what: "step",
                value: step,
            });
        }
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        Ok(Self(step))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for Step {
    type Error = ConfigError;

    fn try_from(step: f64) -> Result<Self, Self::Error> {
        Step::new(step)
    }
}

impl From<Step> for f64 {
    fn from(s: Step) -> f64 {
        s.0
    }
}

/// Snaps domain values to `min + k * step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRounder {
    domain: DomainRange,
    step: Step,
}

impl ValueRounder {
    pub fn new(domain: DomainRange, step: Step) -> Self {
        Self { domain, step }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Nearest multiple of the step anchored at `min`. Ties go toward `min`.
    pub fn round(&self, value: f64) -> f64 {
        let min = self.domain.min();
        let step = self.step.get();
        let k = ((value - min) / step - 0.5 - TIE_EPSILON).ceil();
        min + step * k
    }

    /// `round` followed by clamping into the domain. A `max` that is not a
    /// step multiple is still reachable.
    pub fn round_clamped(&self, value: f64) -> f64 {
        self.domain.clamp(self.round(value))
    }

    /// The value reported to the owner: both ends rounded, clamped, ordered.
    pub fn round_range(&self, range: SelectedRange) -> SelectedRange {
        SelectedRange {
            start: self.round_clamped(range.start),
            end: self.round_clamped(range.end),
        }
        .ordered()
    }
}
