use thiserror::Error;

/// Rejected slider configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("domain max ({max}) must be greater than min ({min})")]
    EmptyDomain { min: f64, max: f64 },
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("{what} must be finite, got {value}")]
    NonFiniteValue { what: &'static str, value: f64 },
    #[error("label mark step must be at least 1")]
    ZeroMarkStep,
}
