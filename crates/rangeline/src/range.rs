use rangeline_core::{ConfigError, Interpolate};

/// Fixed bounds of a slider axis. Always finite with `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DomainBounds", into = "DomainBounds")
)]
pub struct DomainRange {
    min: f64,
    max: f64,
}

/// Unvalidated `{min, max}` pair, the wire form of [`DomainRange`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainBounds {
    pub min: f64,
    pub max: f64,
}

impl DomainRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() {
            return Err(ConfigError::NonFiniteValue {
                what: "domain min",
                value: min,
            });
        }
        if !max.is_finite() {
            return Err(ConfigError::NonFiniteValue {
                what: "domain max",
                value: max,
            });
        }
        if max <= min {
            return Err(ConfigError::EmptyDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Orders `range` and clamps both ends into the domain.
    pub fn clamp_range(&self, range: SelectedRange) -> SelectedRange {
        let ordered = range.ordered();
        SelectedRange {
            start: self.clamp(ordered.start),
            end: self.clamp(ordered.end),
        }
    }

    pub fn contains_range(&self, range: SelectedRange) -> bool {
        self.contains(range.start) && self.contains(range.end)
    }
}

impl TryFrom<DomainBounds> for DomainRange {
    type Error = ConfigError;

    fn try_from(b: DomainBounds) -> Result<Self, Self::Error> {
        DomainRange::new(b.min, b.max)
    }
}

impl From<DomainRange> for DomainBounds {
    fn from(d: DomainRange) -> Self {
        DomainBounds {
            min: d.min,
            max: d.max,
        }
    }
}

/// A selection in domain units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedRange {
    pub start: f64,
    pub end: f64,
}

impl SelectedRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn ordered(self) -> Self {
        Self {
            start: self.start.min(self.end),
            end: self.start.max(self.end),
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A selection rescaled to `[0, 1]` of the domain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedRange {
    pub start: f64,
    pub end: f64,
}

impl NormalizedRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Interpolate for NormalizedRange {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        NormalizedRange {
            start: self.start.interpolate(&other.start, t),
            end: self.end.interpolate(&other.end, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_rejects_empty_and_inverted() {
        assert_eq!(
            DomainRange::new(3.0, 3.0),
            Err(ConfigError::EmptyDomain { min: 3.0, max: 3.0 })
        );
        assert!(DomainRange::new(10.0, 0.0).is_err());
        assert!(matches!(
            DomainRange::new(0.0, f64::INFINITY),
            Err(ConfigError::NonFiniteValue { what: "domain max", .. })
        ));
        assert!(DomainRange::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn clamp_range_orders_then_clamps() {
        let hours = DomainRange::new(0.0, 24.0).unwrap();
        assert_eq!(
            hours.clamp_range(SelectedRange::new(26.0, 10.0)),
            SelectedRange::new(10.0, 24.0)
        );
        assert!(!hours.contains_range(SelectedRange::new(10.0, 26.0)));
        assert!(hours.contains_range(SelectedRange::new(0.0, 24.0)));
    }

    #[test]
    fn selected_range_helpers() {
        let r = SelectedRange::new(5.0, 2.0);
        assert!(!r.is_ordered());
        assert_eq!(r.ordered(), SelectedRange::new(2.0, 5.0));
        assert_eq!(r.ordered().len(), 3.0);
        assert!(SelectedRange::new(4.0, 4.0).is_empty());
    }

    #[test]
    fn normalized_range_interpolates_both_ends() {
        let a = NormalizedRange::new(0.0, 0.5);
        let b = NormalizedRange::new(0.5, 1.0);
        assert_eq!(a.interpolate(&b, 0.5), NormalizedRange::new(0.25, 0.75));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn domain_deserialize_validates() {
        let ok: DomainRange = serde_json::from_str(r#"{"min":600,"max":3000}"#).unwrap();
        assert_eq!(ok.span(), 2400.0);
        assert!(serde_json::from_str::<DomainRange>(r#"{"min":5,"max":1}"#).is_err());
    }
}
