//! Conversions between the three coordinate spaces of a track.
//!
//! - *domain*: the quantity the axis represents (minutes, dollars, years)
//! - *normalized*: `[0, 1]` across the domain
//! - *pixel*: page-space x, as measured by the host
//!
//! None of these clamp. Keeping positions inside the track is the drag
//! controller's job.

use rangeline_core::Rect;

use crate::{DomainRange, NormalizedRange, SelectedRange};

/// Measured horizontal extent of the track element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub pixel_width: f64,
    pub pixel_left_offset: f64,
}

impl TrackGeometry {
    pub fn new(pixel_width: f64, pixel_left_offset: f64) -> Self {
        Self {
            pixel_width,
            pixel_left_offset,
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            pixel_width: f64::from(rect.w),
            pixel_left_offset: f64::from(rect.x),
        }
    }

    /// A zero-width (not yet laid out) track cannot map pixels.
    pub fn is_measured(&self) -> bool {
        self.pixel_width > 0.0 && self.pixel_width.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    domain: DomainRange,
    geometry: TrackGeometry,
}

impl CoordinateMapper {
    pub fn new(domain: DomainRange, geometry: TrackGeometry) -> Self {
        Self { domain, geometry }
    }

    pub fn domain(&self) -> &DomainRange {
        &self.domain
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn to_normalized(&self, value: f64) -> f64 {
        (value - self.domain.min()) / (self.domain.max() - self.domain.min())
    }

    pub fn to_domain(&self, normalized: f64) -> f64 {
        normalized * (self.domain.max() - self.domain.min()) + self.domain.min()
    }

    pub fn pixel_to_normalized(&self, pixel_x: f64) -> f64 {
        (pixel_x - self.geometry.pixel_left_offset) / self.geometry.pixel_width
    }

    /// Page-space x of a normalized position.
    pub fn normalized_to_pixel(&self, normalized: f64) -> f64 {
        normalized * self.geometry.pixel_width + self.geometry.pixel_left_offset
    }

    /// Track-relative x of a normalized position, for inline position styles.
    pub fn normalized_to_track_offset(&self, normalized: f64) -> f64 {
        normalized * self.geometry.pixel_width
    }

    pub fn value_to_pixel(&self, value: f64) -> f64 {
        self.normalized_to_pixel(self.to_normalized(value))
    }

    pub fn pixel_to_value(&self, pixel_x: f64) -> f64 {
        self.to_domain(self.pixel_to_normalized(pixel_x))
    }

    pub fn range_to_normalized(&self, range: SelectedRange) -> NormalizedRange {
        NormalizedRange {
            start: self.to_normalized(range.start),
            end: self.to_normalized(range.end),
        }
    }

    pub fn range_to_domain(&self, range: NormalizedRange) -> SelectedRange {
        SelectedRange {
            start: self.to_domain(range.start),
            end: self.to_domain(range.end),
        }
    }
}

/// Domain-only normalization, usable before the track is measured.
pub fn normalize(domain: &DomainRange, value: f64) -> f64 {
    (value - domain.min()) / domain.span()
}

pub fn normalize_range(domain: &DomainRange, range: SelectedRange) -> NormalizedRange {
    NormalizedRange {
        start: normalize(domain, range.start),
        end: normalize(domain, range.end),
    }
}
