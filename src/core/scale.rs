use crate::core::types::ValueRange;
use crate::error::{ChartError, ChartResult};

/// Linear domain-to-pixel mapping over a one-dimensional span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale from a closed range, widening a degenerate single-value
    /// domain by half a unit on each side so the mapping stays defined.
    pub fn from_range(range: ValueRange) -> ChartResult<Self> {
        let (min, max) = range.bounds();
        if min == max {
            return Self::new(min - 0.5, max + 0.5);
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, span_px: f64) -> ChartResult<f64> {
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel span must be finite and > 0".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * span_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, span_px: f64) -> ChartResult<f64> {
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel span must be finite and > 0".to_owned(),
            ));
        }
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / span_px;
        Ok(self.domain_start + normalized * span)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;
    use crate::core::types::ValueRange;

    #[test]
    fn maps_domain_endpoints_to_pixel_span() {
        let scale = LinearScale::new(1990.0, 2013.0).expect("valid scale");
        let left = scale.domain_to_pixel(1990.0, 920.0).expect("map min");
        let right = scale.domain_to_pixel(2013.0, 920.0).expect("map max");
        assert!((left - 0.0).abs() <= 1e-9);
        assert!((right - 920.0).abs() <= 1e-9);
    }

    #[test]
    fn from_range_widens_degenerate_domain() {
        let range = ValueRange::new(10.0, 10.0).expect("valid range");
        let scale = LinearScale::from_range(range).expect("widened scale");
        assert_eq!(scale.domain(), (9.5, 10.5));
    }
}
