use crate::core::{LinearScale, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};

/// X-axis model: years mapped left-to-right onto `[0, width]`.
///
/// The year domain is fixed for the chart's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearScale {
    linear: LinearScale,
}

impl YearScale {
    pub fn from_range(range: ValueRange) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::from_range(range)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    pub fn year_to_pixel(self, year: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.linear
            .domain_to_pixel(year, f64::from(viewport.width))
    }

    pub fn pixel_to_year(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.linear
            .pixel_to_domain(pixel, f64::from(viewport.width))
    }
}
