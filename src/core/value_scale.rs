use crate::core::{LinearScale, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};

/// Y-axis model mapped to an inverted pixel axis.
///
/// The domain minimum lands at the bottom of the viewport (`height`) and the
/// maximum at the top (`0`), so larger values sit higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn from_range(range: ValueRange) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::from_range(range)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let height = f64::from(viewport.height);
        let upward = self.linear.domain_to_pixel(value, height)?;
        Ok(height - upward)
    }

    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let height = f64::from(viewport.height);
        self.linear.pixel_to_domain(height - pixel, height)
    }
}

#[cfg(test)]
mod tests {
    use super::ValueScale;
    use crate::core::{ValueRange, Viewport};

    #[test]
    fn larger_values_map_higher_on_screen() {
        let scale =
            ValueScale::from_range(ValueRange::new(0.0, 100.0).expect("valid range"))
                .expect("valid scale");
        let viewport = Viewport::new(920, 450);

        let bottom = scale.value_to_pixel(0.0, viewport).expect("map min");
        let top = scale.value_to_pixel(100.0, viewport).expect("map max");

        assert!((bottom - 450.0).abs() <= 1e-9);
        assert!((top - 0.0).abs() <= 1e-9);
    }

    #[test]
    fn pixel_to_value_inverts_the_mapping() {
        let scale =
            ValueScale::from_range(ValueRange::new(5.0, 35.0).expect("valid range"))
                .expect("valid scale");
        let viewport = Viewport::new(920, 450);

        let pixel = scale.value_to_pixel(20.0, viewport).expect("map value");
        let roundtrip = scale.pixel_to_value(pixel, viewport).expect("invert");
        assert!((roundtrip - 20.0).abs() <= 1e-9);
    }
}
