use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Animation timing for fades and rescale transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionBehavior {
    /// Duration of per-line fade in/out.
    pub fade_duration_ms: u64,
    /// Delay before a pending phase finalizes; must outlast the fade.
    pub settle_delay_ms: u64,
    /// Duration of the axis rescale and path transitions.
    pub rescale_duration_ms: u64,
}

impl Default for MotionBehavior {
    fn default() -> Self {
        Self {
            fade_duration_ms: 200,
            settle_delay_ms: 205,
            rescale_duration_ms: 200,
        }
    }
}

impl MotionBehavior {
    pub fn validate(self) -> ChartResult<()> {
        if self.fade_duration_ms == 0 || self.rescale_duration_ms == 0 {
            return Err(ChartError::InvalidData(
                "motion durations must be > 0".to_owned(),
            ));
        }
        if self.settle_delay_ms < self.fade_duration_ms {
            return Err(ChartError::InvalidData(
                "settle delay must not elapse before the fade completes".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Stroke widths and the hover highlight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeBehavior {
    pub base_width: f64,
    pub hover_width: f64,
    pub hover_color: Color,
}

impl Default for StrokeBehavior {
    fn default() -> Self {
        Self {
            base_width: 1.5,
            hover_width: 3.0,
            hover_color: Color::rgb(0.0, 0.0, 0.0),
        }
    }
}

impl StrokeBehavior {
    pub fn validate(self) -> ChartResult<()> {
        if !self.base_width.is_finite() || self.base_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "base stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.hover_width.is_finite() || self.hover_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "hover stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.hover_color.validate()
    }
}
