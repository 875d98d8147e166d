use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{MotionBehavior, StrokeBehavior};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub motion: MotionBehavior,
    #[serde(default)]
    pub stroke: StrokeBehavior,
}

impl ChartEngineConfig {
    /// Creates a config with default motion and stroke behavior.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            motion: MotionBehavior::default(),
            stroke: StrokeBehavior::default(),
        }
    }

    /// Sets fade/settle/rescale timing.
    #[must_use]
    pub fn with_motion_behavior(mut self, motion: MotionBehavior) -> Self {
        self.motion = motion;
        self
    }

    /// Sets stroke widths and the hover highlight.
    #[must_use]
    pub fn with_stroke_behavior(mut self, stroke: StrokeBehavior) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.motion.validate()?;
        self.stroke.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
