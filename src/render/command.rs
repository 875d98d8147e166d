use serde::{Deserialize, Serialize};

use crate::core::ValueRange;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Axis addressed by a domain update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    Year,
    Value,
}

/// One projected point of a line path, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Ordered visual update consumed by the rendering collaborator.
///
/// The engine never draws; it describes. Re-applying an unchanged command
/// must leave the visible state untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VisualCommand {
    DrawPath {
        entity: String,
        points: Vec<PathPoint>,
        animated: bool,
        duration_ms: u64,
    },
    SetStroke {
        entity: String,
        color: Color,
        width: f64,
    },
    SetOpacity {
        entity: String,
        opacity: f64,
        animated: bool,
        duration_ms: u64,
    },
    SetAxisDomain {
        axis: AxisKind,
        domain: ValueRange,
        animated: bool,
        duration_ms: u64,
    },
}

impl VisualCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::DrawPath { points, .. } => {
                for point in points {
                    point.validate()?;
                }
                Ok(())
            }
            Self::SetStroke { color, width, .. } => {
                if !width.is_finite() || *width <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "stroke width must be finite and > 0".to_owned(),
                    ));
                }
                color.validate()
            }
            Self::SetOpacity { opacity, .. } => {
                if !opacity.is_finite() || !(0.0..=1.0).contains(opacity) {
                    return Err(ChartError::InvalidData(
                        "opacity must be finite and in [0, 1]".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::SetAxisDomain { .. } => Ok(()),
        }
    }

    /// Entity a per-line command addresses; `None` for axis updates.
    #[must_use]
    pub fn entity(&self) -> Option<&str> {
        match self {
            Self::DrawPath { entity, .. }
            | Self::SetStroke { entity, .. }
            | Self::SetOpacity { entity, .. } => Some(entity),
            Self::SetAxisDomain { .. } => None,
        }
    }
}
