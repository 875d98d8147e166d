use std::collections::HashMap;

use crate::error::ChartResult;
use crate::render::{Color, VisualCommand};

/// Boundary to the rendering collaborator.
///
/// Commands arrive in issue order; the sink owns actual pixel drawing.
pub trait CommandSink {
    fn apply(&mut self, command: &VisualCommand) -> ChartResult<()>;
}

/// Recording sink used by tests and headless engine usage.
///
/// It validates every command so tests catch invalid geometry before a real
/// backend is introduced, and tracks last-applied per-entity state so
/// assertions can check final visibility and stroke.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<VisualCommand>,
    opacity: HashMap<String, f64>,
    stroke: HashMap<String, (Color, f64)>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied opacity for an entity, if any opacity command was seen.
    #[must_use]
    pub fn opacity_of(&self, entity: &str) -> Option<f64> {
        self.opacity.get(entity).copied()
    }

    /// Last applied stroke (color, width) for an entity.
    #[must_use]
    pub fn stroke_of(&self, entity: &str) -> Option<(Color, f64)> {
        self.stroke.get(entity).copied()
    }

    /// Number of recorded axis-domain updates.
    #[must_use]
    pub fn axis_update_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, VisualCommand::SetAxisDomain { .. }))
            .count()
    }

    /// Number of recorded path updates for one entity.
    #[must_use]
    pub fn path_update_count(&self, entity: &str) -> usize {
        self.commands
            .iter()
            .filter(|command| {
                matches!(command, VisualCommand::DrawPath { entity: target, .. } if target == entity)
            })
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl CommandSink for RecordingSink {
    fn apply(&mut self, command: &VisualCommand) -> ChartResult<()> {
        command.validate()?;
        match command {
            VisualCommand::SetOpacity {
                entity, opacity, ..
            } => {
                self.opacity.insert(entity.clone(), *opacity);
            }
            VisualCommand::SetStroke {
                entity,
                color,
                width,
            } => {
                self.stroke.insert(entity.clone(), (*color, *width));
            }
            VisualCommand::DrawPath { .. } | VisualCommand::SetAxisDomain { .. } => {}
        }
        self.commands.push(command.clone());
        Ok(())
    }
}
