use crate::core::ValueRange;
use crate::render::{Color, CommandSink};
use crate::selection::{Phase, ScheduledFade};

use super::ChartEngine;

impl<S: CommandSink> ChartEngine<S> {
    #[must_use]
    pub fn year_domain(&self) -> ValueRange {
        self.core.scales.year_domain()
    }

    /// Value domain currently in effect.
    #[must_use]
    pub fn value_domain(&self) -> ValueRange {
        self.core.scales.value_domain()
    }

    /// Full-dataset value domain, fixed at construction.
    #[must_use]
    pub fn full_value_domain(&self) -> ValueRange {
        self.core.scales.full_value_domain()
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.core.index.entity_names()
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.core.index.categories()
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        self.core.selection.active_category()
    }

    #[must_use]
    pub fn color_of(&self, category: &str) -> Option<Color> {
        self.core.colors.color_of(category)
    }

    /// Selected entities in insertion order.
    #[must_use]
    pub fn selected_entities(&self) -> Vec<&str> {
        self.core.selection.selected().iter().map(String::as_str).collect()
    }

    /// Whether the distinguished all control is active. Not the same thing
    /// as the selection being empty: individual deselection down to an empty
    /// set leaves this off.
    #[must_use]
    pub fn is_all_mode(&self) -> bool {
        self.core.selection.is_all_mode()
    }

    /// Visibility target for one entity.
    #[must_use]
    pub fn is_visible(&self, entity: &str) -> bool {
        self.core.selection.is_visible(entity)
    }

    #[must_use]
    pub fn hovered_entity(&self) -> Option<&str> {
        self.core.selection.hovered()
    }

    /// The fade completion the host still owes the engine, if any.
    #[must_use]
    pub fn pending_fade(&self) -> Option<ScheduledFade> {
        match self.core.selection.phase() {
            Phase::Idle => None,
            Phase::AwaitingFadeOut { token, .. } | Phase::AwaitingShowAll { token } => {
                Some(ScheduledFade {
                    token: *token,
                    delay_ms: self.core.motion.settle_delay_ms,
                })
            }
        }
    }
}
