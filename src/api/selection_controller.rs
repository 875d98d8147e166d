use crate::error::ChartResult;
use crate::render::CommandSink;
use crate::selection::{FadeToken, ScheduledFade, SelectionEvent};

use super::ChartEngine;

impl<S: CommandSink> ChartEngine<S> {
    /// Adds an entity to the selection.
    ///
    /// Leaving the all state is two-phase: the other lines fade out first
    /// and the returned `ScheduledFade` tells the host when to deliver
    /// `fade_complete` so the selection set is replaced and rescaled.
    /// Unknown entities are rejected as a no-op.
    pub fn select_entity(&mut self, name: &str) -> ChartResult<Option<ScheduledFade>> {
        self.dispatch(SelectionEvent::SelectEntity(name.to_owned()))
    }

    /// Removes an entity from the selection and fades its line out.
    ///
    /// Emptying the set this way scales back to the full domain without
    /// re-entering the all state.
    pub fn deselect_entity(&mut self, name: &str) -> ChartResult<Option<ScheduledFade>> {
        self.dispatch(SelectionEvent::DeselectEntity(name.to_owned()))
    }

    /// Clears the selection into the all state; lines fade back in after
    /// the returned settle delay. No-op when already in the all state.
    pub fn select_all(&mut self) -> ChartResult<Option<ScheduledFade>> {
        self.dispatch(SelectionEvent::SelectAll)
    }

    /// Switches the drawn series family; the value domain stays untouched.
    pub fn set_active_category(&mut self, key: &str) -> ChartResult<()> {
        self.dispatch(SelectionEvent::SetActiveCategory(key.to_owned()))?;
        Ok(())
    }

    pub fn hover_entity(&mut self, name: &str) -> ChartResult<()> {
        self.dispatch(SelectionEvent::HoverEntity(name.to_owned()))?;
        Ok(())
    }

    pub fn unhover_entity(&mut self, name: &str) -> ChartResult<()> {
        self.dispatch(SelectionEvent::UnhoverEntity(name.to_owned()))?;
        Ok(())
    }

    /// Delivers a scheduled fade completion. Stale tokens are ignored.
    pub fn fade_complete(&mut self, token: FadeToken) -> ChartResult<()> {
        self.dispatch(SelectionEvent::FadeComplete(token))?;
        Ok(())
    }
}
