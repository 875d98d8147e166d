use indexmap::IndexSet;

/// Opaque generation token identifying one scheduled fade completion.
///
/// A completion delivered with a token that no longer matches the current
/// phase is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadeToken(u64);

/// Explicit two-phase sequencing state.
///
/// Replaces the bare settle timer of timer-based designs: the host schedules
/// a delayed fade-complete event and the phase decides what finalizing means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Every line except `target` is fading out; the selection set is
    /// replaced and the scale recomputed only once the fade completes.
    AwaitingFadeOut { target: String, token: FadeToken },
    /// Every line fades back in once in-flight per-line fades settle.
    AwaitingShowAll { token: FadeToken },
}

/// The set of highlighted entities plus the active category.
///
/// Single source of truth for visibility and scaling; mutated only through
/// `transitions::apply`. The empty set is the distinguished "show all, scale
/// to all" state. `all_mode` tracks whether the distinguished all control is
/// active, which is not the same thing as the set being empty: a selection
/// emptied by repeated individual deselection keeps `all_mode` off.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub(super) selected: IndexSet<String>,
    pub(super) active_category: String,
    pub(super) all_mode: bool,
    pub(super) hovered: Option<String>,
    pub(super) phase: Phase,
    pub(super) next_generation: u64,
}

impl SelectionState {
    #[must_use]
    pub fn new(active_category: impl Into<String>) -> Self {
        Self {
            selected: IndexSet::new(),
            active_category: active_category.into(),
            all_mode: true,
            hovered: None,
            phase: Phase::Idle,
            next_generation: 0,
        }
    }

    #[must_use]
    pub fn selected(&self) -> &IndexSet<String> {
        &self.selected
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    #[must_use]
    pub fn is_all_mode(&self) -> bool {
        self.all_mode
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Visibility rule: visible iff the selection is empty or contains the
    /// entity.
    #[must_use]
    pub fn is_visible(&self, entity: &str) -> bool {
        self.selected.is_empty() || self.selected.contains(entity)
    }

    pub(super) fn issue_token(&mut self) -> FadeToken {
        self.next_generation += 1;
        FadeToken(self.next_generation)
    }
}
