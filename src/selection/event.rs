use crate::selection::FadeToken;

/// Discrete input from the selection UI, plus the engine's own
/// fade-completion signal.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    SelectEntity(String),
    DeselectEntity(String),
    SelectAll,
    SetActiveCategory(String),
    HoverEntity(String),
    UnhoverEntity(String),
    /// Delivered by the host once the scheduled settle delay elapsed.
    FadeComplete(FadeToken),
}
