pub mod event;
pub mod state;
pub mod transitions;

pub use event::SelectionEvent;
pub use state::{FadeToken, Phase, SelectionState};
pub use transitions::{ScheduledFade, TransitionContext, TransitionOutput};
