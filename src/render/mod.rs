pub mod color;
pub mod command;
pub mod coordinator;
pub mod palette;
pub mod sink;
pub mod style;

pub use color::Color;
pub use command::{AxisKind, PathPoint, VisualCommand};
pub use palette::ColorTable;
pub use sink::{CommandSink, RecordingSink};
pub use style::{MotionBehavior, StrokeBehavior};
