pub mod dataset;
pub mod scale;
pub mod scale_engine;
pub mod types;
pub mod value_scale;
pub mod year_scale;

pub use dataset::{DatasetIndex, Series};
pub use scale::LinearScale;
pub use scale_engine::ScaleEngine;
pub use types::{Observation, ObservationRecord, ValueRange, Viewport};
pub use value_scale::ValueScale;
pub use year_scale::YearScale;
