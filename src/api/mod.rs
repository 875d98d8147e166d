pub mod engine;
pub mod engine_accessors;
pub mod engine_config;
pub mod selection_controller;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
