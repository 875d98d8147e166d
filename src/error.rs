use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("entity `{entity}` carries a category set that differs from the dataset-wide set")]
    CategoryMismatch { entity: String },

    #[error("restricted value domain requires a non-empty selection")]
    EmptySelection,
}
