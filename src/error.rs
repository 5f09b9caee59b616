use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid average range: low={low}, average={average}, high={high}")]
    InvalidAverageRange { low: f64, average: f64, high: f64 },

    #[error("sample timestamps must be ascending (first violation at index {index})")]
    UnsortedSamples { index: usize },

    #[error("render backend failure: {0}")]
    Backend(String),
}
