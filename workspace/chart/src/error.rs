use thiserror::Error;

/// Error types for chart scene construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Pixel dimensions must both be positive.
    #[error("invalid chart dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The value domain must be a non-empty interval.
    #[error("empty value domain: [{min}, {max}]")]
    EmptyDomain { min: f64, max: f64 },
}

/// Type alias for Result with ChartError.
pub type Result<T> = std::result::Result<T, ChartError>;
