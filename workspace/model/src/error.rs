use thiserror::Error;

/// Error types for domain-model invariant violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Series points must be ordered by year ascending.
    #[error("series years out of order: {prev} followed by {next}")]
    UnorderedSeries { prev: i32, next: i32 },

    /// A series may not contain the same year twice.
    #[error("duplicate year in series: {0}")]
    DuplicateYear(i32),

    /// A value domain must be a non-empty closed interval.
    #[error("empty value domain: [{min}, {max}]")]
    EmptyDomain { min: f64, max: f64 },
}

/// Type alias for Result with ModelError.
pub type Result<T> = std::result::Result<T, ModelError>;
