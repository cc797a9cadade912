use thiserror::Error;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at point {point}, dimension {dim}")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        point: usize,
        /// Offending dimension.
        dim: usize,
    },

    /// Points have no coordinates at all.
    #[error("points must have at least one dimension")]
    ZeroDimensional,
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
