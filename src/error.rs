use thiserror::Error;

/// Why a weight vector was rejected before any table was built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("weights slice is empty")]
    Empty,
    #[error("weights contain a negative value at index {index}: {value}")]
    Negative { index: usize, value: f64 },
    #[error("weights contain NaN at index {index}")]
    NotANumber { index: usize },
    #[error("weights contain an infinite value at index {index}")]
    Infinite { index: usize },
    #[error("sum of weights is zero")]
    ZeroSum,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AliasError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("index {index} out of range for table of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A bucket taken from the high worklist had height below 1.
    /// This is a defect in table construction, never a caller error.
    #[error("internal invariant violated: bucket {index} on high worklist has height {height}")]
    InternalInvariantViolation { index: usize, height: f64 },
}

impl AliasError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AliasError::InvalidInput(_))
    }
}
