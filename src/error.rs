use thiserror::Error;

pub type Result<T> = std::result::Result<T, DurationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Input matched none of the accepted duration shapes
    #[error("invalid duration format: \"{input}\"")]
    InvalidFormat { input: String },
}

impl DurationError {
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}
