use thiserror::Error;

/// Errors from transform application.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Input is not valid hex during de-armoring.
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Compression or decompression failure.
    #[error("codec error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;
