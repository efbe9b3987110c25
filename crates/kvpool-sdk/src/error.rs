use thiserror::Error;

/// Errors surfaced by store connections.
///
/// Nothing is caught or retried at this layer; backend and transform
/// failures propagate unchanged in kind.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("store error: {0}")]
    Store(#[from] kvpool_store::StoreError),

    #[error("transform error: {0}")]
    Transform(#[from] kvpool_transform::TransformError),
}

pub type SdkResult<T> = Result<T, SdkError>;
