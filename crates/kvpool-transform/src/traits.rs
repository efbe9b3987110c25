use crate::error::TransformResult;

/// A reversible byte-sequence mapping.
///
/// `encode` and `decode` form an inverse pair: for any input,
/// `decode(encode(x)) == x`. Both steps are pure functions of their input
/// bytes; a transform carries configuration but no mutable state.
pub trait Transform: Send + Sync {
    /// Forward mapping.
    fn encode(&self, data: &[u8]) -> TransformResult<Vec<u8>>;

    /// Inverse mapping.
    fn decode(&self, data: &[u8]) -> TransformResult<Vec<u8>>;
}
