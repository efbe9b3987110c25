use crate::error::TransformResult;
use crate::traits::Transform;

/// Hex armor transform: encodes bytes as lowercase hex text.
///
/// Doubles the stored size; useful when values must pass through channels
/// that cannot carry arbitrary binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct HexArmor;

impl HexArmor {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for HexArmor {
    fn encode(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        Ok(hex::encode(data).into_bytes())
    }

    fn decode(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        Ok(hex::decode(data)?)
    }
}
