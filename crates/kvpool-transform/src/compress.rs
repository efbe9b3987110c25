use crate::error::TransformResult;
use crate::traits::Transform;

/// Default zstd compression level.
const DEFAULT_LEVEL: i32 = 3;

/// zstd compression transform.
///
/// `encode` compresses, `decode` decompresses. Decoding bytes that are not
/// a zstd frame fails with [`TransformError::Io`](crate::TransformError::Io).
pub struct ZstdCompress {
    level: i32,
}

impl ZstdCompress {
    /// Compress at the given zstd level.
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Default for ZstdCompress {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

impl Transform for ZstdCompress {
    fn encode(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        Ok(zstd::encode_all(data, self.level)?)
    }

    fn decode(&self, data: &[u8]) -> TransformResult<Vec<u8>> {
        Ok(zstd::decode_all(data)?)
    }
}
