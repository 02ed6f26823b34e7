//! Value codecs
//!
//! Backends that store bytes (the remote store) encode values through a
//! [`ValueCodec`] chosen at construction instead of inspecting values at
//! runtime.

use crate::error::{Error, Result};
use crate::ports::CacheValue;

/// Encodes cache values to bytes and back
pub trait ValueCodec: Send + Sync + std::fmt::Debug {
    /// Encode a value
    fn encode(&self, value: &CacheValue) -> Result<Vec<u8>>;

    /// Decode bytes produced by [`encode`](Self::encode)
    fn decode(&self, bytes: &[u8]) -> Result<CacheValue>;

    /// Codec identifier
    fn codec_name(&self) -> &str;
}

/// JSON codec (the default)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl ValueCodec for JsonCodec {
    fn encode(&self, value: &CacheValue) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| Error::serialization("Failed to encode value", e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<CacheValue> {
        serde_json::from_slice(bytes)
            .map_err(|e| Error::serialization("Failed to decode cached value", e))
    }

    fn codec_name(&self) -> &str {
        "json"
    }
}
