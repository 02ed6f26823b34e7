//! Value Codec Tests

use serde_json::json;
use tiercache_domain::{Error, JsonCodec, ValueCodec};

#[test]
fn test_json_codec_preserves_structure() {
    let codec = JsonCodec;
    let value = json!({"name": "Diego", "tags": ["a", "b"], "score": 1.5, "n": null});

    let bytes = codec.encode(&value).unwrap();
    assert_eq!(codec.decode(&bytes).unwrap(), value);
    assert_eq!(codec.codec_name(), "json");
}

#[test]
fn test_json_codec_rejects_garbage() {
    let err = JsonCodec.decode(b"\xff\x00not json").unwrap_err();
    assert!(matches!(err, Error::Serialization { .. }));
}
