//! Conformance: Base64url codec against golden vectors.

use serde::Deserialize;
use std::path::PathBuf;

use webauthn_assertion::encoding::{from_base64url, from_hex, to_base64url};

// ── Vector schemas ──────────────────────────────────────────────

#[derive(Deserialize)]
struct VectorFile {
    codec_vectors: Vec<CodecVector>,
    codec_rejections: Vec<CodecRejection>,
}

#[derive(Deserialize)]
struct CodecVector {
    id: String,
    bytes_hex: String,
    base64url: String,
}

#[derive(Deserialize)]
struct CodecRejection {
    id: String,
    input: String,
    expected_code: String,
}

// ── Helpers ─────────────────────────────────────────────────────

pub(crate) fn vectors_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("vectors")
        .join("assertion-response.vectors.json")
}

fn load() -> VectorFile {
    let path = vectors_path();
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).expect("codec vectors parse failed")
}

// ── Conformance ─────────────────────────────────────────────────

/// Every golden byte sequence encodes to its committed text.
#[test]
fn conformance_codec_encode_all_vectors() {
    let file = load();
    assert!(!file.codec_vectors.is_empty());
    for v in &file.codec_vectors {
        let bytes = from_hex(&v.bytes_hex).unwrap();
        assert_eq!(to_base64url(&bytes), v.base64url, "encode drift: {}", v.id);
    }
}

/// Every committed text decodes to its golden byte sequence.
#[test]
fn conformance_codec_decode_all_vectors() {
    for v in &load().codec_vectors {
        let expected = from_hex(&v.bytes_hex).unwrap();
        assert_eq!(
            from_base64url(&v.base64url).unwrap(),
            expected,
            "decode drift: {}",
            v.id
        );
    }
}

/// Every rejection vector fails with the committed error code.
#[test]
fn conformance_codec_rejections() {
    let file = load();
    assert!(!file.codec_rejections.is_empty());
    for v in &file.codec_rejections {
        let err = from_base64url(&v.input)
            .err()
            .unwrap_or_else(|| panic!("accepted rejection vector: {}", v.id));
        assert_eq!(err.code(), v.expected_code, "wrong code for {}", v.id);
    }
}

/// Scenario: encode([1,2,3]) == "AQID" and back.
#[test]
fn conformance_codec_known_scenario() {
    assert_eq!(to_base64url(&[1, 2, 3]), "AQID");
    assert_eq!(from_base64url("AQID").unwrap(), vec![1, 2, 3]);
}

/// Scenario: trailing padding is never accepted.
#[test]
fn conformance_codec_padded_scenario() {
    let err = from_base64url("AQID=").unwrap_err();
    assert_eq!(err.code(), "INVALID_CHARACTER");
}
