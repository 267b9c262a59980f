//! Golden vector generator.
//!
//! Produces `vectors/assertion-response.vectors.json` deterministically
//! from fixed fixtures run through the production codec and serializer.
//! `tests/vector_equivalence.rs` regenerates the file and compares it
//! against the committed copy, so any behavior drift shows up as a diff.

use serde_json::{json, Value};

use crate::assertion::AuthenticatorAssertionResponse;
use crate::encoding::{from_base64url, to_base64url, to_hex};
use crate::errors::ValidationError;
use crate::wire::{from_wire, to_wire};

struct AssertionFixture {
    id: &'static str,
    authenticator_data: Vec<u8>,
    signature: Vec<u8>,
    credential_id: Vec<u8>,
    user_handle: Option<Vec<u8>>,
}

fn codec_fixtures() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("empty", Vec::new()),
        ("single-zero", vec![0x00]),
        ("two-bytes", vec![0xff, 0xfe]),
        ("three-bytes", vec![0x01, 0x02, 0x03]),
        ("url-safe-alphabet", vec![0xfb, 0xff, 0xbf]),
        ("utf8-text", b"Hello, WebAuthn!".to_vec()),
        ("all-ones-32", vec![0xff; 32]),
    ]
}

fn rejection_fixtures() -> Vec<(&'static str, &'static str)> {
    vec![
        ("padding", "AQID="),
        ("double-padding", "AA=="),
        ("standard-plus", "AQ+D"),
        ("standard-slash", "AQ/D"),
        ("whitespace", "AQ ID"),
        ("single-char", "A"),
        ("length-remainder-one", "AQIDB"),
        ("non-canonical-two", "AB"),
        ("non-canonical-three", "AAB"),
    ]
}

fn assertion_fixtures() -> Vec<AssertionFixture> {
    // rpIdHash || flags (UP | UV) || signCount = 1
    let mut authenticator_data: Vec<u8> = (0u8..32).collect();
    authenticator_data.extend_from_slice(&[0x05, 0x00, 0x00, 0x00, 0x01]);

    vec![
        AssertionFixture {
            id: "without-user-handle",
            authenticator_data: vec![1, 2, 3],
            signature: vec![4, 5, 6],
            credential_id: vec![7, 8, 9],
            user_handle: None,
        },
        AssertionFixture {
            id: "empty-user-handle",
            authenticator_data: vec![1, 2, 3],
            signature: vec![4, 5, 6],
            credential_id: vec![7, 8, 9],
            user_handle: Some(Vec::new()),
        },
        AssertionFixture {
            id: "with-user-handle",
            authenticator_data: vec![1, 2, 3],
            signature: vec![4, 5, 6],
            credential_id: vec![7, 8, 9],
            user_handle: Some(b"user-1234".to_vec()),
        },
        AssertionFixture {
            id: "realistic-sizes",
            authenticator_data,
            signature: (0u8..64).map(|i| 0xa0 ^ i).collect(),
            credential_id: (0u8..16).map(|i| i * 17).collect(),
            user_handle: Some((0u8..8).map(|i| 0xf8 | i).collect()),
        },
    ]
}

fn rejected_record_fixtures() -> Vec<(&'static str, Value)> {
    vec![
        (
            "missing-signature",
            json!({"authenticatorData": "AQID", "credentialId": "BwgJ"}),
        ),
        (
            "missing-credential-id",
            json!({"authenticatorData": "AQID", "signature": "BAUG"}),
        ),
        (
            "empty-credential-id",
            json!({"authenticatorData": "AQID", "signature": "BAUG", "credentialId": ""}),
        ),
        (
            "padded-authenticator-data",
            json!({"authenticatorData": "AQID=", "signature": "BAUG", "credentialId": "BwgJ"}),
        ),
        (
            "numeric-signature",
            json!({"authenticatorData": "AQID", "signature": 42, "credentialId": "BwgJ"}),
        ),
        (
            "null-signature",
            json!({"authenticatorData": "AQID", "signature": null, "credentialId": "BwgJ"}),
        ),
        (
            "impossible-length-user-handle",
            json!({
                "authenticatorData": "AQID",
                "signature": "BAUG",
                "credentialId": "BwgJ",
                "userHandle": "AQIDB"
            }),
        ),
    ]
}

/// Generate the assertion response vector file as pretty JSON.
///
/// # Errors
/// Returns `ValidationError` only if a fixture is itself invalid.
pub fn generate_assertion_vectors_json() -> Result<String, ValidationError> {
    let codec_vectors: Vec<Value> = codec_fixtures()
        .into_iter()
        .map(|(id, bytes)| {
            json!({
                "id": id,
                "bytes_hex": to_hex(&bytes),
                "base64url": to_base64url(&bytes),
            })
        })
        .collect();

    let codec_rejections: Vec<Value> = rejection_fixtures()
        .into_iter()
        .map(|(id, input)| {
            json!({
                "id": id,
                "input": input,
                "expected_code": from_base64url(input).err().map(|e| e.code()),
            })
        })
        .collect();

    let mut assertion_vectors = Vec::new();
    for fixture in assertion_fixtures() {
        let response = AuthenticatorAssertionResponse::new(
            fixture.authenticator_data.clone(),
            fixture.signature.clone(),
            fixture.credential_id.clone(),
            fixture.user_handle.clone(),
        )?;
        assertion_vectors.push(json!({
            "id": fixture.id,
            "authenticator_data_hex": to_hex(&fixture.authenticator_data),
            "signature_hex": to_hex(&fixture.signature),
            "credential_id_hex": to_hex(&fixture.credential_id),
            "user_handle_hex": fixture.user_handle.as_deref().map(to_hex),
            "record": Value::Object(to_wire(&response)),
        }));
    }

    let rejected_records: Vec<Value> = rejected_record_fixtures()
        .into_iter()
        .map(|(id, record)| {
            let expected_code = match &record {
                Value::Object(map) => from_wire(map).err().map(|e| e.code()),
                _ => None,
            };
            json!({
                "id": id,
                "record": record,
                "expected_code": expected_code,
            })
        })
        .collect();

    let file = json!({
        "_WARNING": "Generated by webauthn-assertion (cargo test --features vectors). Do not edit by hand.",
        "description": "Base64url codec and assertion response wire record vectors",
        "codec_vectors": codec_vectors,
        "codec_rejections": codec_rejections,
        "assertion_vectors": assertion_vectors,
        "rejected_records": rejected_records,
    });
    Ok(format!("{file:#}\n"))
}
