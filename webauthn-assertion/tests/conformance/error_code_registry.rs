//! Conformance: Error Code Registry
//!
//! Asserts the canonical 8-code registry, its order, and that every
//! code a caller can observe is registered.

use webauthn_assertion::errors::{is_valid_error_code, ERROR_CODES};

/// Exact list and order.
#[test]
fn conformance_error_registry_exact_list() {
    let expected: [&str; 8] = [
        // Codec class (4)
        "INVALID_CHARACTER",
        "INVALID_LENGTH",
        "NON_CANONICAL_ENCODING",
        "INVALID_HEX",
        // Record class (4)
        "EMPTY_FIELD",
        "MISSING_FIELD",
        "INVALID_FIELD_TYPE",
        "MALFORMED_RECORD",
    ];

    assert_eq!(ERROR_CODES, expected, "ERROR_CODES drift");
}

/// All codes must be unique.
#[test]
fn conformance_error_registry_unique() {
    let mut seen = std::collections::HashSet::new();
    for code in &ERROR_CODES {
        assert!(seen.insert(code), "duplicate error code: {code}");
    }
}

/// Every expected_code in the committed vectors is a registered code.
#[test]
fn conformance_vector_codes_registered() {
    let path = super::codec_vectors::vectors_path();
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    let file: serde_json::Value = serde_json::from_str(&data).expect("vectors parse failed");

    for key in ["codec_rejections", "rejected_records"] {
        for v in file[key].as_array().expect("vector array") {
            let code = v["expected_code"].as_str().expect("expected_code string");
            assert!(is_valid_error_code(code), "unregistered code {code} in {key}");
        }
    }
}
