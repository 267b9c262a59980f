//! Conformance: codec laws over arbitrary input.

use proptest::prelude::*;

use webauthn_assertion::encoding::{from_base64url, to_base64url};

proptest! {
    /// decode(encode(b)) == b for every byte sequence.
    #[test]
    fn conformance_round_trip_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = to_base64url(&bytes);
        prop_assert_eq!(from_base64url(&encoded).unwrap(), bytes);
    }

    /// Encoder output never contains padding or the standard alphabet.
    #[test]
    fn conformance_encoding_is_url_safe(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = to_base64url(&bytes);
        prop_assert!(!encoded.contains(['=', '+', '/']));
        prop_assert_ne!(encoded.len() % 4, 1);
    }

    /// encode(decode(t)) == t for every text that decodes.
    #[test]
    fn conformance_round_trip_text(text in "[A-Za-z0-9_-]{0,64}") {
        if let Ok(bytes) = from_base64url(&text) {
            prop_assert_eq!(to_base64url(&bytes), text);
        }
    }

    /// Any text containing '=' is rejected.
    #[test]
    fn conformance_padding_rejected(
        prefix in "[A-Za-z0-9_-]{0,16}",
        suffix in "[A-Za-z0-9_=-]{0,4}",
    ) {
        let text = format!("{prefix}={suffix}");
        prop_assert!(from_base64url(&text).is_err());
    }

    /// Any text containing '+' or '/' is rejected.
    #[test]
    fn conformance_standard_alphabet_rejected(
        prefix in "[A-Za-z0-9_-]{0,16}",
        symbol in prop_oneof![Just('+'), Just('/')],
        suffix in "[A-Za-z0-9_-]{0,16}",
    ) {
        let text = format!("{prefix}{symbol}{suffix}");
        prop_assert!(from_base64url(&text).is_err());
    }
}
