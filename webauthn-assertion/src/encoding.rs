//! Encoding utilities — base64url (unpadded) and hex.
//!
//! Every byte-valued wire field goes through [`to_base64url`] and
//! [`from_base64url`]. The encoder is the `base64` crate's
//! `URL_SAFE_NO_PAD` engine; the decoder runs the alphabet and length
//! checks itself first so that failures are reported in a fixed order
//! with the offending character and offset.
//!
//! ## Laws
//! - `from_base64url(to_base64url(b)) == b` for every byte sequence.
//! - `to_base64url(from_base64url(t)?) == t` for every text that decodes.
//!   The engine rejects non-zero trailing bits, so each byte sequence has
//!   exactly one accepted spelling.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::errors::DecodeError;

/// Encode bytes to base64url without padding (RFC 4648 §5).
///
/// Total over all inputs; the empty slice encodes to `""`.
pub fn to_base64url(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode unpadded base64url text to bytes.
///
/// # Errors
/// - `DecodeError::InvalidCharacter` for the first character outside
///   `[A-Za-z0-9-_]`. Padding (`=`) and the standard-alphabet `+` and `/`
///   are rejected here.
/// - `DecodeError::InvalidLength` when `len % 4 == 1`.
/// - `DecodeError::NonCanonicalTrailingBits` when the last symbol
///   carries bits that do not belong to any output byte.
pub fn from_base64url(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    if let Some((offset, character)) = encoded.char_indices().find(|(_, c)| !is_base64url_char(*c))
    {
        return Err(DecodeError::InvalidCharacter { character, offset });
    }
    if encoded.len() % 4 == 1 {
        return Err(DecodeError::InvalidLength {
            length: encoded.len(),
        });
    }
    URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| map_engine_error(e, encoded.len()))
}

/// Returns `true` if `c` belongs to the base64url alphabet.
pub fn is_base64url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn map_engine_error(err: base64::DecodeError, length: usize) -> DecodeError {
    match err {
        base64::DecodeError::InvalidLastSymbol(offset, _) => {
            DecodeError::NonCanonicalTrailingBits { offset }
        }
        base64::DecodeError::InvalidByte(offset, byte) => DecodeError::InvalidCharacter {
            character: char::from(byte),
            offset,
        },
        _ => DecodeError::InvalidLength { length },
    }
}

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes. Accepts either case.
///
/// # Errors
/// Returns `DecodeError::InvalidHex` on odd length or non-hex digits.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    if encoded.len() % 2 != 0 {
        return Err(DecodeError::InvalidHex("odd-length hex string".into()));
    }
    if let Some(c) = encoded.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidHex(format!("invalid hex digit {c:?}")));
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&encoded[i..i + 2], 16)
                .map_err(|e| DecodeError::InvalidHex(e.to_string()))
        })
        .collect()
}
