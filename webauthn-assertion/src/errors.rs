//! Error types for webauthn-assertion.
//!
//! Three concerns, three types: the codec raises [`DecodeError`], model
//! constructors raise [`ValidationError`], and the wire layer raises
//! [`SerializationError`], which carries the other two unchanged as its
//! source.
//!
//! Every error maps to one stable string code from [`ERROR_CODES`] for
//! diagnostics that must survive across process or language boundaries.

/// Malformed base64url (or hex) text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A character outside `[A-Za-z0-9-_]`, including `=`, `+` and `/`.
    #[error("invalid base64url character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    /// `length % 4 == 1`: no padding reconstruction exists.
    #[error("invalid base64url length {length}")]
    InvalidLength { length: usize },

    /// The final symbol carries non-zero unused bits.
    #[error("non-canonical base64url: trailing bits set at offset {offset}")]
    NonCanonicalTrailingBits { offset: usize },

    /// Malformed hex text.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl DecodeError {
    /// Stable error code from [`ERROR_CODES`].
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::InvalidCharacter { .. } => "INVALID_CHARACTER",
            DecodeError::InvalidLength { .. } => "INVALID_LENGTH",
            DecodeError::NonCanonicalTrailingBits { .. } => "NON_CANONICAL_ENCODING",
            DecodeError::InvalidHex(_) => "INVALID_HEX",
        }
    }
}

/// A required byte field is empty.
///
/// `field` is the wire key name, so the message reads the same whether
/// the value came from an authenticator integration or a parsed record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must not be empty")]
pub struct ValidationError {
    pub field: &'static str,
}

impl ValidationError {
    /// Stable error code from [`ERROR_CODES`].
    pub fn code(&self) -> &'static str {
        "EMPTY_FIELD"
    }
}

/// Failure mapping a wire record onto a model.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// A required key is absent from the record.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A byte field is present but is not a JSON string.
    #[error("field `{field}` must be a base64url string")]
    InvalidFieldType { field: &'static str },

    /// A byte field is not valid base64url.
    #[error("field `{field}` is not valid base64url")]
    Decode {
        field: &'static str,
        #[source]
        source: DecodeError,
    },

    /// Decoded values violate model validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The input text is not JSON.
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),

    /// The input JSON is valid but not an object.
    #[error("malformed record: expected a JSON object")]
    NotAnObject,
}

impl SerializationError {
    /// Stable error code from [`ERROR_CODES`]. Wrapped errors report the
    /// code of the inner error.
    pub fn code(&self) -> &'static str {
        match self {
            SerializationError::MissingField(_) => "MISSING_FIELD",
            SerializationError::InvalidFieldType { .. } => "INVALID_FIELD_TYPE",
            SerializationError::Decode { source, .. } => source.code(),
            SerializationError::Validation(err) => err.code(),
            SerializationError::Json(_) | SerializationError::NotAnObject => "MALFORMED_RECORD",
        }
    }

    /// The wire key the failure is attributed to, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SerializationError::MissingField(field)
            | SerializationError::InvalidFieldType { field }
            | SerializationError::Decode { field, .. } => Some(*field),
            SerializationError::Validation(err) => Some(err.field),
            SerializationError::Json(_) | SerializationError::NotAnObject => None,
        }
    }
}

// ── Error Code Registry ─────────────────────────────────────────────

/// Canonical error code registry — 8 codes.
///
/// Codec class first (4), then record class (4). Order is part of the
/// contract and is pinned by `tests/conformance/error_code_registry.rs`.
pub const ERROR_CODES: [&str; 8] = [
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

/// Returns `true` if `code` is in [`ERROR_CODES`]. Case-sensitive.
pub fn is_valid_error_code(code: &str) -> bool {
    ERROR_CODES.contains(&code)
}
