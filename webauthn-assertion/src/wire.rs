//! Wire serializer — models to and from JSON records.
//!
//! Every byte field is a base64url (unpadded) string. Required keys are
//! always emitted in canonical order. `userHandle` is emitted only when
//! the model holds one; an absent handle leaves no key at all, while an
//! empty handle is emitted as `""`.
//!
//! On input, keys are case-sensitive and unknown keys are ignored. A
//! `userHandle` of `null` reads as absent, matching browsers that
//! serialize a missing handle that way.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::assertion::{AuthenticatorAssertionResponse, ClientAssertionResponse};
use crate::constants::{
    AUTHENTICATOR_DATA_KEY, CLIENT_DATA_JSON_KEY, CREDENTIAL_ID_KEY, SIGNATURE_KEY,
    USER_HANDLE_KEY,
};
use crate::encoding::{from_base64url, to_base64url};
use crate::errors::SerializationError;
use crate::response::AuthenticatorResponse;

/// Key-ordered wire record. Insertion order is preserved.
pub type WireRecord = Map<String, Value>;

/// Conversion between a model and its wire record.
pub trait WireFormat: Sized {
    /// Emit the wire record.
    fn to_wire(&self) -> WireRecord;

    /// Parse and validate a wire record.
    ///
    /// # Errors
    /// Returns `SerializationError` for missing or mistyped keys, invalid
    /// base64url, or values the model rejects.
    fn from_wire(record: &WireRecord) -> Result<Self, SerializationError>;

    /// Emit compact JSON text.
    fn to_json(&self) -> String {
        Value::Object(self.to_wire()).to_string()
    }

    /// Parse JSON text holding a single record.
    ///
    /// # Errors
    /// Returns `SerializationError::Json` for unparsable text,
    /// `SerializationError::NotAnObject` for any JSON that is not an
    /// object, otherwise as [`WireFormat::from_wire`].
    fn from_json(text: &str) -> Result<Self, SerializationError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(record) => Self::from_wire(&record),
            _ => Err(SerializationError::NotAnObject),
        }
    }
}

/// Emit the wire record for an assertion response.
pub fn to_wire(response: &AuthenticatorAssertionResponse) -> WireRecord {
    let mut record = WireRecord::new();
    write_assertion(&mut record, response);
    record
}

/// Parse and validate an assertion response record.
///
/// # Errors
/// - `SerializationError::MissingField` if a required key is absent.
/// - `SerializationError::InvalidFieldType` if a byte field is not a string.
/// - `SerializationError::Decode` if a value is not valid base64url.
/// - `SerializationError::Validation` if a decoded required field is empty.
pub fn from_wire(record: &WireRecord) -> Result<AuthenticatorAssertionResponse, SerializationError> {
    read_assertion(record).inspect_err(|err| {
        tracing::debug!(
            code = err.code(),
            field = err.field().unwrap_or_default(),
            "rejected assertion record"
        );
    })
}

fn write_assertion(record: &mut WireRecord, response: &AuthenticatorAssertionResponse) {
    write_bytes(record, AUTHENTICATOR_DATA_KEY, response.authenticator_data());
    write_bytes(record, SIGNATURE_KEY, response.signature());
    write_bytes(record, CREDENTIAL_ID_KEY, response.credential_id());
    if let Some(user_handle) = response.user_handle() {
        write_bytes(record, USER_HANDLE_KEY, user_handle);
    }
    tracing::trace!(
        authenticator_data_len = response.authenticator_data().len(),
        signature_len = response.signature().len(),
        credential_id_len = response.credential_id().len(),
        user_handle = response.user_handle().is_some(),
        "encoded assertion record"
    );
}

fn read_assertion(record: &WireRecord) -> Result<AuthenticatorAssertionResponse, SerializationError> {
    let authenticator_data = required_bytes(record, AUTHENTICATOR_DATA_KEY)?;
    let signature = required_bytes(record, SIGNATURE_KEY)?;
    let credential_id = required_bytes(record, CREDENTIAL_ID_KEY)?;
    let user_handle = optional_bytes(record, USER_HANDLE_KEY)?;
    let response =
        AuthenticatorAssertionResponse::new(authenticator_data, signature, credential_id, user_handle)?;
    tracing::trace!(
        user_handle = response.user_handle().is_some(),
        "decoded assertion record"
    );
    Ok(response)
}

fn write_bytes(record: &mut WireRecord, key: &str, bytes: &[u8]) {
    record.insert(key.to_owned(), Value::String(to_base64url(bytes)));
}

fn required_bytes(record: &WireRecord, field: &'static str) -> Result<Vec<u8>, SerializationError> {
    match record.get(field) {
        Some(value) => decode_field(value, field),
        None => Err(SerializationError::MissingField(field)),
    }
}

fn optional_bytes(
    record: &WireRecord,
    field: &'static str,
) -> Result<Option<Vec<u8>>, SerializationError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode_field(value, field).map(Some),
    }
}

fn decode_field(value: &Value, field: &'static str) -> Result<Vec<u8>, SerializationError> {
    let text = value
        .as_str()
        .ok_or(SerializationError::InvalidFieldType { field })?;
    from_base64url(text).map_err(|source| SerializationError::Decode { field, source })
}

impl WireFormat for AuthenticatorAssertionResponse {
    fn to_wire(&self) -> WireRecord {
        to_wire(self)
    }

    fn from_wire(record: &WireRecord) -> Result<Self, SerializationError> {
        from_wire(record)
    }
}

impl WireFormat for AuthenticatorResponse {
    fn to_wire(&self) -> WireRecord {
        let mut record = WireRecord::new();
        write_bytes(&mut record, CLIENT_DATA_JSON_KEY, self.client_data_json());
        record
    }

    fn from_wire(record: &WireRecord) -> Result<Self, SerializationError> {
        let client_data_json = required_bytes(record, CLIENT_DATA_JSON_KEY)?;
        Ok(Self::new(client_data_json)?)
    }
}

/// Flat record: `clientDataJSON` followed by the assertion keys.
impl WireFormat for ClientAssertionResponse {
    fn to_wire(&self) -> WireRecord {
        let mut record = self.client().to_wire();
        write_assertion(&mut record, self.assertion());
        record
    }

    fn from_wire(record: &WireRecord) -> Result<Self, SerializationError> {
        let client = AuthenticatorResponse::from_wire(record).inspect_err(|err| {
            tracing::debug!(
                code = err.code(),
                field = err.field().unwrap_or_default(),
                "rejected client data"
            );
        })?;
        let assertion = from_wire(record)?;
        Ok(Self::new(client, assertion))
    }
}

// ── serde integration ───────────────────────────────────────────────

macro_rules! impl_serde_via_wire {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.to_wire().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let record = WireRecord::deserialize(deserializer)?;
                <$ty as WireFormat>::from_wire(&record).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_serde_via_wire!(AuthenticatorAssertionResponse);
impl_serde_via_wire!(AuthenticatorResponse);
impl_serde_via_wire!(ClientAssertionResponse);
