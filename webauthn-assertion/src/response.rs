//! Base response fragment — the client data every authenticator response
//! carries.
//!
//! Only non-emptiness is enforced at construction. The bytes are kept
//! exactly as received because relying parties hash them verbatim;
//! [`AuthenticatorResponse::client_data`] parses a read-only view on
//! demand.

use serde::{Deserialize, Serialize};

use crate::constants::CLIENT_DATA_JSON_KEY;
use crate::encoding::from_base64url;
use crate::errors::{DecodeError, SerializationError, ValidationError};

/// Shared fragment of every authenticator response: the raw
/// `clientDataJSON` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthenticatorResponse {
    client_data_json: Vec<u8>,
}

impl AuthenticatorResponse {
    /// Wrap raw client data bytes.
    ///
    /// # Errors
    /// Returns `ValidationError` if `client_data_json` is empty.
    pub fn new(client_data_json: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        let client_data_json = client_data_json.into();
        if client_data_json.is_empty() {
            return Err(ValidationError {
                field: CLIENT_DATA_JSON_KEY,
            });
        }
        Ok(Self { client_data_json })
    }

    /// The raw client data bytes, exactly as received.
    pub fn client_data_json(&self) -> &[u8] {
        &self.client_data_json
    }

    /// Parse the client data as UTF-8 JSON.
    ///
    /// # Errors
    /// Returns `SerializationError::Json` if the bytes are not a JSON
    /// object with the members of [`CollectedClientData`].
    pub fn client_data(&self) -> Result<CollectedClientData, SerializationError> {
        Ok(serde_json::from_slice(&self.client_data_json)?)
    }
}

/// Parsed view of `clientDataJSON` (WebAuthn `CollectedClientData`).
///
/// Unknown members, such as `tokenBinding` or vendor extensions, are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedClientData {
    /// `webauthn.get` for assertions, `webauthn.create` for registrations.
    #[serde(rename = "type")]
    pub ceremony_type: String,
    /// The relying party's challenge, base64url encoded.
    pub challenge: String,
    pub origin: String,
    #[serde(rename = "crossOrigin", default, skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<bool>,
    #[serde(rename = "topOrigin", default, skip_serializing_if = "Option::is_none")]
    pub top_origin: Option<String>,
}

impl CollectedClientData {
    /// Decode the challenge to raw bytes. Comparing it against an issued
    /// challenge is the caller's job.
    ///
    /// # Errors
    /// Returns `DecodeError` if the challenge is not canonical base64url.
    pub fn challenge_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        from_base64url(&self.challenge)
    }
}
