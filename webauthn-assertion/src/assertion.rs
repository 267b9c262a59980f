//! Assertion response model.
//!
//! [`AuthenticatorAssertionResponse`] holds what the authenticator returns
//! from `authenticatorGetAssertion`. [`ClientAssertionResponse`] pairs it
//! with the [`AuthenticatorResponse`] base fragment, which is what the
//! client hands to the relying party.
//!
//! Both are immutable values. Construction validates; accessors borrow.

use crate::constants::{AUTHENTICATOR_DATA_KEY, CREDENTIAL_ID_KEY, SIGNATURE_KEY};
use crate::errors::ValidationError;
use crate::response::AuthenticatorResponse;

/// An authenticator's signed proof of credential possession.
///
/// `user_handle` distinguishes "not returned" (`None`) from "returned
/// empty" (`Some(vec![])`); the two serialize differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthenticatorAssertionResponse {
    authenticator_data: Vec<u8>,
    signature: Vec<u8>,
    credential_id: Vec<u8>,
    user_handle: Option<Vec<u8>>,
}

impl AuthenticatorAssertionResponse {
    /// Build a validated assertion response from raw authenticator output.
    ///
    /// # Errors
    /// Returns `ValidationError` naming the first empty required field,
    /// checked in wire order: `authenticatorData`, `signature`,
    /// `credentialId`.
    pub fn new(
        authenticator_data: impl Into<Vec<u8>>,
        signature: impl Into<Vec<u8>>,
        credential_id: impl Into<Vec<u8>>,
        user_handle: Option<Vec<u8>>,
    ) -> Result<Self, ValidationError> {
        let authenticator_data = required(authenticator_data.into(), AUTHENTICATOR_DATA_KEY)?;
        let signature = required(signature.into(), SIGNATURE_KEY)?;
        let credential_id = required(credential_id.into(), CREDENTIAL_ID_KEY)?;
        Ok(Self {
            authenticator_data,
            signature,
            credential_id,
            user_handle,
        })
    }

    pub fn authenticator_data(&self) -> &[u8] {
        &self.authenticator_data
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn credential_id(&self) -> &[u8] {
        &self.credential_id
    }

    /// The user handle, or `None` if the authenticator did not return one.
    pub fn user_handle(&self) -> Option<&[u8]> {
        self.user_handle.as_deref()
    }

    /// A copy of this response with the user handle replaced.
    ///
    /// Required fields are already validated, so this cannot fail.
    #[must_use]
    pub fn with_user_handle(self, user_handle: Option<Vec<u8>>) -> Self {
        Self {
            user_handle,
            ..self
        }
    }
}

fn required(value: Vec<u8>, field: &'static str) -> Result<Vec<u8>, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError { field });
    }
    Ok(value)
}

/// Complete assertion response as delivered to the relying party:
/// client data plus the authenticator's assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientAssertionResponse {
    client: AuthenticatorResponse,
    assertion: AuthenticatorAssertionResponse,
}

impl ClientAssertionResponse {
    /// Compose two already-validated parts.
    pub fn new(client: AuthenticatorResponse, assertion: AuthenticatorAssertionResponse) -> Self {
        Self { client, assertion }
    }

    pub fn client(&self) -> &AuthenticatorResponse {
        &self.client
    }

    pub fn assertion(&self) -> &AuthenticatorAssertionResponse {
        &self.assertion
    }

    /// Split back into parts.
    pub fn into_parts(self) -> (AuthenticatorResponse, AuthenticatorAssertionResponse) {
        (self.client, self.assertion)
    }
}
