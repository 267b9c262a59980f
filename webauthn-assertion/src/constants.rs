//! Wire constants — canonical key names and codec alphabet.
//!
//! Key names follow the WebAuthn Level 3 JSON serialization of
//! `AuthenticatorAssertionResponse`. They are case-sensitive.

/// Wire key for the base fragment's client data blob.
pub const CLIENT_DATA_JSON_KEY: &str = "clientDataJSON";

/// Wire key for the authenticator data blob.
pub const AUTHENTICATOR_DATA_KEY: &str = "authenticatorData";

/// Wire key for the assertion signature.
pub const SIGNATURE_KEY: &str = "signature";

/// Wire key for the credential identifier.
pub const CREDENTIAL_ID_KEY: &str = "credentialId";

/// Wire key for the optional user handle. Omitted when absent.
pub const USER_HANDLE_KEY: &str = "userHandle";

/// Assertion keys that must be present in every record, in emit order.
pub const REQUIRED_ASSERTION_KEYS: [&str; 3] =
    [AUTHENTICATOR_DATA_KEY, SIGNATURE_KEY, CREDENTIAL_ID_KEY];

/// Base64URL alphabet (RFC 4648 §5). Padding is never emitted or accepted.
pub const BASE64URL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// `type` member expected in client data for an assertion ceremony.
pub const CLIENT_DATA_TYPE_GET: &str = "webauthn.get";
