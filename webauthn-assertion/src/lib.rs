//! WebAuthn Assertion — data contract and wire codec for an
//! authenticator's assertion response.
//!
//! This crate owns the canonical representation of the structure an
//! authenticator returns during a login ceremony, and the base64url
//! (unpadded) codec every byte-valued field travels through. Ceremony
//! orchestration, signature verification and challenge lifecycle belong
//! to callers.
//!
//! # Module Map
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constants`] | Wire key names, base64url alphabet |
//! | [`errors`] | `DecodeError`, `ValidationError`, `SerializationError`, error codes |
//! | [`encoding`] | base64url and hex codecs |
//! | [`response`] | `AuthenticatorResponse` base fragment, `CollectedClientData` |
//! | [`assertion`] | `AuthenticatorAssertionResponse`, `ClientAssertionResponse` |
//! | [`wire`] | `WireFormat`, `to_wire` / `from_wire`, serde integration |
//! | `vectors` | Golden vector generator (test-only, feature `vectors`) |
//!
//! # Example
//!
//! ```
//! use webauthn_assertion::{AuthenticatorAssertionResponse, WireFormat};
//!
//! let response =
//!     AuthenticatorAssertionResponse::new(vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], None)?;
//! assert_eq!(
//!     response.to_json(),
//!     r#"{"authenticatorData":"AQID","signature":"BAUG","credentialId":"BwgJ"}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Vectors
//!
//! Golden vectors live in `vectors/` at the workspace root and are
//! checked by `tests/conformance`. Regenerating them from Rust requires
//! the `vectors` feature: `cargo test --features vectors`.

/// Wire constants — key names and alphabet.
pub mod constants;

/// Error types and the error code registry.
pub mod errors;

/// Encoding utilities — base64url and hex.
pub mod encoding;

/// Base response fragment — client data.
pub mod response;

/// Assertion response model.
pub mod assertion;

/// Wire serializer.
pub mod wire;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use assertion::{AuthenticatorAssertionResponse, ClientAssertionResponse};
pub use errors::{DecodeError, SerializationError, ValidationError};
pub use response::{AuthenticatorResponse, CollectedClientData};
pub use wire::{WireFormat, WireRecord};
