//! Conformance Harness — Assertion Response Wire Contract
//!
//! Enforces the codec and record invariants against the committed golden
//! vectors in `vectors/assertion-response.vectors.json`.
//!
//! Invariant coverage:
//! - Base64url round-trip in both directions
//! - Padding and standard-alphabet rejection
//! - userHandle omission (absent vs empty)
//! - Required-field validation and error code mapping
//!
//! Caller-owned invariants (NOT tested here):
//! - Signature verification over authenticatorData || hash(clientDataJSON)
//! - Challenge freshness and origin policy

mod codec_laws;
mod codec_vectors;
mod error_code_registry;
