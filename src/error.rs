//! Error surfaces at the one genuine failure boundary in this crate: asking
//! the decoder to resolve a label outside the strict set of §6.1.
//!
//! Detection and strict-set decoding never produce an `Err` — every outcome
//! there is a value (see `DetectionResult`/`DecodeResult` and the error
//! handling policy in the crate-level docs). A `RegistryError` can only
//! surface from [`crate::decode::decode_with_registry`], and only when the
//! caller-supplied `CodecRegistry` is missing or itself fails.

use thiserror::Error;

/// Failure at the external codec registry boundary (§6.6).
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// None of the attempted labels were in the strict set, and no registry
    /// collaborator was supplied to resolve the rest.
    #[error("no registry supplied to resolve label(s) outside the strict set: {0:?}")]
    NoRegistry(Vec<String>),

    /// The caller-supplied registry reported a failure for `label`.
    #[error("registry failed to decode label {label:?}: {message}")]
    RegistryFailed { label: String, message: String },
}
