//! # encoding-sleuth
//!
//! Charset detection and strict decoding, biased toward Polish single-byte
//! encodings (windows-1250, iso-8859-2) and the common CJK / Unicode
//! family.
//!
//! The crate is split into two independent halves:
//!
//! - [`detect`] — a staged classifier over byte-order marks, escape
//!   sequences, UTF-8/UTF-16 structural validators, multi-byte CJK
//!   validators, and weighted Polish distribution scoring, combined under
//!   an ordered fallback policy ([`detect::detect`]).
//! - [`decode`] — strict decoders for the label families the detector may
//!   name, with well-defined `U+FFFD` replacement semantics
//!   ([`decode::decode`]).
//!
//! Both halves are pure functions over immutable byte buffers: no
//! background tasks, no shared mutable state, safe to call concurrently
//! from any number of threads.
//!
//! ## Quick start
//!
//! ```
//! use encoding_sleuth::{detect, decode};
//!
//! let bytes = [0xFF, 0xFE, b'h' as u8, 0x00, b'i' as u8, 0x00];
//! let guess = detect::detect(&bytes);
//! assert_eq!(guess.encoding, "utf-16-le");
//!
//! let result = decode::decode(&bytes, &["utf-16"], true);
//! assert_eq!(result.text, "hi");
//! ```
//!
//! ## Error handling
//!
//! Detection and decoding against the built-in label set never fail: every
//! outcome is a value ([`detect::DetectionResult`] /
//! [`decode::DecodeResult`]), never a `Result`. The one place an `Err` can
//! surface is [`decode::decode_with_registry`], when a caller asks for a
//! label outside the built-in set and either supplies no
//! [`decode::CodecRegistry`] or that registry itself reports failure — see
//! [`error::RegistryError`].
//!
//! ## Observability
//!
//! Stage transitions (BOM hits, escape-sequence matches, arbiter
//! decisions, early exits) are emitted as [`tracing`] events. Nothing is
//! logged by default unless a subscriber is installed; see the `tracing`
//! crate's documentation for wiring one up.

pub mod confidence;
pub mod config;
pub mod decode;
pub mod detect;
pub mod error;
pub mod histogram;
pub mod label;
pub mod probe;
pub mod validate;

pub use config::DetectorConfig;
pub use decode::{CodecRegistry, DecodeResult, Mode};
pub use detect::{detect, detect_with_config, DetectionResult};
pub use error::RegistryError;
pub use label::Candidate;
