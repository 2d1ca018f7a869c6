//! Strict decoding against the canonical label set, with an optional
//! external registry collaborator for labels outside it (§4.11, §6.6,
//! component C11).

pub mod latin1;
pub mod utf16;
pub mod utf8;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::RegistryError;
use crate::label::normalize;
use crate::validate::utf16::Endian as ValidateEndian;

/// Outcome of a decode attempt over an ordered list of candidate labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeResult {
    pub ok: bool,
    pub text: String,
    pub encoding: String,
    pub used_fallback: bool,
    pub attempts: Vec<String>,
}

/// Whether a codec should fail on malformed input or substitute `U+FFFD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Strict,
    Replace,
}

/// Collaborator that resolves labels outside the built-in strict set
/// (§6.1): cp1250, iso-8859-2, shift_jis, euc_jp, big5, and anything else a
/// caller's detector might propose.
pub trait CodecRegistry {
    fn decode(&self, bytes: &[u8], label: &str, mode: Mode) -> Result<String, RegistryError>;
}

/// The 6 canonical labels (of the full 14 in §6.1) that this crate decodes
/// natively, without delegating to a [`CodecRegistry`].
fn builtin_labels() -> &'static [&'static str] {
    &["utf-8", "utf-8-sig", "utf-16", "utf-16le", "utf-16be", "latin-1"]
}

fn decode_builtin(bytes: &[u8], label: &str, replace: bool) -> Option<(String, String)> {
    match label {
        "utf-8" => utf8::decode(bytes, replace).map(|text| (text, "utf-8".to_string())),
        "utf-8-sig" => utf8::decode_sig(bytes, replace).map(|text| (text, "utf-8-sig".to_string())),
        "utf-16" => utf16::decode_with_required_bom(bytes, replace).map(|(text, endian)| {
            let used = match endian {
                ValidateEndian::Little => "utf-16le",
                ValidateEndian::Big => "utf-16be",
            };
            (text, used.to_string())
        }),
        "utf-16le" => {
            utf16::decode_declared(bytes, ValidateEndian::Little, replace).map(|text| (text, "utf-16le".to_string()))
        }
        "utf-16be" => {
            utf16::decode_declared(bytes, ValidateEndian::Big, replace).map(|text| (text, "utf-16be".to_string()))
        }
        "latin-1" => Some((latin1::decode(bytes), "latin-1".to_string())),
        _ => None,
    }
}

fn dedup_normalized(labels: &[&str]) -> Vec<String> {
    let mut seen = Vec::new();
    for &label in labels {
        let normalized = normalize(label);
        if normalized.is_empty() {
            continue;
        }
        if !seen.contains(&normalized) {
            seen.push(normalized);
        }
    }
    seen
}

/// Tries each of `encodings` (in order, after normalization) as a strict
/// decode of `raw`. Unrecognized labels are recorded as failed attempts
/// with no external resolution.
///
/// Without a registry, [`decode_with_registry`] can still report
/// [`RegistryError::NoRegistry`] for a non-builtin label tried in strict
/// mode; this wrapper has no registry to hand the caller either, so it
/// folds that case into the same "exhausted, nothing decoded" result strict
/// decoding already reports for a failed builtin label (§7's "Decode
/// failure, strict" row) — no panic, every failure stays a value.
pub fn decode(raw: &[u8], encodings: &[&str], replace_errors: bool) -> DecodeResult {
    match decode_with_registry(raw, encodings, replace_errors, None) {
        Ok(result) => result,
        Err(_) => DecodeResult {
            ok: false,
            text: String::new(),
            encoding: String::new(),
            used_fallback: false,
            attempts: dedup_normalized(encodings),
        },
    }
}

/// Like [`decode`], but delegates labels outside the strict set (§6.1) to
/// `registry`.
///
/// Returns `Err(RegistryError::NoRegistry(_))` if strict decoding of every
/// label failed, `replace_errors` is false, and at least one attempted
/// label needed a registry that wasn't supplied. Returns
/// `Err(RegistryError::RegistryFailed { .. })` if `replace_errors` is false
/// and the registry itself reported a failure for the last label tried.
///
/// When `replace_errors` is true, a final internal UTF-8 replace-mode pass
/// always succeeds, so this never returns `Err` in that mode — matching
/// the "last attempt always succeeds" guarantee of §4.11.
pub fn decode_with_registry(
    raw: &[u8],
    encodings: &[&str],
    replace_errors: bool,
    registry: Option<&dyn CodecRegistry>,
) -> Result<DecodeResult, RegistryError> {
    let normalized = dedup_normalized(encodings);
    let builtin_set = builtin_labels();

    // Tracks only the labels actually attempted, in order (invariant 5 of
    // §3: "attempts" never names a label this call didn't reach).
    let mut tried: Vec<String> = Vec::new();
    let mut unresolved_labels: Vec<String> = Vec::new();
    let mut last_registry_error: Option<RegistryError> = None;

    for (index, label) in normalized.iter().enumerate() {
        tried.push(label.clone());
        trace!(%label, attempt = index, "trying decode label");

        if builtin_set.contains(&label.as_str()) {
            if let Some((text, used_encoding)) = decode_builtin(raw, label, false) {
                debug!(encoding = %used_encoding, attempt_index = index, "strict decode succeeded");
                return Ok(DecodeResult {
                    ok: true,
                    text,
                    encoding: used_encoding,
                    used_fallback: index > 0,
                    attempts: tried,
                });
            }
            continue;
        }

        match registry {
            Some(reg) => match reg.decode(raw, label, Mode::Strict) {
                Ok(text) => {
                    debug!(encoding = %label, attempt_index = index, "registry decode succeeded");
                    return Ok(DecodeResult {
                        ok: true,
                        text,
                        encoding: label.clone(),
                        used_fallback: index > 0,
                        attempts: tried,
                    });
                }
                Err(err) => last_registry_error = Some(err),
            },
            None => unresolved_labels.push(label.clone()),
        }
    }

    if replace_errors {
        let text = utf8::decode(raw, true).expect("replace-mode utf-8 decode is infallible");
        debug!("all attempts exhausted, falling back to utf-8-replace");
        return Ok(DecodeResult {
            ok: false,
            text,
            encoding: "utf-8-replace".to_string(),
            used_fallback: true,
            attempts: tried,
        });
    }

    if !unresolved_labels.is_empty() {
        return Err(RegistryError::NoRegistry(unresolved_labels));
    }
    if let Some(err) = last_registry_error {
        return Err(err);
    }

    Ok(DecodeResult {
        ok: false,
        text: String::new(),
        encoding: String::new(),
        used_fallback: false,
        attempts: tried,
    })
}
