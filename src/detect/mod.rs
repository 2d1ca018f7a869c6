//! The top-level detection pipeline (§4.10, component C10): BOM probe,
//! empty-input shortcut, escape-sequence probe, UTF-8 validation, and the
//! multi-byte/single-byte arbitration, under a prefix-first early exit.

mod arbiter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::confidence::conf;
use crate::config::DetectorConfig;
use crate::probe::{multibyte, singlebyte};
use crate::validate::utf16::Endian;
use crate::validate::{escape, utf16, utf8};

/// Outcome of a single detection call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectionResult {
    pub encoding: String,
    pub confidence: f64,
    pub used_fallback: bool,
    pub detected_by_bom: bool,
}

impl DetectionResult {
    fn new(encoding: impl Into<String>, confidence: f64, used_fallback: bool, detected_by_bom: bool) -> Self {
        Self {
            encoding: encoding.into(),
            confidence,
            used_fallback,
            detected_by_bom,
        }
    }
}

/// Detects the encoding of `buf` using the fixed constants of §6.4.
///
/// Equivalent to `detect_with_config(buf, &DetectorConfig::default())`.
pub fn detect(buf: &[u8]) -> DetectionResult {
    detect_with_config(buf, &DetectorConfig::default())
}

/// Detects the encoding of `buf`, honoring a caller-supplied [`DetectorConfig`].
///
/// Buffers larger than `config.early_exit_bytes` are first probed on their
/// prefix; if that probe's confidence exceeds `config.early_exit_confidence`
/// the prefix result is returned directly (P7), otherwise the full buffer is
/// re-scanned from the start.
pub fn detect_with_config(buf: &[u8], config: &DetectorConfig) -> DetectionResult {
    if buf.len() > config.early_exit_bytes {
        let prefix_result = detect_core(&buf[..config.early_exit_bytes], config);
        if prefix_result.confidence > config.early_exit_confidence {
            trace!(
                confidence = prefix_result.confidence,
                encoding = %prefix_result.encoding,
                "early exit on buffer prefix"
            );
            return prefix_result;
        }
    }
    detect_core(buf, config)
}

fn has_prefix(buf: &[u8], prefix: &[u8]) -> bool {
    buf.len() >= prefix.len() && &buf[..prefix.len()] == prefix
}

fn detect_core(buf: &[u8], config: &DetectorConfig) -> DetectionResult {
    if has_prefix(buf, &[0x00, 0x00, 0xFE, 0xFF]) {
        debug!("BOM match: utf-32-be");
        return DetectionResult::new("utf-32-be", 1.0, false, true);
    }
    if has_prefix(buf, &[0xFF, 0xFE, 0x00, 0x00]) {
        debug!("BOM match: utf-32-le");
        return DetectionResult::new("utf-32-le", 1.0, false, true);
    }
    if has_prefix(buf, &[0xEF, 0xBB, 0xBF]) {
        debug!("BOM match: utf-8-sig");
        return DetectionResult::new("utf-8-sig", 1.0, false, true);
    }
    if has_prefix(buf, &[0xFE, 0xFF]) {
        return bom_utf16(&buf[2..], Endian::Big, "utf-16-be");
    }
    if has_prefix(buf, &[0xFF, 0xFE]) {
        return bom_utf16(&buf[2..], Endian::Little, "utf-16-le");
    }

    if buf.is_empty() {
        return DetectionResult::new("utf-8", 1.0, false, false);
    }

    let esc_guess = escape::probe(buf);
    if !esc_guess.is_empty() {
        debug!(encoding = %esc_guess.label, "escape-sequence probe matched");
        return DetectionResult::new(esc_guess.label, esc_guess.confidence, false, false);
    }

    let (utf8_ok, utf8_counters) = utf8::validate(buf);
    if utf8_ok {
        let confidence = conf(utf8_counters.valid, utf8_counters.invalid).clamp(0.70, 0.97);
        trace!(confidence, "utf-8 validator succeeded");
        return DetectionResult::new("utf-8", confidence, false, false);
    }

    let has_high_bytes = buf.iter().any(|&b| b >= 0x80);
    if has_high_bytes {
        let multi = multibyte::probe(buf);
        let single = singlebyte::probe(buf);
        let candidates = [multi, single];
        let selected = arbiter::choose(&candidates, config.ambiguity_delta);
        if !selected.is_empty() {
            debug!(encoding = %selected.label, confidence = selected.confidence, "arbiter selected candidate");
            return DetectionResult::new(selected.label, selected.confidence, false, false);
        }
        debug!("no candidate survived arbitration, falling back to utf-8");
        return DetectionResult::new("utf-8", 0.0, true, false);
    }

    // Unreachable in practice: pure-ASCII buffers always pass the UTF-8
    // validator above. Preserved as the defined fallback for this branch
    // per the reference implementation (see DESIGN.md).
    DetectionResult::new("utf-8", 0.0, true, false)
}

fn bom_utf16(payload: &[u8], endian: Endian, label: &'static str) -> DetectionResult {
    let (ok, counters) = utf16::validate(payload, endian);
    if ok {
        let confidence = conf(counters.valid, counters.invalid).max(0.9);
        debug!(%label, confidence, "BOM-declared UTF-16 payload validated");
        DetectionResult::new(label, confidence, false, true)
    } else {
        let confidence = conf(counters.valid, counters.invalid).min(0.49);
        debug!(%label, confidence, "BOM-declared UTF-16 payload failed validation");
        DetectionResult::new(label, confidence, true, true)
    }
}
