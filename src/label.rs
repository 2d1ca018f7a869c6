//! Canonical encoding labels, alias normalization, and the fixed fallback
//! rank used by the candidate arbiter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The strict set of labels the decoder (`crate::decode`) can resolve
/// without delegating to an external codec registry.
pub const STRICT_LABELS: [&str; 14] = [
    "utf-8",
    "utf-8-sig",
    "utf-16",
    "utf-16le",
    "utf-16be",
    "utf-32-le",
    "utf-32-be",
    "iso-2022-jp",
    "shift_jis",
    "euc_jp",
    "big5",
    "windows-1250",
    "iso-8859-2",
    "latin-1",
];

/// The fixed preference order consulted by the candidate arbiter when two or
/// more proposals fall within [`AMBIGUITY_DELTA`](crate::config::AMBIGUITY_DELTA)
/// of the best confidence.
pub const FALLBACK_ORDER: [&str; 13] = [
    "utf-8",
    "utf-8-sig",
    "utf-16-le",
    "utf-16-be",
    "utf-32-le",
    "utf-32-be",
    "iso-2022-jp",
    "shift_jis",
    "euc_jp",
    "big5",
    "windows-1250",
    "iso-8859-2",
    "latin-1",
];

/// Returns the rank of `label` in [`FALLBACK_ORDER`], or one past the end if
/// the label is not present (so unranked labels always lose a tie-break).
pub fn fallback_rank(label: &str) -> usize {
    FALLBACK_ORDER
        .iter()
        .position(|&candidate| candidate == label)
        .unwrap_or(FALLBACK_ORDER.len())
}

/// Normalizes a caller-supplied encoding name to its canonical form.
///
/// Lowercases the input, then rewrites the small set of common aliases in
/// the table below. Anything else passes through lowercased, unchanged.
pub fn normalize(label: &str) -> String {
    let lower = label.to_ascii_lowercase();
    match lower.as_str() {
        "utf8" | "utf_8" => "utf-8".to_string(),
        "utf8-sig" | "utf_8_sig" => "utf-8-sig".to_string(),
        "utf16" | "utf_16" => "utf-16".to_string(),
        "utf16le" => "utf-16le".to_string(),
        "utf16be" => "utf-16be".to_string(),
        "latin1" | "iso8859-1" | "cp819" => "latin-1".to_string(),
        _ => lower,
    }
}

/// Returns `true` if `label` is one of the 14 labels the decoder can
/// resolve directly (§6.1), after normalization.
pub fn is_strict(label: &str) -> bool {
    let normalized = normalize(label);
    STRICT_LABELS.contains(&normalized.as_str())
}

/// A detected or requested encoding label, together with a confidence score.
///
/// An empty label (`""`) means "no proposal" throughout the detector; it is
/// never surfaced to callers of [`crate::detect`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    pub label: String,
    pub confidence: f64,
}

impl Candidate {
    pub fn empty() -> Self {
        Self {
            label: String::new(),
            confidence: 0.0,
        }
    }

    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_known_aliases() {
        assert_eq!(normalize("UTF8"), "utf-8");
        assert_eq!(normalize("utf_8"), "utf-8");
        assert_eq!(normalize("Utf8-Sig"), "utf-8-sig");
        assert_eq!(normalize("UTF_8_SIG"), "utf-8-sig");
        assert_eq!(normalize("UTF16"), "utf-16");
        assert_eq!(normalize("utf_16"), "utf-16");
        assert_eq!(normalize("UTF16LE"), "utf-16le");
        assert_eq!(normalize("UTF16BE"), "utf-16be");
        assert_eq!(normalize("Latin1"), "latin-1");
        assert_eq!(normalize("ISO8859-1"), "latin-1");
        assert_eq!(normalize("CP819"), "latin-1");
    }

    #[test]
    fn passes_through_unknown_lowercased() {
        assert_eq!(normalize("Windows-1250"), "windows-1250");
        assert_eq!(normalize("BIG5"), "big5");
        assert_eq!(normalize("Shift_JIS"), "shift_jis");
    }

    #[test]
    fn idempotent_on_already_canonical() {
        for label in STRICT_LABELS {
            assert_eq!(normalize(label), label, "normalizing {label} should be a no-op");
        }
    }

    #[test]
    fn fallback_rank_matches_order() {
        assert_eq!(fallback_rank("utf-8"), 0);
        assert_eq!(fallback_rank("latin-1"), 12);
        assert_eq!(fallback_rank("nonsense"), FALLBACK_ORDER.len());
    }

    #[test]
    fn strict_set_recognizes_aliases() {
        assert!(is_strict("UTF8"));
        assert!(is_strict("latin1"));
        assert!(!is_strict("gb18030"));
    }
}
