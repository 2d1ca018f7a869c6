//! Tunable constants for the detection pipeline.

/// Buffers larger than this are first probed on their prefix; if that probe
/// is confident enough (see [`EARLY_EXIT_CONFIDENCE`]) the full buffer is
/// never scanned.
pub const EARLY_EXIT_BYTES: usize = 4096;

/// Confidence threshold above which the prefix-only probe of a large buffer
/// is trusted without re-scanning the full input.
pub const EARLY_EXIT_CONFIDENCE: f64 = 0.98;

/// Candidates within this absolute distance of the best confidence are
/// considered equally plausible and broken by [`crate::label::FALLBACK_ORDER`]
/// rank instead of raw confidence.
pub const AMBIGUITY_DELTA: f64 = 0.03;

/// Tunable knobs for [`crate::detect::detect_with_config`].
///
/// `Default` reproduces the fixed constants above exactly, so
/// [`crate::detect::detect`] is equivalent to `detect_with_config` with the
/// default configuration. Hosts that want a different early-exit tradeoff
/// (e.g. disabling it for small batch jobs where the full scan is cheap)
/// can supply their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    pub early_exit_bytes: usize,
    pub early_exit_confidence: f64,
    pub ambiguity_delta: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            early_exit_bytes: EARLY_EXIT_BYTES,
            early_exit_confidence: EARLY_EXIT_CONFIDENCE,
            ambiguity_delta: AMBIGUITY_DELTA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fixed_constants() {
        let cfg = DetectorConfig::default();
        assert_eq!(cfg.early_exit_bytes, EARLY_EXIT_BYTES);
        assert_eq!(cfg.early_exit_confidence, EARLY_EXIT_CONFIDENCE);
        assert_eq!(cfg.ambiguity_delta, AMBIGUITY_DELTA);
    }
}
