//! Property-based tests for the testable properties of the detection and
//! decoding core (P1-P11).

use encoding_sleuth::{decode, detect, label};
use proptest::prelude::*;

/// P1 (BOM precedence): every buffer starting with a listed BOM reports the
/// matching label and `detected_by_bom = true`, regardless of payload.
#[test]
fn p1_bom_precedence_fixed_cases() {
    let cases: &[(&[u8], &str)] = &[
        (&[0x00, 0x00, 0xFE, 0xFF], "utf-32-be"),
        (&[0xFF, 0xFE, 0x00, 0x00], "utf-32-le"),
        (&[0xEF, 0xBB, 0xBF], "utf-8-sig"),
        (&[0xFE, 0xFF], "utf-16-be"),
        (&[0xFF, 0xFE], "utf-16-le"),
    ];
    for (prefix, expected) in cases {
        let result = detect::detect(prefix);
        assert_eq!(result.encoding, *expected);
        assert!(result.detected_by_bom);
    }
}

proptest! {
    #[test]
    fn p1_bom_precedence_with_arbitrary_payload(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let cases: &[(&[u8], &str)] = &[
            (&[0x00, 0x00, 0xFE, 0xFF], "utf-32-be"),
            (&[0xFF, 0xFE, 0x00, 0x00], "utf-32-le"),
            (&[0xEF, 0xBB, 0xBF], "utf-8-sig"),
        ];
        for (prefix, expected) in cases {
            let mut buf = prefix.to_vec();
            buf.extend_from_slice(&payload);
            let result = detect::detect(&buf);
            prop_assert_eq!(result.encoding, *expected);
            prop_assert!(result.detected_by_bom);
        }
    }

    /// P2 (ASCII is UTF-8): any buffer of 7-bit bytes detects as utf-8 with
    /// confidence >= 0.70.
    #[test]
    fn p2_ascii_is_utf8(bytes in prop::collection::vec(0u8..=0x7F, 0..512)) {
        let result = detect::detect(&bytes);
        prop_assert_eq!(result.encoding, "utf-8");
        prop_assert!(result.confidence >= 0.70);
    }

    /// P3 (UTF-8 round trip): any Rust `String` (already valid UTF-8)
    /// detects as utf-8 and decodes back to itself.
    #[test]
    fn p3_utf8_round_trip(s in ".{0,200}") {
        // A leading U+FEFF would encode to the same three bytes as the
        // utf-8-sig BOM, which takes priority over the plain utf-8 path at
        // the top of the pipeline (§4.10) — exclude that one codepoint so
        // this property targets "utf-8", not "utf-8-sig".
        prop_assume!(!s.starts_with('\u{FEFF}'));
        let bytes = s.as_bytes();
        let detected = detect::detect(bytes);
        prop_assert_eq!(detected.encoding, "utf-8");

        let decoded = decode::decode(bytes, &["utf-8"], false);
        prop_assert!(decoded.ok);
        prop_assert_eq!(decoded.text, s);
    }

    /// P4 (UTF-16 surrogate law): any supplementary-plane codepoint
    /// round-trips through a UTF-16 surrogate pair to the same scalar.
    #[test]
    fn p4_utf16_surrogate_law(cp in 0x10000u32..=0x10FFFF) {
        let adjusted = cp - 0x10000;
        let w1 = 0xD800 + (adjusted >> 10) as u16;
        let w2 = 0xDC00 + (adjusted & 0x3FF) as u16;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&w1.to_le_bytes());
        bytes.extend_from_slice(&w2.to_le_bytes());

        let result = decode::decode(&bytes, &["utf-16le"], false);
        prop_assert!(result.ok);
        let scalar = result.text.chars().next().unwrap() as u32;
        prop_assert_eq!(scalar, cp);
    }

    /// P5 (Latin-1 total): decoding any buffer as latin-1 always succeeds
    /// and the i-th scalar equals buf[i].
    #[test]
    fn p5_latin1_total(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let result = decode::decode(&bytes, &["latin-1"], false);
        prop_assert!(result.ok);
        let scalars: Vec<u32> = result.text.chars().map(|c| c as u32).collect();
        prop_assert_eq!(scalars.len(), bytes.len());
        for (scalar, byte) in scalars.iter().zip(bytes.iter()) {
            prop_assert_eq!(*scalar, *byte as u32);
        }
    }

    /// P9 (Confidence bounds): every detection confidence lies in [0, 1].
    #[test]
    fn p9_confidence_always_in_unit_interval(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        let result = detect::detect(&bytes);
        prop_assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
    }

    /// P10 (Label normalization idempotence): normalizing an already
    /// canonical label is a no-op, and normalizing any alias yields its
    /// canonical form.
    #[test]
    fn p10_normalization_idempotent_on_canonical(idx in 0usize..label::STRICT_LABELS.len()) {
        let canonical = label::STRICT_LABELS[idx];
        prop_assert_eq!(label::normalize(canonical), canonical);
    }

    /// P11 (Registry boundary): decoding a label outside the strict set
    /// with no registry always yields `ok = false` with that label recorded
    /// in `attempts`, never panicking.
    #[test]
    fn p11_unresolved_label_without_registry(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let result = decode::decode(&bytes, &["shift_jis"], false);
        prop_assert!(!result.ok);
        prop_assert_eq!(result.attempts, vec!["shift_jis".to_string()]);
    }
}

/// P6 (Arbiter monotonicity): windows-1250 ranks lower (more preferred)
/// than iso-8859-2 in the fallback order, so a buffer whose single-byte
/// scores land within the ambiguity window of each other resolves to
/// windows-1250 end-to-end through [`detect::detect`].
#[test]
fn p6_arbiter_monotonicity_via_detect() {
    assert!(label::fallback_rank("windows-1250") < label::fallback_rank("iso-8859-2"));

    // Neither hypothesis carries any Polish signal here, so the only thing
    // separating them is the control-byte penalty; windows-1250's smaller
    // penalty (and its lower fallback rank on an exact tie) both point the
    // same way, matching §4.9's fallback-rank tie-break.
    let mut buf = vec![0x80u8]; // non-ASCII byte, forces past the UTF-8 validator
    buf.extend_from_slice(b"plain ascii with no diacritics at all");
    let result = detect::detect(&buf);
    assert_eq!(result.encoding, "windows-1250");
}

/// P8 (ISO-2022-JP purity): any buffer containing a byte >= 0x80 never
/// detects as iso-2022-jp via the escape probe.
#[test]
fn p8_high_byte_buffers_never_detect_as_iso2022jp_fixed() {
    let cases: &[&[u8]] = &[
        &[0x1B, 0x24, 0x42, 0x80],
        &[0x80, 0x1B, 0x24, 0x42],
        &[0x1B, 0x24, 0x42, 0x24, 0x22, 0xFF],
    ];
    for buf in cases {
        let result = detect::detect(buf);
        assert_ne!(result.encoding, "iso-2022-jp");
    }
}

proptest! {
    #[test]
    fn p8_high_byte_buffers_never_detect_as_iso2022jp(
        mut bytes in prop::collection::vec(any::<u8>(), 1..64),
        high_byte in 0x80u8..=0xFF,
        pos in 0usize..64,
    ) {
        let pos = pos % bytes.len();
        bytes[pos] = high_byte;
        let result = detect::detect(&bytes);
        prop_assert_ne!(result.encoding, "iso-2022-jp");
    }
}
