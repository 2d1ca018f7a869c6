//! Strict UTF-8 structural validation (§4.3, component C3).
//!
//! A deterministic byte-at-a-time state machine tracking the number of
//! continuation bytes still owed by the current lead byte, and whether the
//! *next* byte is the first continuation (which constrains its range more
//! tightly than later continuations, to rule out overlong encodings,
//! surrogates, and codepoints above U+10FFFF).
//!
//! | Lead byte(s)                  | Continuations | First cont. range |
//! |--------------------------------|----------------|--------------------|
//! | 0x00–0x7F                      | 0              | —                  |
//! | 0xC2–0xDF                      | 1              | 0x80–0xBF          |
//! | 0xE0                           | 2              | 0xA0–0xBF          |
//! | 0xE1–0xEC, 0xEE–0xEF           | 2              | 0x80–0xBF          |
//! | 0xED                           | 2              | 0x80–0x9F          |
//! | 0xF0                           | 3              | 0x90–0xBF          |
//! | 0xF1–0xF3                      | 3              | 0x80–0xBF          |
//! | 0xF4                           | 3              | 0x80–0x8F          |
//! | any other                      | invalid lead   |                    |

use crate::confidence::ValidationCounters;

struct LeadClass {
    continuations: u8,
    first_min: u8,
    first_max: u8,
}

fn classify_lead(byte: u8) -> Option<LeadClass> {
    match byte {
        0xC2..=0xDF => Some(LeadClass { continuations: 1, first_min: 0x80, first_max: 0xBF }),
        0xE0 => Some(LeadClass { continuations: 2, first_min: 0xA0, first_max: 0xBF }),
        0xE1..=0xEC | 0xEE..=0xEF => Some(LeadClass { continuations: 2, first_min: 0x80, first_max: 0xBF }),
        0xED => Some(LeadClass { continuations: 2, first_min: 0x80, first_max: 0x9F }),
        0xF0 => Some(LeadClass { continuations: 3, first_min: 0x90, first_max: 0xBF }),
        0xF1..=0xF3 => Some(LeadClass { continuations: 3, first_min: 0x80, first_max: 0xBF }),
        0xF4 => Some(LeadClass { continuations: 3, first_min: 0x80, first_max: 0x8F }),
        _ => None,
    }
}

/// Validates `buf` as strict UTF-8, returning `true` iff no violation
/// occurred and the buffer didn't end mid-sequence. Always returns the
/// valid/invalid transition counts accumulated up to (and including) the
/// point of failure, for use by [`crate::confidence::conf`].
///
/// Rejects overlong sequences (via the 0xE0/0xF0 first-continuation
/// constraints), UTF-16 surrogates (via the 0xED constraint), and codepoints
/// above U+10FFFF (via the 0xF4 constraint).
pub fn validate(buf: &[u8]) -> (bool, ValidationCounters) {
    let mut remaining: u8 = 0;
    let mut first_continuation = false;
    let mut first_min = 0x80u8;
    let mut first_max = 0xBFu8;
    let mut valid = 0usize;
    let mut invalid = 0usize;

    for &byte in buf {
        if remaining == 0 {
            if byte <= 0x7F {
                valid += 1;
                continue;
            }
            if let Some(class) = classify_lead(byte) {
                remaining = class.continuations;
                first_continuation = true;
                first_min = class.first_min;
                first_max = class.first_max;
                valid += 1;
                continue;
            }
            invalid += 1;
            return (false, ValidationCounters::new(valid, invalid));
        }

        if first_continuation {
            if byte < first_min || byte > first_max {
                invalid += 1;
                return (false, ValidationCounters::new(valid, invalid));
            }
            first_continuation = false;
            remaining -= 1;
            valid += 1;
            continue;
        }

        if !(0x80..=0xBF).contains(&byte) {
            invalid += 1;
            return (false, ValidationCounters::new(valid, invalid));
        }
        remaining -= 1;
        valid += 1;
    }

    if remaining != 0 {
        invalid += 1;
    }
    (remaining == 0, ValidationCounters::new(valid, invalid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_valid() {
        let (ok, counters) = validate(&[]);
        assert!(ok);
        assert_eq!(counters, ValidationCounters::new(0, 0));
    }

    #[test]
    fn pure_ascii_is_valid() {
        let (ok, counters) = validate(b"Hello, world!");
        assert!(ok);
        assert_eq!(counters.invalid, 0);
        assert_eq!(counters.valid, 13);
    }

    #[test]
    fn well_formed_multibyte_sequences() {
        assert!(validate("日本語".as_bytes()).0);
        assert!(validate("émoji: 🎉".as_bytes()).0);
        assert!(validate("Mixed: café 日本 🎉".as_bytes()).0);
    }

    #[test]
    fn bare_continuation_byte_is_invalid() {
        let (ok, counters) = validate(&[0x80]);
        assert!(!ok);
        assert_eq!(counters.invalid, 1);
    }

    #[test]
    fn truncated_two_byte_sequence() {
        let (ok, counters) = validate(&[0xC2]);
        assert!(!ok);
        assert_eq!(counters.invalid, 1);
    }

    #[test]
    fn overlong_two_byte_nul_is_rejected() {
        // 0xC0 0x80 would encode NUL overlong; 0xC0 isn't even a valid lead
        // (lead range starts at 0xC2), so it's rejected as an invalid lead.
        assert!(!validate(&[0xC0, 0x80]).0);
    }

    #[test]
    fn overlong_three_byte_via_e0_first_continuation() {
        // E0 80 80 would be overlong for a codepoint that fits in 2 bytes;
        // the E0 first-continuation range (0xA0-0xBF) rejects it.
        assert!(!validate(&[0xE0, 0x80, 0x80]).0);
    }

    #[test]
    fn surrogate_codepoints_are_rejected() {
        // U+D800 encoded as ED A0 80 - ED's first-continuation range
        // (0x80-0x9F) rejects the 0xA0 continuation byte.
        assert!(!validate(&[0xED, 0xA0, 0x80]).0);
    }

    #[test]
    fn codepoints_above_u10ffff_are_rejected() {
        // F4 90 80 80 would be U+110000; F4's first-continuation range
        // (0x80-0x8F) rejects the 0x90 continuation byte.
        assert!(!validate(&[0xF4, 0x90, 0x80, 0x80]).0);
    }

    #[test]
    fn four_byte_max_valid_codepoint() {
        assert!(validate(&[0xF4, 0x8F, 0xBF, 0xBF]).0);
    }

    #[test]
    fn invalid_byte_at_various_offsets() {
        for offset in [0usize, 1, 7, 15, 31, 63, 64, 65, 100, 127, 128, 255, 256] {
            let mut input = vec![b'A'; offset + 1];
            input[offset] = 0x80;
            let (ok, _) = validate(&input);
            assert!(!ok, "offset {offset} should be invalid");
        }
    }

    #[test]
    fn agrees_with_std_str_from_utf8_on_valid_inputs() {
        let cases = [
            "",
            "Hello, world!",
            "日本語",
            "🎉🚀🌍",
            "\n\t\r",
            "\x00\x01\x02",
        ];
        for s in cases {
            assert!(validate(s.as_bytes()).0, "should agree {s} is valid");
        }
    }

    #[test]
    fn agrees_with_std_str_from_utf8_on_invalid_inputs() {
        let cases: &[&[u8]] = &[
            &[0x80],
            &[0xC2],
            &[0xE0, 0x80],
            &[0xC0, 0x80],
            &[0xED, 0xA0, 0x80],
            &[0xF4, 0x90, 0x80, 0x80],
        ];
        for bytes in cases {
            assert!(!validate(bytes).0 && core::str::from_utf8(bytes).is_err());
        }
    }
}
