//! Multi-byte CJK candidate selection (§4.7, component C7).

use crate::confidence::conf;
use crate::label::Candidate;
use crate::validate::cjk;

struct Scored {
    encoding: &'static str,
    signal: usize,
    big5_low_trails: usize,
    signal_ratio: f64,
}

/// Runs the Shift_JIS, EUC-JP, and Big5 validators and picks the best
/// surviving candidate by the lexicographic key `(signal, big5_low_trails,
/// signal_ratio)`.
///
/// `big5_low_trails` only carries information for the Big5 candidate (it is
/// forced to `0` for the others in the tie-break, matching the reference
/// behavior); `signal_ratio = signal / max(1, |buf|)`. Returns an empty
/// candidate if no validator passed, or the winner had `signal == 0`.
pub fn probe(buf: &[u8]) -> Candidate {
    let len = buf.len().max(1) as f64;
    let mut best: Option<Scored> = None;

    let mut consider = |encoding: &'static str, signal: Option<usize>| {
        let Some(signal) = signal else { return };
        let big5_low_trails = if encoding == "big5" {
            cjk::big5_low_trail_pairs(buf)
        } else {
            0
        };
        let signal_ratio = signal as f64 / len;
        let candidate = Scored { encoding, signal, big5_low_trails, signal_ratio };

        let replace = match &best {
            None => true,
            Some(current) => {
                candidate.signal > current.signal
                    || (candidate.signal == current.signal
                        && candidate.big5_low_trails > current.big5_low_trails)
                    || (candidate.signal == current.signal
                        && candidate.big5_low_trails == current.big5_low_trails
                        && candidate.signal_ratio > current.signal_ratio)
            }
        };
        if replace {
            best = Some(candidate);
        }
    };

    consider("shift_jis", cjk::validate_shift_jis(buf));
    consider("euc_jp", cjk::validate_euc_jp(buf));
    consider("big5", cjk::validate_big5(buf));

    match best {
        Some(winner) if winner.signal > 0 => {
            let confidence = conf(winner.signal, 0).clamp(0.55, 0.95);
            Candidate::new(winner.encoding, confidence)
        }
        _ => Candidate::empty(),
    }
}
