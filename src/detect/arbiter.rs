//! Candidate arbiter: ordered language-fallback selection under an
//! ambiguity window (§4.9, component C9).

use crate::label::{fallback_rank, Candidate};

/// Picks the best candidate out of `candidates` under the fallback policy:
///
/// - `best_conf` is the max confidence among non-empty candidates.
/// - A candidate is *eligible* iff `best_conf - its confidence <= ambiguity_delta`.
/// - Among eligible candidates, the one with the lowest [`fallback_rank`]
///   wins; ties broken by higher confidence.
///
/// Returns an empty candidate if no non-empty candidate exists.
pub fn choose(candidates: &[Candidate], ambiguity_delta: f64) -> Candidate {
    let best_conf = candidates
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| c.confidence)
        .fold(f64::MIN, f64::max);

    if best_conf == f64::MIN {
        return Candidate::empty();
    }

    let mut winner: Option<&Candidate> = None;
    let mut winner_rank = usize::MAX;

    for candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        if best_conf - candidate.confidence > ambiguity_delta {
            continue;
        }

        let rank = fallback_rank(&candidate.label);
        let replace = match winner {
            None => true,
            Some(current) => {
                rank < winner_rank
                    || (rank == winner_rank && candidate.confidence > current.confidence)
            }
        };
        if replace {
            winner = Some(candidate);
            winner_rank = rank;
        }
    }

    winner.cloned().unwrap_or_else(Candidate::empty)
}
