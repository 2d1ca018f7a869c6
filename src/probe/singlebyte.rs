//! Weighted Polish single-byte distribution scoring: CP1250 vs ISO-8859-2
//! (§4.8, component C8).

use crate::histogram::FrequencyTable;
use crate::label::Candidate;

struct DistPoint {
    byte_value: u8,
    expected_ratio: f64,
    weight: f64,
}

#[rustfmt::skip]
const CP1250_PATTERN: [DistPoint; 14] = [
    DistPoint { byte_value: 0xA5, expected_ratio: 0.0030, weight: 1.2 },
    DistPoint { byte_value: 0xB9, expected_ratio: 0.0032, weight: 1.2 },
    DistPoint { byte_value: 0x8C, expected_ratio: 0.0012, weight: 1.0 },
    DistPoint { byte_value: 0x9C, expected_ratio: 0.0015, weight: 1.0 },
    DistPoint { byte_value: 0x8F, expected_ratio: 0.0010, weight: 1.0 },
    DistPoint { byte_value: 0x9F, expected_ratio: 0.0012, weight: 1.0 },
    DistPoint { byte_value: 0xC6, expected_ratio: 0.0025, weight: 0.8 },
    DistPoint { byte_value: 0xE6, expected_ratio: 0.0028, weight: 0.8 },
    DistPoint { byte_value: 0xCA, expected_ratio: 0.0020, weight: 0.8 },
    DistPoint { byte_value: 0xEA, expected_ratio: 0.0021, weight: 0.8 },
    DistPoint { byte_value: 0xD1, expected_ratio: 0.0018, weight: 0.7 },
    DistPoint { byte_value: 0xF1, expected_ratio: 0.0020, weight: 0.7 },
    DistPoint { byte_value: 0xD3, expected_ratio: 0.0040, weight: 0.7 },
    DistPoint { byte_value: 0xF3, expected_ratio: 0.0042, weight: 0.7 },
];

#[rustfmt::skip]
const ISO88592_PATTERN: [DistPoint; 14] = [
    DistPoint { byte_value: 0xA1, expected_ratio: 0.0030, weight: 1.2 },
    DistPoint { byte_value: 0xB1, expected_ratio: 0.0032, weight: 1.2 },
    DistPoint { byte_value: 0xA6, expected_ratio: 0.0012, weight: 1.0 },
    DistPoint { byte_value: 0xB6, expected_ratio: 0.0015, weight: 1.0 },
    DistPoint { byte_value: 0xAC, expected_ratio: 0.0010, weight: 1.0 },
    DistPoint { byte_value: 0xBC, expected_ratio: 0.0012, weight: 1.0 },
    DistPoint { byte_value: 0xC6, expected_ratio: 0.0025, weight: 0.8 },
    DistPoint { byte_value: 0xE6, expected_ratio: 0.0028, weight: 0.8 },
    DistPoint { byte_value: 0xCA, expected_ratio: 0.0020, weight: 0.8 },
    DistPoint { byte_value: 0xEA, expected_ratio: 0.0021, weight: 0.8 },
    DistPoint { byte_value: 0xD1, expected_ratio: 0.0018, weight: 0.7 },
    DistPoint { byte_value: 0xF1, expected_ratio: 0.0020, weight: 0.7 },
    DistPoint { byte_value: 0xD3, expected_ratio: 0.0040, weight: 0.7 },
    DistPoint { byte_value: 0xF3, expected_ratio: 0.0042, weight: 0.7 },
];

/// CP1250 Polish hit set (§6.5).
const PL_CP1250: [u8; 18] = [
    0xA5, 0xB9, 0xC6, 0xE6, 0xCA, 0xEA, 0xA3, 0xB3, 0xD1, 0xF1, 0xD3, 0xF3, 0x8C, 0x9C, 0x8F, 0x9F,
    0xAF, 0xBF,
];

/// ISO-8859-2 Polish hit set (§6.5).
const PL_ISO88592: [u8; 18] = [
    0xA1, 0xB1, 0xC6, 0xE6, 0xCA, 0xEA, 0xA3, 0xB3, 0xD1, 0xF1, 0xD3, 0xF3, 0xA6, 0xB6, 0xAC, 0xBC,
    0xAF, 0xBF,
];

const CP1250_WEIGHTS: [(u8, f64); 16] = [
    (0xA5, 2.00), (0xB9, 2.00), (0x8C, 1.70), (0x9C, 1.70),
    (0x8F, 1.70), (0x9F, 1.70), (0xC6, 0.80), (0xE6, 0.80),
    (0xCA, 0.80), (0xEA, 0.80), (0xA3, 0.70), (0xB3, 0.70),
    (0xD1, 0.70), (0xF1, 0.70), (0xD3, 0.70), (0xF3, 0.70),
];

const ISO88592_WEIGHTS: [(u8, f64); 16] = [
    (0xA1, 2.00), (0xB1, 2.00), (0xA6, 1.70), (0xB6, 1.70),
    (0xAC, 1.70), (0xBC, 1.70), (0xC6, 0.80), (0xE6, 0.80),
    (0xCA, 0.80), (0xEA, 0.80), (0xA3, 0.70), (0xB3, 0.70),
    (0xD1, 0.70), (0xF1, 0.70), (0xD3, 0.70), (0xF3, 0.70),
];

/// `dist(buf, hyp)`: `1 - 20 * Σ|actual_ratio - expected|·w / Σw`, clamped
/// to `[0, 1]`.
fn distribution_match(table: &FrequencyTable, len: f64, cp1250: bool) -> f64 {
    let pattern: &[DistPoint; 14] = if cp1250 { &CP1250_PATTERN } else { &ISO88592_PATTERN };

    let mut weighted_distance = 0.0;
    let mut weight_sum = 0.0;
    for point in pattern {
        let actual_ratio = table.count(point.byte_value) as f64 / len;
        weighted_distance += (actual_ratio - point.expected_ratio).abs() * point.weight;
        weight_sum += point.weight;
    }

    if weight_sum <= 0.0 {
        return 0.0;
    }
    (1.0 - (weighted_distance / weight_sum) * 20.0).clamp(0.0, 1.0)
}

/// `polish_weight(hyp) = own_score - 0.75 * opposite_score`.
fn polish_weight(table: &FrequencyTable, len: f64, cp1250: bool) -> f64 {
    let (own, opposite) = if cp1250 {
        (&CP1250_WEIGHTS, &ISO88592_WEIGHTS)
    } else {
        (&ISO88592_WEIGHTS, &CP1250_WEIGHTS)
    };

    let own_score: f64 = own
        .iter()
        .map(|&(byte, weight)| (table.count(byte) as f64 / len) * weight)
        .sum();
    let opposite_score: f64 = opposite
        .iter()
        .map(|&(byte, weight)| (table.count(byte) as f64 / len) * weight)
        .sum();

    own_score - opposite_score * 0.75
}

fn score_for(buf: &[u8], table: &FrequencyTable, len: f64, cp1250: bool) -> f64 {
    let polish_set: &[u8; 18] = if cp1250 { &PL_CP1250 } else { &PL_ISO88592 };

    let mut printable = 0usize;
    let mut c1_controls = 0usize;
    let mut polish_hits = 0usize;
    let mut suspicious = 0usize;

    for &b in buf {
        if (b >= 0x20 && b != 0x7F) || b == b'\n' || b == b'\r' || b == b'\t' {
            printable += 1;
        }
        if (0x80..=0x9F).contains(&b) {
            if cp1250 {
                if !matches!(b, 0x8C | 0x8F | 0x9C | 0x9F) {
                    suspicious += 1;
                }
            } else {
                c1_controls += 1;
            }
        }
        if polish_set.contains(&b) {
            polish_hits += 1;
        }
    }

    let printable_ratio = printable as f64 / len;
    let c1_ratio = c1_controls as f64 / len;
    let polish_ratio = polish_hits as f64 / len;
    let suspicious_ratio = suspicious as f64 / len;

    let mut score = printable_ratio;
    score += (polish_ratio * 4.0).min(0.35);
    score += polish_weight(table, len, cp1250).clamp(-0.9, 0.9);
    score += (distribution_match(table, len, cp1250) - 0.5) * 1.1;
    score -= c1_ratio * 2.5;
    score -= suspicious_ratio * 0.8;
    score
}

/// Scores both hypotheses (windows-1250 and iso-8859-2) and returns the
/// higher-scoring one. On ties, windows-1250 wins (stable for Polish text).
pub fn probe(buf: &[u8]) -> Candidate {
    let table = FrequencyTable::build(buf);
    let len = buf.len().max(1) as f64;

    let score_cp1250 = score_for(buf, &table, len, true);
    let score_iso88592 = score_for(buf, &table, len, false);

    if score_cp1250 >= score_iso88592 {
        let confidence = (0.45 + score_cp1250 * 0.32).clamp(0.0, 0.93);
        Candidate::new("windows-1250", confidence)
    } else {
        let confidence = (0.45 + score_iso88592 * 0.32).clamp(0.0, 0.93);
        Candidate::new("iso-8859-2", confidence)
    }
}
