//! Latin-1 (ISO-8859-1) decoding (§4.11, component C11).
//!
//! Every byte maps directly to the codepoint of the same numeric value;
//! this mapping is total, so decoding never fails.

/// Decodes `bytes` as Latin-1. Infallible.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
