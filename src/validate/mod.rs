//! Structural validators: UTF-8 (C3), UTF-16 (C4), multi-byte CJK (C5), and
//! the ISO-2022-JP escape-sequence probe (C6).

pub mod cjk;
pub mod escape;
pub mod utf16;
pub mod utf8;
