//! CLI handler for the `decode` subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use encoding_sleuth::decode;

use crate::io_util::read_inputs;

/// Decode one or more files (or stdin) against an ordered list of candidate
/// encodings.
#[derive(Debug, Parser)]
pub struct DecodeArgs {
    /// Input files to decode (reads from stdin if none provided).
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Comma-separated list of candidate encodings to try, in order.
    #[arg(short = 't', long = "try", value_delimiter = ',', default_value = "utf-8")]
    pub tries: Vec<String>,

    /// Substitute U+FFFD for malformed bytes instead of failing strictly.
    #[arg(short, long)]
    pub replace: bool,
}

/// Exit codes for the `decode` subcommand.
pub mod exit_codes {
    /// Every input decoded successfully under the strict set.
    pub const SUCCESS: i32 = 0;
    /// At least one input could not be decoded (or resorted to replacement).
    pub const DECODE_FAILED: i32 = 1;
}

pub fn run(args: DecodeArgs) -> Result<i32> {
    let inputs = read_inputs(&args.files)?;
    let labels: Vec<&str> = args.tries.iter().map(String::as_str).collect();
    let mut exit_code = exit_codes::SUCCESS;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (name, bytes) in inputs {
        let result = decode::decode(&bytes, &labels, args.replace);

        // `ok=false` with `encoding == "utf-8-replace"` is the replace-mode
        // fallback (§4.11/§7): degraded, not empty. Its text still belongs
        // on stdout; only a genuinely empty result is a hard failure.
        if !result.ok && result.encoding != "utf-8-replace" {
            exit_code = exit_code.max(exit_codes::DECODE_FAILED);
            eprintln!(
                "{name}: decode failed (tried: {tries})",
                tries = result.attempts.join(", "),
            );
            continue;
        }

        if !result.ok {
            exit_code = exit_code.max(exit_codes::DECODE_FAILED);
            eprintln!("{name}: decoded with replacement characters (utf-8-replace)");
        }

        out.write_all(result.text.as_bytes())
            .with_context(|| format!("writing decoded output for {name}"))?;
    }

    Ok(exit_code)
}
