//! CLI handler for the `detect` subcommand.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use encoding_sleuth::detect;

use crate::io_util::read_inputs;

/// Detect the encoding of one or more files (or stdin).
#[derive(Debug, Parser)]
pub struct DetectArgs {
    /// Input files to inspect (reads from stdin if none provided).
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Exit codes for the `detect` subcommand.
pub mod exit_codes {
    /// Every input was identified without resorting to the final fallback.
    pub const SUCCESS: i32 = 0;
    /// At least one input's detection fell back to the inconclusive default.
    pub const INCONCLUSIVE: i32 = 1;
}

pub fn run(args: DetectArgs) -> Result<i32> {
    let inputs = read_inputs(&args.files)?;
    let mut exit_code = exit_codes::SUCCESS;

    for (name, bytes) in inputs {
        let result = detect::detect(&bytes);
        if result.used_fallback {
            exit_code = exit_code.max(exit_codes::INCONCLUSIVE);
        }

        match args.format {
            Format::Text => println!(
                "{name}: {encoding} (confidence {confidence:.2}{bom}{fallback})",
                encoding = result.encoding,
                confidence = result.confidence,
                bom = if result.detected_by_bom { ", bom" } else { "" },
                fallback = if result.used_fallback { ", fallback" } else { "" },
            ),
            Format::Json => {
                let payload = serde_json::json!({
                    "file": name,
                    "encoding": result.encoding,
                    "confidence": result.confidence,
                    "used_fallback": result.used_fallback,
                    "detected_by_bom": result.detected_by_bom,
                });
                println!("{}", serde_json::to_string(&payload)?);
            }
        }
    }

    Ok(exit_code)
}
