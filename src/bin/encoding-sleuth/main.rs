//! `encoding-sleuth` CLI: charset detection and strict decoding over files
//! or stdin.

use clap::{Parser, Subcommand};

mod decode;
mod detect;
mod io_util;

/// Process exit code for an I/O failure (couldn't read a file or stdin),
/// as opposed to a successful run that merely detected or decoded poorly.
const IO_ERROR: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "encoding-sleuth")]
#[command(about = "Charset detection and strict decoding", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Detect the encoding of one or more files (or stdin).
    Detect(detect::DetectArgs),
    /// Decode one or more files (or stdin) using a list of candidate encodings.
    Decode(decode::DecodeArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Detect(args) => detect::run(args),
        Command::Decode(args) => decode::run(args),
    };

    let exit_code = match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:?}");
            IO_ERROR
        }
    };

    std::process::exit(exit_code);
}
