use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "b85",
    version,
    about = "Strict base85 codec for 4-byte-aligned binary data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode binary data (length must be a multiple of 4) to base85 text
    Encode(EncodeArgs),
    /// Decode base85 text back to binary data
    Decode(DecodeArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Input file (default: stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Wrap encoded text at this many symbols per line (0 = no wrapping)
    #[arg(long, default_value_t = 0)]
    pub wrap: usize,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DecodeArgs {
    /// Input file (default: stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Strip all ASCII whitespace before decoding (for wrapped input)
    #[arg(long)]
    pub ignore_whitespace: bool,
}
