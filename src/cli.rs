//! Command-line interface for tidyscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Clean up a raw ASR segment stream into a deduplicated transcript
#[derive(Parser, Debug)]
#[command(
    name = "tidyscribe",
    version,
    about = "Clean up a raw ASR segment stream into a deduplicated transcript"
)]
pub struct Cli {
    /// Recorded engine run (JSON with language + segments, or a bare
    /// segment array). Use '-' to read from stdin.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress log output (quiet mode)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (-v: run summaries, -vv: per-segment decisions)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Jaccard similarity above which a segment is dropped as a near-duplicate
    #[arg(long, value_name = "RATIO")]
    pub similarity_threshold: Option<f64>,

    /// Language hint passed through to the engine (default: auto-detect)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Engine model size pass-through (tiny, base, small, medium, large-v3)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Engine compute device pass-through (cpu, cuda)
    #[arg(long, value_name = "DEVICE")]
    pub device: Option<String>,

    /// Pretty-print the JSON response envelope
    #[arg(long)]
    pub pretty: bool,
}
