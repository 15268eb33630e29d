use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "sarna - Select and rank short-activating RNA target sites in a nucleotide sequence.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to scan windows.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a sequence and print every viable target window, best-ranked first.
    Select(SelectArgs),
    /// Explain how a single target window is filtered and scored.
    Evaluate(EvaluateArgs),
}

/// Arguments for the `select` subcommand.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Input file holding the sequence; the last whitespace-delimited token is used.
    /// Use '-' to read from standard input.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write results to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the target window length (default 19).
    #[arg(short = 'l', long, value_name = "INT")]
    pub window_length: Option<usize>,

    /// Override the homopolymer threshold; runs this long or longer are rejected (default 4).
    #[arg(short = 'r', long = "run-length", value_name = "INT")]
    pub run_length_threshold: Option<usize>,

    /// Emit only the N best-ranked candidates.
    #[arg(short = 'n', long, value_name = "INT")]
    pub limit: Option<usize>,

    /// Output format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// The target window to evaluate, e.g. GCATGCATCGATGCATCTA.
    #[arg(required = true, value_name = "TARGET")]
    pub target: String,

    /// Homopolymer threshold; runs this long or longer are rejected.
    #[arg(short = 'r', long = "run-length", value_name = "INT")]
    pub run_length_threshold: Option<usize>,
}
