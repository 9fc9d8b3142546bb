//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::project::GraphKind;

/// Build a paraphrase graph (GraphML) from a file of tokenized sentences.
#[derive(Parser, Debug, Clone)]
#[command(name = "paraphrase-graph")]
#[command(about = "Paraphrase graph builder (GraphML)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Args {
    /// Input file with one whitespace-tokenized sentence per line
    #[arg(value_name = "INPUT_FILENAME")]
    pub input_filename: PathBuf,

    /// Output directory for the GraphML file (defaults to the input's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// YAML configuration file (defaults to the bundled configuration)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Wrap every sentence in the configured start and end tokens
    #[arg(short, long)]
    pub end_points: bool,

    /// Kind of graph to build
    #[arg(short, long, value_enum, default_value_t = Mode::Paraphrase)]
    pub mode: Mode,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Default log level implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Graph construction mode.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Merge shared token chains into a paraphrase graph
    #[default]
    Paraphrase,
    /// Plain word automaton without merging
    Automaton,
}

impl From<Mode> for GraphKind {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Paraphrase => GraphKind::Paraphrase,
            Mode::Automaton => GraphKind::Automaton,
        }
    }
}
