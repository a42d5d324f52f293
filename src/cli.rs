use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use concept_engine::Route;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Concept Engine - compose explanatory text from a checkbox tree
#[derive(Parser, Debug)]
#[command(name = "concept-engine")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'concept-engine' without arguments to browse the concept tree.")]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./concept-engine.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Concept tree asset (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub tree: Option<PathBuf>,

    /// Fragment dictionary asset (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub text: Option<PathBuf>,

    /// Colorize output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the concept tree interactively
    Browse,

    /// Print the text for a selection of concepts
    Render {
        /// Toggle the checkbox at ROUTE (e.g. 1-0); repeat to click several
        #[arg(short = 't', long = "toggle", value_name = "ROUTE")]
        toggles: Vec<Route>,
    },

    /// Print the concept tree with every branch expanded
    Tree {
        /// Toggle the checkbox at ROUTE before printing
        #[arg(short = 't', long = "toggle", value_name = "ROUTE")]
        toggles: Vec<Route>,
    },

    /// Validate the tree and fragment assets
    Check,
}
