//! Concept Engine CLI - compose explanatory text from a checkbox tree
//!
//! Usage: concept-engine [COMMAND]
//!
//! Commands:
//!   browse  Browse the concept tree interactively (default)
//!   render  Print the text for a selection of concepts
//!   tree    Print the concept tree with every branch expanded
//!   check   Validate the tree and fragment assets

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Workspace;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Browse));
    if !interactive || cli.verbose > 0 || std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        setup_logging(cli.verbose);
    }

    let workspace = Workspace::load(&cli)?;

    match &cli.command {
        None | Some(Commands::Browse) => commands::browse::cmd_browse(&workspace),
        Some(Commands::Render { toggles }) => commands::render::cmd_render(&workspace, toggles),
        Some(Commands::Tree { toggles }) => commands::tree::cmd_tree(&workspace, toggles),
        Some(Commands::Check) => {
            if !commands::check::cmd_check(&workspace)? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .with_target(verbosity > 1)
        .try_init();
}
