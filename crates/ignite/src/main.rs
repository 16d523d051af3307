//! ignite CLI - documentation site structure.
//!
//! Provides commands for:
//! - `build`: Extract page metadata and generate site constants
//! - `sections`: Print the top-level section order
//! - `sidebar`: Resolve a section's sidebar for a location

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, SectionsArgs, SidebarArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ignite - documentation site structure.
#[derive(Parser)]
#[command(name = "ignite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract page metadata and write site constants.
    Build(BuildArgs),
    /// Print top-level sections in display order.
    Sections(SectionsArgs),
    /// Resolve the sidebar for a section at a location.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(VERSION),
        Commands::Sections(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(VERSION),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
