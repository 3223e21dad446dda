//! # mdframe CLI
//!
//! Command-line interface for converting Markdown articles into
//! iframe-ready HTML pages.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(long, default_value = "mdframe.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Defaults to `build` on the configured input directory
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every Markdown file in a directory
    Build {
        /// Input directory (defaults to the configured `input_dir`)
        dir: Option<PathBuf>,
    },

    /// Convert a single Markdown file
    Convert {
        /// Markdown file to convert
        file: PathBuf,
    },

    /// Write a default configuration file
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None => commands::build_dir(&cli.config, None),
        Some(Commands::Build { dir }) => commands::build_dir(&cli.config, dir.as_deref()),
        Some(Commands::Convert { file }) => commands::convert_file(&cli.config, &file),
        Some(Commands::Init { path }) => commands::init_project(path.as_deref()),
    }
}
