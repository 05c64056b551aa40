//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for archlinks using clap's derive macros.

use clap::{Parser, Subcommand};

/// ArchLinks - terminal client for the ArchLinks URL shortener
#[derive(Parser)]
#[command(name = "archlinks")]
#[command(version)]
#[command(about = "Terminal client for the ArchLinks URL shortener", long_about = None)]
pub struct Cli {
    /// Alternate configuration file (default: archlinks.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode (the default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL and print the result
    #[cfg(feature = "cli")]
    Shorten {
        /// The URL to shorten
        url: String,

        /// Also copy the short URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Probe backend connectivity
    #[cfg(feature = "cli")]
    Health,
}
