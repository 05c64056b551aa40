//! CLI interface module
//!
//! One-shot commands for scripted use; the TUI is the interactive surface.

pub mod commands;

use std::fmt;

use crate::cli::Commands;

#[derive(Debug)]
pub enum CliError {
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::ArchlinksError> for CliError {
    fn from(err: crate::errors::ArchlinksError) -> Self {
        CliError::CommandError(err.format_simple())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI mode is dispatched before command handling".to_string(),
        )),
        Commands::Shorten { url, copy } => commands::shorten(url, copy).await,
        Commands::Health => commands::health().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let err = CliError::CommandError("backend returned HTTP 500".to_string());
        let s = format!("{}", err);
        assert!(s.contains("Command error"), "got: {}", s);
        assert!(s.contains("HTTP 500"), "got: {}", s);
    }

    #[test]
    fn test_cli_error_from_archlinks_error() {
        let err: CliError = crate::errors::ArchlinksError::validation("empty URL").into();
        assert!(matches!(err, CliError::CommandError(_)));
        assert!(err.to_string().contains("empty URL"));
    }
}
