//! Health command - probe backend connectivity

use colored::Colorize;

use crate::client::{HttpShortenerApi, ShortenerApi};
use crate::interfaces::cli::CliError;

/// Run the startup probe once and report the classification
pub async fn health() -> Result<(), CliError> {
    let config = crate::config::get_config();
    let base_url = if config.api.base_url.is_empty() {
        "(not configured)".to_string()
    } else {
        config.api.base_url.clone()
    };

    let api = HttpShortenerApi::from_config();
    if api.check_health().await {
        println!(
            "{} Backend {} is reachable",
            "✓".bold().green(),
            base_url.cyan()
        );
    } else {
        println!(
            "{} Backend {} is unreachable, sessions would run in demo mode",
            "⚠".bold().yellow(),
            base_url.cyan()
        );
    }

    Ok(())
}
