//! Shorten command - one-shot URL shortening

use colored::Colorize;
use url::Url;

use crate::interfaces::cli::CliError;
use crate::services::ShortenerService;

/// Shorten a URL and print the result.
///
/// Probes the backend first, exactly as the TUI does at startup; an
/// unreachable backend drops the run into demo mode.
pub async fn shorten(long_url: String, copy: bool) -> Result<(), CliError> {
    validate_url(&long_url)?;

    let mut service = ShortenerService::from_config();
    if !service.probe().await {
        println!(
            "{} Backend unreachable, fabricating a demo link",
            "ℹ".bold().blue()
        );
    }

    let short_url = service
        .shorten(&long_url)
        .await
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    println!(
        "{} {} {} {}",
        "✓".bold().green(),
        long_url.dimmed(),
        "->".dimmed(),
        short_url.cyan().bold()
    );
    if service.is_demo() {
        println!("{} Demo link, resolves nowhere", "ℹ".bold().blue());
    }

    if copy {
        match service.copy(&short_url) {
            Ok(()) => println!("{} Copied to clipboard", "✓".bold().green()),
            Err(e) => println!("{} {}", "⚠".bold().yellow(), e.format_simple()),
        }
    }

    Ok(())
}

/// Pre-flight validation, standing in for the form's input checking
fn validate_url(long_url: &str) -> Result<(), CliError> {
    if long_url.trim().is_empty() {
        return Err(CliError::CommandError("URL must not be empty".to_string()));
    }

    let parsed = Url::parse(long_url)
        .map_err(|e| CliError::CommandError(format!("invalid URL \"{}\": {}", long_url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(CliError::CommandError(format!(
            "URL must use http or https, got \"{}\"",
            parsed.scheme()
        )));
    }

    Ok(())
}
