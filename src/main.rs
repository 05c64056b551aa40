use clap::Parser;

use archlinks::cli::{Cli, Commands};
use archlinks::config::{get_config, init_config, init_config_from};
use archlinks::system::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.config.as_deref() {
        Some(path) => init_config_from(path),
        None => init_config(),
    }
    let config = get_config();

    match cli.command {
        // Interactive mode is the default
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => {
            // The terminal belongs to the UI; logs go to the configured
            // file, or nowhere
            let _guard = init_logging(&config.logging, true);
            archlinks::runtime::modes::run_tui()
                .await
                .map_err(|e| anyhow::anyhow!("TUI failed: {}", e))?;
        }
        #[cfg(not(feature = "tui"))]
        None => {
            eprintln!("No command given and TUI support is not compiled in.");
            eprintln!("Try: archlinks shorten <url>");
            std::process::exit(2);
        }
        #[cfg(feature = "cli")]
        Some(cmd) => {
            let _guard = init_logging(&config.logging, false);
            if let Err(e) = archlinks::runtime::modes::run_cli(cmd).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        #[allow(unreachable_patterns)]
        _ => {
            eprintln!("No interface features enabled in this build.");
            std::process::exit(2);
        }
    }

    Ok(())
}
