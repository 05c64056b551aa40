//! Mode routing
//!
//! Unified entry points for the execution modes:
//! - TUI mode (interactive, the default)
//! - CLI mode (one-shot commands)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;
