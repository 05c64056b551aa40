//! ArchLinks - terminal client for the ArchLinks URL shortener
//!
//! This library provides the client-side functionality for the ArchLinks
//! service: a connectivity probe, a shortening client with a local demo
//! fallback, and the CLI/TUI interfaces on top of them.
//!
//! # Features
//! - **cli**: One-shot command-line interface (default)
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `client`: API seam with live HTTP and local demo implementations
//! - `services`: Session state machine and shortening orchestrator
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Execution mode routing
//! - `system`: Logging and clipboard glue

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod system;
