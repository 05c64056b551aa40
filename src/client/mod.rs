//! Client layer for CLI/TUI interfaces
//!
//! Provides live-first with demo-fallback execution model.
//!
//! # Architecture
//!
//! ```text
//! CLI/TUI → ShortenerService ──→ HttpShortenerApi (backend reachable)
//!                              └→ DemoShortenerApi (backend unreachable)
//! ```
//!
//! # Fallback Policy
//!
//! - Health probe fails at startup → session starts in demo mode
//! - `ClientError::Transport` during a live shorten → session degrades to
//!   demo mode for the rest of the run (**not retried** against the real
//!   backend again this session)
//! - `ClientError::Api` (non-2xx) → returned as-is, mode unchanged

mod demo;
mod http;

pub use demo::DemoShortenerApi;
pub use http::HttpShortenerApi;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ArchlinksError;

// ============ Wire contract ============

/// Request body for `POST /api/v1/shorten`
#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

/// Response body for `POST /api/v1/shorten`, the sole wire contract
/// with the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

// ============ ClientError ============

/// Errors from the client layer
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Transport-level failure (connect, DNS, timeout); triggers demo degradation
    Transport(String),
    /// Backend answered with a non-success HTTP status; no degradation
    Api { status: u16 },
    /// Response body did not match the wire contract
    InvalidResponse(String),
}

impl ClientError {
    /// Whether this error degrades the session into demo mode.
    ///
    /// Only transport failures do; an HTTP error status means the backend
    /// is reachable and answering, just unhappy with the request.
    pub fn degrades_to_demo(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {}", msg),
            ClientError::Api { status } => write!(f, "backend returned HTTP {}", status),
            ClientError::InvalidResponse(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for ArchlinksError {
    fn from(err: ClientError) -> Self {
        ArchlinksError::network(err.to_string())
    }
}

// ============ API seam ============

/// The two operations the backend is reachable through.
///
/// Two implementations: [`HttpShortenerApi`] (live) and
/// [`DemoShortenerApi`] (deterministic local fake), so the demo-mode
/// fallback is unit-testable without network mocking.
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// One-shot connectivity probe. Failures of any kind classify as
    /// unreachable; this never errors.
    async fn check_health(&self) -> bool;

    /// Shorten a long URL, returning the short URL.
    async fn shorten(&self, long_url: &str) -> Result<String, ClientError>;
}
