//! Shortening orchestrator
//!
//! Owns the live and demo API implementations plus the mode flag. The
//! probe runs once at startup; every submission reads the mode and
//! branches. Transport failures during a live shorten latch demo mode
//! for the remainder of the run.

use std::sync::Arc;

use tracing::{info, warn};

use crate::client::{ClientError, DemoShortenerApi, HttpShortenerApi, ShortenerApi};
use crate::errors::{ArchlinksError, Result};
use crate::system::clipboard;

/// What the share operation actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed off to the configured share command
    Shared,
    /// No share capability; copied to the clipboard instead
    CopiedFallback,
}

pub struct ShortenerService {
    live: Arc<dyn ShortenerApi>,
    demo: Arc<dyn ShortenerApi>,
    demo_mode: bool,
}

impl ShortenerService {
    pub fn new(live: Arc<dyn ShortenerApi>, demo: Arc<dyn ShortenerApi>) -> Self {
        Self {
            live,
            demo,
            demo_mode: false,
        }
    }

    /// Build the live + demo pair from the global configuration
    pub fn from_config() -> Self {
        Self::new(
            Arc::new(HttpShortenerApi::from_config()),
            Arc::new(DemoShortenerApi::from_config()),
        )
    }

    /// One-shot startup probe. Sets the mode flag; failures are silent to
    /// the user (the mode indicator is the only surface).
    pub async fn probe(&mut self) -> bool {
        let healthy = self.live.check_health().await;
        if healthy {
            info!("backend reachable, live mode");
        } else {
            warn!("backend unreachable, entering demo mode");
        }
        self.demo_mode = !healthy;
        healthy
    }

    pub fn is_demo(&self) -> bool {
        self.demo_mode
    }

    /// Shorten a URL according to the current mode.
    ///
    /// In demo mode this never fails. In live mode a transport failure
    /// latches demo mode before the error is returned; the caller decides
    /// what (if anything) to surface.
    pub async fn shorten(&mut self, long_url: &str) -> std::result::Result<String, ClientError> {
        if self.demo_mode {
            return self.demo.shorten(long_url).await;
        }

        match self.live.shorten(long_url).await {
            Ok(short_url) => Ok(short_url),
            Err(err) => {
                if err.degrades_to_demo() {
                    warn!("live shorten failed ({}), degrading to demo mode", err);
                    self.demo_mode = true;
                }
                Err(err)
            }
        }
    }

    /// Copy a short URL to the system clipboard
    pub fn copy(&self, short_url: &str) -> Result<()> {
        clipboard::copy_to_clipboard(short_url)
    }

    /// Share a short URL.
    ///
    /// Uses the configured share command when present; otherwise falls
    /// back to copy-and-notify. Errors only when even the clipboard
    /// fallback fails.
    pub fn share(&self, short_url: &str) -> Result<ShareOutcome> {
        let config = crate::config::get_config();

        if let Some(command) = config.share.command.as_deref()
            && !command.is_empty()
        {
            match std::process::Command::new(command)
                .arg(short_url)
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
            {
                Ok(_) => return Ok(ShareOutcome::Shared),
                Err(e) => {
                    let err = ArchlinksError::share_unavailable(format!(
                        "share command \"{}\" failed to start: {}",
                        command, e
                    ));
                    warn!("{}", err);
                }
            }
        }

        clipboard::copy_to_clipboard(short_url)?;
        Ok(ShareOutcome::CopiedFallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Live stand-in that is down for probes and fails every shorten
    struct FailingApi {
        error: ClientError,
    }

    #[async_trait]
    impl ShortenerApi for FailingApi {
        async fn check_health(&self) -> bool {
            false
        }

        async fn shorten(&self, _long_url: &str) -> std::result::Result<String, ClientError> {
            Err(self.error.clone())
        }
    }

    /// Live stand-in that is healthy and echoes a fixed short URL
    struct HealthyApi;

    #[async_trait]
    impl ShortenerApi for HealthyApi {
        async fn check_health(&self) -> bool {
            true
        }

        async fn shorten(&self, _long_url: &str) -> std::result::Result<String, ClientError> {
            Ok("http://arch.link/ab12c".to_string())
        }
    }

    fn demo_api() -> Arc<dyn ShortenerApi> {
        Arc::new(DemoShortenerApi::new(
            "http://demo.archlinks.com",
            std::time::Duration::ZERO,
        ))
    }

    #[tokio::test]
    async fn test_probe_failure_enters_demo_mode() {
        let mut service = ShortenerService::new(
            Arc::new(FailingApi {
                error: ClientError::Transport("down".into()),
            }),
            demo_api(),
        );

        assert!(!service.probe().await);
        assert!(service.is_demo());
    }

    #[tokio::test]
    async fn test_probe_success_stays_live() {
        let mut service = ShortenerService::new(Arc::new(HealthyApi), demo_api());
        assert!(service.probe().await);
        assert!(!service.is_demo());

        let short_url = service.shorten("https://example.com").await.unwrap();
        assert_eq!(short_url, "http://arch.link/ab12c");
    }

    #[tokio::test]
    async fn test_demo_mode_shorten_never_fails() {
        let mut service = ShortenerService::new(
            Arc::new(FailingApi {
                error: ClientError::Transport("down".into()),
            }),
            demo_api(),
        );
        service.probe().await;

        for _ in 0..16 {
            let short_url = service.shorten("https://example.com").await.unwrap();
            assert!(short_url.starts_with("http://demo.archlinks.com/"));
        }
    }

    #[tokio::test]
    async fn test_transport_failure_degrades_and_stays_demo() {
        let mut service = ShortenerService::new(
            Arc::new(FailingApi {
                error: ClientError::Transport("connection reset".into()),
            }),
            demo_api(),
        );
        // Probe says healthy in this scenario: mid-flight degradation
        service.demo_mode = false;

        let err = service.shorten("https://example.com").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(service.is_demo());

        // Subsequent attempts go through the demo path and succeed
        let short_url = service.shorten("https://example.com").await.unwrap();
        assert!(short_url.starts_with("http://demo.archlinks.com/"));
    }

    #[tokio::test]
    async fn test_api_error_does_not_degrade() {
        let mut service = ShortenerService::new(
            Arc::new(FailingApi {
                error: ClientError::Api { status: 429 },
            }),
            demo_api(),
        );
        service.demo_mode = false;

        let err = service.shorten("https://example.com").await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 429 }));
        assert!(!service.is_demo());
    }
}
