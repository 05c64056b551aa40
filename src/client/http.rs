//! Live HTTP implementation of the shortener API
//!
//! Blocking `ureq` calls executed on the tokio blocking pool.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use ureq::Agent;
use ureq::http::header::CONTENT_TYPE;

use super::{ClientError, ShortenRequest, ShortenResponse, ShortenerApi};

/// Live client against the ArchLinks backend.
///
/// Holds two agents: the probe agent carries the hard health-check timeout,
/// the shorten agent has no explicit deadline (re-submission is prevented
/// upstream by the loading guard, not by cancellation).
pub struct HttpShortenerApi {
    probe_agent: Agent,
    agent: Agent,
    base_url: String,
}

impl HttpShortenerApi {
    pub fn new(base_url: &str, health_timeout: Duration) -> Self {
        let probe_agent: Agent = Agent::config_builder()
            .timeout_global(Some(health_timeout))
            .http_status_as_error(false)
            .build()
            .into();
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            probe_agent,
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build from the global configuration
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        Self::new(
            &config.api.base_url,
            Duration::from_millis(config.api.health_timeout_ms),
        )
    }

    /// Probe `/health` (sync, runs in spawn_blocking).
    ///
    /// Unreachable when the request errors or times out, when the body is
    /// HTML (an SPA fallback route answering in place of the backend), or
    /// when the status is non-2xx.
    fn probe_sync(agent: &Agent, url: &str) -> bool {
        let resp = match agent.get(url).call() {
            Ok(r) => r,
            Err(e) => {
                debug!("health probe to \"{}\" failed: {}", url, e);
                return false;
            }
        };

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if content_type.contains("text/html") {
            debug!("health probe answered with HTML, treating backend as down");
            return false;
        }

        resp.status().is_success()
    }

    /// POST the shorten request (sync, runs in spawn_blocking)
    fn shorten_sync(agent: &Agent, url: &str, long_url: String) -> Result<String, ClientError> {
        let resp = agent
            .post(url)
            .send_json(ShortenRequest { long_url })
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
            });
        }

        let body: ShortenResponse = resp
            .into_body()
            .read_json()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(body.short_url)
    }
}

#[async_trait]
impl ShortenerApi for HttpShortenerApi {
    async fn check_health(&self) -> bool {
        // Cache-busting timestamp so intermediaries can't answer for the backend
        let url = format!(
            "{}/health?t={}",
            self.base_url,
            chrono::Utc::now().timestamp_millis()
        );
        let agent = self.probe_agent.clone();

        tokio::task::spawn_blocking(move || Self::probe_sync(&agent, &url))
            .await
            .unwrap_or_else(|e| {
                warn!("health probe task failed: {}", e);
                false
            })
    }

    async fn shorten(&self, long_url: &str) -> Result<String, ClientError> {
        let url = format!("{}/api/v1/shorten", self.base_url);
        let agent = self.agent.clone();
        let long_url = long_url.to_string();

        tokio::task::spawn_blocking(move || Self::shorten_sync(&agent, &url, long_url))
            .await
            .map_err(|e| ClientError::Transport(format!("worker task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpShortenerApi::new("http://127.0.0.1:5003/", Duration::from_secs(2));
        assert_eq!(api.base_url, "http://127.0.0.1:5003");
    }

    /// A probe against a non-routable address must classify as unreachable
    /// within the configured timeout.
    /// Depends on the network stack; may behave differently in CI.
    #[tokio::test]
    #[ignore]
    async fn test_probe_unroutable_is_unreachable() {
        // TEST-NET address, not routable
        let api = HttpShortenerApi::new("http://192.0.2.1", Duration::from_millis(200));
        assert!(!api.check_health().await);
    }

    /// A shorten against a refused local port must surface as Transport.
    /// Depends on the network stack; may behave differently in CI.
    #[tokio::test]
    #[ignore]
    async fn test_shorten_refused_is_transport_error() {
        // Discard port, normally closed
        let api = HttpShortenerApi::new("http://127.0.0.1:9", Duration::from_millis(200));
        let err = api.shorten("https://example.com").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)), "got: {:?}", err);
        assert!(err.degrades_to_demo());
    }
}
