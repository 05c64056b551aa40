//! Demo-mode implementation of the shortener API
//!
//! Fabricates short URLs locally when the backend is unreachable. Never
//! fails; the artificial delay keeps the UI behaving like a real request
//! and is set to zero in tests.

use std::iter;
use std::time::Duration;

use async_trait::async_trait;

use super::{ClientError, ShortenerApi};

/// Length of a fabricated short code
pub const DEMO_CODE_LENGTH: usize = 5;

const DEMO_CODE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random demo short code, lowercase base-36
pub fn generate_demo_code(length: usize) -> String {
    iter::repeat_with(|| DEMO_CODE_CHARS[rand::random_range(0..DEMO_CODE_CHARS.len())] as char)
        .take(length)
        .collect()
}

/// Local, always-succeeding stand-in for the backend.
pub struct DemoShortenerApi {
    base_url: String,
    delay: Duration,
}

impl DemoShortenerApi {
    pub fn new(base_url: &str, delay: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            delay,
        }
    }

    /// Build from the global configuration
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        Self::new(
            &config.api.demo_base_url,
            Duration::from_millis(config.api.demo_delay_ms),
        )
    }
}

#[async_trait]
impl ShortenerApi for DemoShortenerApi {
    /// The local generator is always reachable.
    async fn check_health(&self) -> bool {
        true
    }

    async fn shorten(&self, _long_url: &str) -> Result<String, ClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(format!(
            "{}/{}",
            self.base_url,
            generate_demo_code(DEMO_CODE_LENGTH)
        ))
    }
}
