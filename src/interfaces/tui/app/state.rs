//! App state definition and basic state management

use std::time::Instant;

use url::Url;

use crate::interfaces::tui::constants::MAX_URL_INPUT_LENGTH;
use crate::services::{Session, ShareOutcome, ShortenerService};

pub enum CurrentScreen {
    Main,
    Help,
    Exiting,
}

pub struct App {
    pub service: ShortenerService,
    pub session: Session,
    pub current_screen: CurrentScreen,

    // Form validation, shown under the input field
    pub validation_error: Option<String>,

    // Status line
    pub status_message: String,
    pub error_message: String,
}

impl App {
    /// Probe the backend once and build the app around the result
    pub async fn new() -> App {
        let mut service = ShortenerService::from_config();
        service.probe().await;
        Self::with_service(service)
    }

    /// Build from an already-probed service (used by tests)
    pub fn with_service(service: ShortenerService) -> App {
        let mut session = Session::new();
        session.set_mode(service.is_demo());

        App {
            service,
            session,
            current_screen: CurrentScreen::Main,
            validation_error: None,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    // ---- input editing ----

    pub fn push_input(&mut self, c: char) {
        if self.session.is_loading() || self.session.long_url.len() >= MAX_URL_INPUT_LENGTH {
            return;
        }
        self.session.long_url.push(c);
        self.validation_error = None;
    }

    pub fn pop_input(&mut self) {
        if self.session.is_loading() {
            return;
        }
        self.session.long_url.pop();
        self.validation_error = None;
    }

    pub fn clear_input(&mut self) {
        if self.session.is_loading() {
            return;
        }
        self.session.long_url.clear();
        self.validation_error = None;
    }

    // ---- operations ----

    /// Submit the form. Empty input is a no-op; invalid input only sets
    /// the validation error. The loading guard in `Session::submit`
    /// prevents overlapping attempts.
    pub async fn submit_shorten(&mut self) {
        let input = self.session.long_url.trim().to_string();
        if input.is_empty() {
            return;
        }
        if let Err(msg) = validate_input(&input) {
            self.validation_error = Some(msg);
            return;
        }
        if !self.session.submit() {
            return;
        }

        match self.service.shorten(&input).await {
            Ok(short_url) => {
                self.session.resolve_success(short_url);
                self.set_status("Construction complete".to_string());
            }
            Err(err) => {
                let degraded = self.service.is_demo();
                self.session.resolve_failure(degraded);
                if degraded {
                    // Mid-flight degradation is silent; the mode badge is
                    // the only user-facing surface
                    self.set_status("Backend lost, continuing offline".to_string());
                } else {
                    self.set_error(format!("Shorten failed: {}", err));
                }
            }
        }
    }

    pub fn copy_short_url(&mut self) {
        if self.session.short_url.is_empty() {
            return;
        }
        match self.service.copy(&self.session.short_url) {
            Ok(()) => {
                self.session.mark_copied(Instant::now());
                self.set_status("Copied to clipboard".to_string());
            }
            Err(e) => self.set_error(e.format_simple()),
        }
    }

    pub fn share_short_url(&mut self) {
        if self.session.short_url.is_empty() {
            return;
        }
        match self.service.share(&self.session.short_url) {
            Ok(ShareOutcome::Shared) => self.set_status("Handed off to share target".to_string()),
            Ok(ShareOutcome::CopiedFallback) => {
                self.session.mark_copied(Instant::now());
                self.set_status("Copied to clipboard (no share capability)".to_string());
            }
            Err(e) => self.set_error(e.format_simple()),
        }
    }

    /// Idle tick from the event loop
    pub fn on_tick(&mut self) {
        self.session.tick(Instant::now());
    }

    // ---- status line ----

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }
}

fn validate_input(input: &str) -> Result<(), String> {
    let parsed = Url::parse(input).map_err(|_| "INVALID URL".to_string())?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("UNSUPPORTED SCHEME: {}", parsed.scheme()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientError, DemoShortenerApi, ShortenerApi};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    struct DownApi;

    #[async_trait]
    impl ShortenerApi for DownApi {
        async fn check_health(&self) -> bool {
            false
        }

        async fn shorten(&self, _long_url: &str) -> Result<String, ClientError> {
            Err(ClientError::Transport("down".into()))
        }
    }

    fn demo_api() -> Arc<dyn ShortenerApi> {
        Arc::new(DemoShortenerApi::new(
            "http://demo.archlinks.com",
            Duration::ZERO,
        ))
    }

    async fn demo_mode_app() -> App {
        let mut service = ShortenerService::new(Arc::new(DownApi), demo_api());
        service.probe().await;
        App::with_service(service)
    }

    #[tokio::test]
    async fn test_probe_failure_marks_session_demo() {
        let app = demo_mode_app().await;
        assert!(app.session.demo);
    }

    #[tokio::test]
    async fn test_submit_empty_input_is_noop() {
        let mut app = demo_mode_app().await;
        app.submit_shorten().await;
        assert!(app.session.short_url.is_empty());
        assert!(!app.session.is_loading());
        assert!(app.status_message.is_empty());
    }

    #[tokio::test]
    async fn test_submit_invalid_input_sets_validation_error() {
        let mut app = demo_mode_app().await;
        app.session.long_url = "not a url".to_string();
        app.submit_shorten().await;

        assert_eq!(app.validation_error.as_deref(), Some("INVALID URL"));
        assert!(app.session.short_url.is_empty());
    }

    #[tokio::test]
    async fn test_submit_in_demo_mode_yields_demo_url() {
        let mut app = demo_mode_app().await;
        app.session.long_url = "https://example.com/long/path".to_string();
        app.submit_shorten().await;

        assert!(
            app.session
                .short_url
                .starts_with("http://demo.archlinks.com/")
        );
        assert!(!app.session.is_loading());
    }

    #[tokio::test]
    async fn test_transport_failure_degrades_session() {
        // Healthy probe, then the transport dies mid-flight
        struct FlakyApi;

        #[async_trait]
        impl ShortenerApi for FlakyApi {
            async fn check_health(&self) -> bool {
                true
            }

            async fn shorten(&self, _long_url: &str) -> Result<String, ClientError> {
                Err(ClientError::Transport("connection reset".into()))
            }
        }

        let mut service = ShortenerService::new(Arc::new(FlakyApi), demo_api());
        service.probe().await;
        let mut app = App::with_service(service);
        assert!(!app.session.demo);

        app.session.long_url = "https://example.com".to_string();
        app.submit_shorten().await;

        assert!(app.session.demo);
        assert!(!app.session.is_loading());
        assert!(app.error_message.is_empty(), "degradation must be silent");

        // The next submission succeeds through the demo path
        app.submit_shorten().await;
        assert!(
            app.session
                .short_url
                .starts_with("http://demo.archlinks.com/")
        );
    }

    #[tokio::test]
    async fn test_input_editing_frozen_while_loading() {
        let mut app = demo_mode_app().await;
        app.session.long_url = "https://example.com".to_string();
        assert!(app.session.submit());

        app.push_input('x');
        app.pop_input();
        app.clear_input();
        assert_eq!(app.session.long_url, "https://example.com");
    }

    #[test]
    fn test_validate_input_schemes() {
        assert!(validate_input("https://example.com").is_ok());
        assert!(validate_input("http://example.com").is_ok());
        assert!(validate_input("ftp://example.com").is_err());
        assert!(validate_input("nonsense").is_err());
    }
}
