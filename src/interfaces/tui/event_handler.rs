//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, CurrentScreen};

/// Handle keyboard input based on current screen.
///
/// Returns true when the application should exit.
pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key).await,
        CurrentScreen::Help => Ok(handle_help_screen(app, key)),
        CurrentScreen::Exiting => Ok(handle_exiting_screen(app, key)),
    }
}

/// Main screen: the form is always focused, so plain characters edit the
/// URL and the remaining operations live on control keys.
async fn handle_main_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.copy_short_url(),
            KeyCode::Char('s') => app.share_short_url(),
            KeyCode::Char('u') => app.clear_input(),
            KeyCode::Char('q') => app.current_screen = CurrentScreen::Exiting,
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Enter => app.submit_shorten().await,
        KeyCode::Backspace => app.pop_input(),
        KeyCode::Esc => app.current_screen = CurrentScreen::Exiting,
        KeyCode::F(1) => app.current_screen = CurrentScreen::Help,
        KeyCode::Char(c) => app.push_input(c),
        _ => {}
    }

    Ok(false)
}

fn handle_help_screen(app: &mut App, key: KeyEvent) -> bool {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::F(1)
    ) {
        app.current_screen = CurrentScreen::Main;
    }
    false
}

fn handle_exiting_screen(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientError, DemoShortenerApi, ShortenerApi};
    use crate::services::ShortenerService;
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

    async fn test_app() -> App {
        let mut service = ShortenerService::new(
            Arc::new(DownApi),
            Arc::new(DemoShortenerApi::new(
                "http://demo.archlinks.com",
                Duration::ZERO,
            )),
        );
        service.probe().await;
        App::with_service(service)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[tokio::test]
    async fn test_typing_edits_input() {
        let mut app = test_app().await;
        for c in "https://a.io".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)))
                .await
                .unwrap();
        }
        assert_eq!(app.session.long_url, "https://a.io");

        handle_key_event(&mut app, press(KeyCode::Backspace))
            .await
            .unwrap();
        assert_eq!(app.session.long_url, "https://a.i");
    }

    #[tokio::test]
    async fn test_ctrl_u_clears_input() {
        let mut app = test_app().await;
        app.session.long_url = "https://example.com".to_string();
        handle_key_event(&mut app, ctrl('u')).await.unwrap();
        assert!(app.session.long_url.is_empty());
    }

    #[tokio::test]
    async fn test_enter_submits_and_yields_demo_url() {
        let mut app = test_app().await;
        app.session.long_url = "https://example.com".to_string();
        handle_key_event(&mut app, press(KeyCode::Enter))
            .await
            .unwrap();
        assert!(
            app.session
                .short_url
                .starts_with("http://demo.archlinks.com/")
        );
    }

    #[tokio::test]
    async fn test_esc_opens_exit_confirm_and_n_cancels() {
        let mut app = test_app().await;
        handle_key_event(&mut app, press(KeyCode::Esc)).await.unwrap();
        assert!(matches!(app.current_screen, CurrentScreen::Exiting));

        let exit = handle_key_event(&mut app, press(KeyCode::Char('n')))
            .await
            .unwrap();
        assert!(!exit);
        assert!(matches!(app.current_screen, CurrentScreen::Main));
    }

    #[tokio::test]
    async fn test_exit_confirm_y_exits() {
        let mut app = test_app().await;
        app.current_screen = CurrentScreen::Exiting;
        let exit = handle_key_event(&mut app, press(KeyCode::Char('y')))
            .await
            .unwrap();
        assert!(exit);
    }

    #[tokio::test]
    async fn test_f1_toggles_help() {
        let mut app = test_app().await;
        handle_key_event(&mut app, press(KeyCode::F(1))).await.unwrap();
        assert!(matches!(app.current_screen, CurrentScreen::Help));

        handle_key_event(&mut app, press(KeyCode::Esc)).await.unwrap();
        assert!(matches!(app.current_screen, CurrentScreen::Main));
    }
}
