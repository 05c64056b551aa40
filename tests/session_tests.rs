//! Session state machine integration tests
//!
//! The transition-level properties: loading discipline, the empty-submit
//! no-op, demo latching and the copied flash.

use std::time::{Duration, Instant};

use archlinks::services::{COPY_FLASH, Phase, Session};

#[cfg(test)]
mod loading_tests {
    use super::*;

    #[test]
    fn test_loading_holds_only_between_submit_and_resolution() {
        let mut session = Session::new();
        session.long_url = "https://example.com".to_string();

        assert!(!session.is_loading());
        assert!(session.submit());
        assert!(session.is_loading());

        session.resolve_success("http://demo.archlinks.com/ab12c".to_string());
        assert!(!session.is_loading());

        assert!(session.submit());
        session.resolve_failure(false);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_loading_guard_blocks_resubmission() {
        let mut session = Session::new();
        session.long_url = "https://example.com".to_string();

        assert!(session.submit());
        assert!(!session.submit());
        assert_eq!(session.phase, Phase::Submitting);
    }
}

#[cfg(test)]
mod submission_tests {
    use super::*;

    #[test]
    fn test_empty_submission_is_a_noop() {
        let mut session = Session::new();
        let before = session.phase;

        assert!(!session.submit());
        assert_eq!(session.phase, before);
        assert!(session.short_url.is_empty());
    }

    #[test]
    fn test_short_url_empty_until_first_success() {
        let mut session = Session::new();
        session.long_url = "https://example.com".to_string();

        session.submit();
        assert!(session.short_url.is_empty());
        session.resolve_failure(false);
        assert!(session.short_url.is_empty());

        session.submit();
        session.resolve_success("http://demo.archlinks.com/x9y8z".to_string());
        assert_eq!(session.short_url, "http://demo.archlinks.com/x9y8z");
    }

    #[test]
    fn test_degrading_failure_latches_demo() {
        let mut session = Session::new();
        session.long_url = "https://example.com".to_string();

        session.submit();
        session.resolve_failure(true);
        assert!(session.demo);
        assert_eq!(session.phase, Phase::Failed);
    }
}

#[cfg(test)]
mod copied_flag_tests {
    use super::*;

    #[test]
    fn test_copied_true_immediately_false_after_flash() {
        let mut session = Session::new();
        let t0 = Instant::now();

        session.mark_copied(t0);
        assert!(session.copied(t0));
        assert!(!session.copied(t0 + COPY_FLASH));
    }

    #[test]
    fn test_copied_idempotent_across_repeated_copies() {
        let mut session = Session::new();
        let t0 = Instant::now();

        session.mark_copied(t0);
        session.mark_copied(t0);
        assert!(session.copied(t0 + Duration::from_millis(100)));

        session.tick(t0 + COPY_FLASH);
        assert!(!session.copied(t0 + COPY_FLASH));

        // Copying again after expiry restarts the flash
        session.mark_copied(t0 + COPY_FLASH);
        assert!(session.copied(t0 + COPY_FLASH + Duration::from_millis(100)));
    }
}
