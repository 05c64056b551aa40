//! Session state machine
//!
//! One `Session` per run, mutated only through its transition methods so
//! the Idle/Submitting/Succeeded/Failed machine stays easy to reason
//! about. Time-dependent state (the copied flash) takes `Instant` as an
//! argument instead of reading the clock, which keeps transitions pure.

use std::time::{Duration, Instant};

/// How long the copied flag stays set after a copy
pub const COPY_FLASH: Duration = Duration::from_secs(2);

/// Lifecycle of one shorten attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient per-run state. No persistence, no identity beyond the single
/// in-memory instance.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The URL being typed into the form
    pub long_url: String,
    /// Empty until a shorten (real or demo) succeeds
    pub short_url: String,
    pub phase: Phase,
    /// Demo mode: short URLs are fabricated locally
    pub demo: bool,
    copied_at: Option<Instant>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mode flag from the startup probe result
    pub fn set_mode(&mut self, demo: bool) {
        self.demo = demo;
    }

    /// Loading holds only between submission and resolution
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Begin a shorten attempt.
    ///
    /// Refuses (returning false, with no state change) when the input is
    /// empty or an attempt is already in flight; this is the loading guard that
    /// stands in for request cancellation.
    pub fn submit(&mut self) -> bool {
        if self.long_url.trim().is_empty() || self.is_loading() {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Resolve the in-flight attempt with a short URL
    pub fn resolve_success(&mut self, short_url: String) {
        self.short_url = short_url;
        self.phase = Phase::Succeeded;
    }

    /// Resolve the in-flight attempt with a failure.
    ///
    /// `degrade` latches demo mode for the rest of the session
    /// (mid-flight degradation on transport failure).
    pub fn resolve_failure(&mut self, degrade: bool) {
        if degrade {
            self.demo = true;
        }
        self.phase = Phase::Failed;
    }

    /// Record a clipboard copy. Repeated copies restart the flash.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the copied flag is currently shown
    pub fn copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_FLASH)
    }

    /// Expire the copied flag. Driven by the UI tick so the flag clears
    /// without further input.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.copied_at
            && now.saturating_duration_since(at) >= COPY_FLASH
        {
            self.copied_at = None;
        }
    }
}
