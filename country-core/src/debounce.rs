//! Debouncing raw search input into committed values.
//!
//! # Design
//! The debouncer is a pure state machine over caller-supplied instants, so
//! the host decides how to wait (a timer, an event loop tick) and tests can
//! drive time explicitly.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before a value is committed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    input: String,
    last_change: Option<Instant>,
    committed: Option<String>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            input: String::new(),
            last_change: None,
            committed: None,
        }
    }

    /// Record a raw input change. Leading whitespace is dropped, matching
    /// what the user sees in the input slot.
    pub fn input(&mut self, value: &str, now: Instant) {
        self.input = value.trim_start().to_string();
        self.last_change = Some(now);
    }

    /// The raw value, updated on every change.
    pub fn value(&self) -> &str {
        &self.input
    }

    /// The last committed value, if any.
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// When the pending change commits, or `None` if nothing is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.last_change.map(|changed| changed + self.delay)
    }

    /// Commit the pending value once the quiet period has elapsed.
    ///
    /// Returns the newly committed value. A value equal to the previous
    /// commit is absorbed and yields `None`.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.last_change = None;
        if self.committed.as_deref() == Some(self.input.as_str()) {
            return None;
        }
        self.committed = Some(self.input.clone());
        self.committed.as_deref()
    }
}
