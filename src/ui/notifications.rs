//! Transient status notifications.
//!
//! Outcomes of background jobs land here instead of in modal dialogs. The
//! queue shows one notification at a time in the status bar and drops it
//! once its display time is up, so a burst of results is shown in order
//! rather than overwriting each other.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    ttl: Duration,
    /// When the current head became visible. The display clock starts when
    /// a notification reaches the front, not when it was pushed.
    shown_since: Option<Instant>,
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            ttl,
            shown_since: None,
        }
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.entries.push_back(Notification {
            message: message.into(),
            severity,
        });
        if self.shown_since.is_none() {
            self.shown_since = Some(Instant::now());
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    /// Advance the queue. Called once per application tick.
    pub fn tick(&mut self) {
        let Some(shown_since) = self.shown_since else {
            return;
        };
        if shown_since.elapsed() >= self.ttl {
            self.entries.pop_front();
            self.shown_since = if self.entries.is_empty() {
                None
            } else {
                Some(Instant::now())
            };
        }
    }

    /// The notification currently on display, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
