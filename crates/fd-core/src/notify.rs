//! Transient on-screen notifications
//!
//! Controllers report outcomes through the [`Notifier`] trait. The
//! [`NotificationCenter`] is the in-process sink: it stacks messages and
//! expires them after a fixed time to live.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default lifetime of a notification
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Unique identifier for a notification
pub type NotificationId = Uuid;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Fire-and-forget notification sink
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// A raised notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub raised_at: Instant,
}

/// Stack of live notifications
#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: Vec::new(),
        }
    }

    /// Raise a notification at an explicit instant
    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> NotificationId {
        let id = Uuid::new_v4();
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            raised_at: now,
        });
        id
    }

    /// Drop notifications older than the time to live
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.raised_at) < ttl);
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Live notifications, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    /// Time until the oldest live notification expires
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.items
            .iter()
            .map(|n| (n.raised_at + self.ttl).saturating_duration_since(now))
            .min()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Error | Severity::Warning => tracing::warn!(%severity, "{}", message),
            _ => tracing::info!(%severity, "{}", message),
        }
        self.push_at(message, severity, Instant::now());
    }
}
