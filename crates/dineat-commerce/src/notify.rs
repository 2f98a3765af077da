//! Toast-style user notifications.
//!
//! Components report user-visible outcomes through the [`Notifier`] trait.
//! The embedding page decides how to show them; [`NotificationCenter`]
//! implements the toast semantics: one notification visible at a time, each
//! new one replacing the last, auto-dismissed after a fixed interval.

use std::cell::RefCell;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// How long a notification stays visible.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Lowercase name, also used as the CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    /// Font Awesome icon class.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-exclamation-circle",
            NotificationKind::Info => "fa-info-circle",
            NotificationKind::Warning => "fa-exclamation-triangle",
        }
    }

    /// Gradient start and end colours.
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            NotificationKind::Success => ("#38a169", "#2f855a"),
            NotificationKind::Error => ("#e53e3e", "#c53030"),
            NotificationKind::Info => ("#3182ce", "#2c5282"),
            NotificationKind::Warning => ("#d69e2e", "#b7791f"),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for user-visible notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);

    fn success(&self, message: &str) {
        self.notify(message, NotificationKind::Success);
    }

    fn error(&self, message: &str) {
        self.notify(message, NotificationKind::Error);
    }

    fn info(&self, message: &str) {
        self.notify(message, NotificationKind::Info);
    }

    fn warning(&self, message: &str) {
        self.notify(message, NotificationKind::Warning);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind);
    }
}

/// A notification as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Notification {
    /// Check whether the notification is still on screen at `now`.
    pub fn is_visible_at(&self, now: Instant, dismiss_after: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) < dismiss_after
    }
}

/// In-memory notification surface.
///
/// Keeps the current toast plus a full history, which the command line front
/// end and tests use to inspect what the user was told.
#[derive(Debug)]
pub struct NotificationCenter {
    current: RefCell<Option<Notification>>,
    history: RefCell<Vec<Notification>>,
    dismiss_after: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_dismiss_after(DEFAULT_DISMISS_AFTER)
    }

    pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
        Self {
            current: RefCell::new(None),
            history: RefCell::new(Vec::new()),
            dismiss_after,
        }
    }

    /// The notification visible right now, if any.
    pub fn current(&self) -> Option<Notification> {
        self.current_at(Instant::now())
    }

    /// The notification visible at `now`, if any.
    pub fn current_at(&self, now: Instant) -> Option<Notification> {
        self.current
            .borrow()
            .as_ref()
            .filter(|n| n.is_visible_at(now, self.dismiss_after))
            .cloned()
    }

    /// Every notification shown so far, oldest first.
    pub fn history(&self) -> Vec<Notification> {
        self.history.borrow().clone()
    }

    /// Messages shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.history
            .borrow()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    /// The most recent notification, visible or not.
    pub fn last(&self) -> Option<Notification> {
        self.history.borrow().last().cloned()
    }

    /// Dismiss the current notification early.
    pub fn dismiss(&self) {
        self.current.borrow_mut().take();
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: &str, kind: NotificationKind) {
        tracing::debug!(kind = kind.as_str(), message, "notification");
        let notification = Notification {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
        };
        // The new toast replaces whatever is on screen
        *self.current.borrow_mut() = Some(notification.clone());
        self.history.borrow_mut().push(notification);
    }
}
