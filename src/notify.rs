//! Notification facade used by every page
//!
//! The storefront ships with notifications switched off: every call is
//! accepted and dropped, and confirmations are answered "yes" without asking
//! anyone. Pages only ever talk to [`NotificationManager`], so a notifier that
//! actually shows toasts or prompts can be dropped in without touching them.

use crate::config::NotificationMode;
use log::{error, info, warn};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_NOTIFICATION_ID: AtomicU64 = AtomicU64::new(1);

/// Hands out a fresh identifier; ids are unique per process, nothing more
pub fn next_notification_id() -> NotificationId {
    NotificationId(NEXT_NOTIFICATION_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
    Confirm,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Confirm => "confirm",
        };
        f.write_str(name)
    }
}

/// Something that can surface messages and ask yes/no questions
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str) -> NotificationId;

    /// Returns whether the user agreed
    fn confirm(&self, title: &str, message: &str) -> bool;

    fn remove(&self, _id: NotificationId) {}
}

/// Swallows everything and agrees to everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _kind: NotificationKind, _message: &str) -> NotificationId {
        next_notification_id()
    }

    fn confirm(&self, _title: &str, _message: &str) -> bool {
        true
    }
}

/// Sends notifications to the log instead of the screen; still agrees to everything
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) -> NotificationId {
        match kind {
            NotificationKind::Error => error!("[Notification] {}", message),
            NotificationKind::Warning => warn!("[Notification] {}", message),
            _ => info!("[Notification] {}: {}", kind, message),
        }
        next_notification_id()
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        info!("[Notification] auto-confirmed '{}': {}", title, message);
        true
    }
}

/// A notification request, optionally carrying a confirm continuation
pub struct Notification {
    pub kind: NotificationKind,
    pub title: Option<String>,
    pub message: String,
    on_confirm: Option<Box<dyn FnOnce() + Send>>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
            on_confirm: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn on_confirm(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("on_confirm", &self.on_confirm.is_some())
            .finish()
    }
}

/// Cheap-to-clone handle the pages use for all user feedback
#[derive(Clone)]
pub struct NotificationManager {
    notifier: Arc<dyn Notifier>,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationManager").finish_non_exhaustive()
    }
}

impl NotificationManager {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn silent() -> Self {
        Self::new(Arc::new(SilentNotifier))
    }

    pub fn from_mode(mode: NotificationMode) -> Self {
        match mode {
            NotificationMode::Silent => Self::silent(),
            NotificationMode::Log => Self::new(Arc::new(LogNotifier)),
        }
    }

    pub fn success(&self, message: &str) -> NotificationId {
        self.notifier.notify(NotificationKind::Success, message)
    }

    pub fn error(&self, message: &str) -> NotificationId {
        self.notifier.notify(NotificationKind::Error, message)
    }

    pub fn warning(&self, message: &str) -> NotificationId {
        self.notifier.notify(NotificationKind::Warning, message)
    }

    pub fn info(&self, message: &str) -> NotificationId {
        self.notifier.notify(NotificationKind::Info, message)
    }

    /// Generic entry point; a confirm-kind notification runs its continuation
    /// as soon as the notifier agrees
    pub fn show(&self, notification: Notification) -> NotificationId {
        let Notification {
            kind,
            title,
            message,
            on_confirm,
        } = notification;

        if kind == NotificationKind::Confirm {
            let affirmed = self.notifier.confirm(title.as_deref().unwrap_or(""), &message);
            if affirmed {
                if let Some(f) = on_confirm {
                    f();
                }
            }
            return next_notification_id();
        }

        self.notifier.notify(kind, &message)
    }

    /// Asks for confirmation and, if granted, calls `on_confirm` before returning
    pub fn confirm<F: FnOnce()>(&self, title: &str, message: &str, on_confirm: F) -> NotificationId {
        if self.notifier.confirm(title, message) {
            on_confirm();
        }
        next_notification_id()
    }

    /// Like [`confirm`](Self::confirm) but reports the answer instead of
    /// taking a continuation, for async callers
    pub fn ask(&self, title: &str, message: &str) -> bool {
        self.notifier.confirm(title, message)
    }

    pub fn remove(&self, id: NotificationId) {
        self.notifier.remove(id);
    }
}
