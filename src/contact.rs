//! "Contact the agent" modal: a small form that posts a message about a
//! property and closes itself shortly after a successful send.
//!
//! Lifecycle: `Idle -> Submitting -> Idle`, with the outcome of the last
//! attempt kept in [`ContactModal::last_outcome`]. A failed attempt keeps
//! whatever the visitor typed so they can retry straight away.

use crate::api::CatalogApi;
use crate::error::Result;
use crate::models::{ApiEnvelope, ContactMessage, ContactPayload};
use crate::notify::NotificationManager;
use log::{error, info, warn};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

pub const DEFAULT_PROPERTY_NAME: &str = "Properti";

const MSG_MISSING_FIELDS: &str = "Mohon lengkapi semua field yang wajib diisi";
const MSG_SENT: &str = "Pesan berhasil dikirim! Agent kami akan menghubungi Anda segera.";
const MSG_REJECTED: &str = "Gagal mengirim pesan. Silakan coba lagi.";
const MSG_UNEXPECTED: &str = "Terjadi kesalahan. Silakan coba lagi.";

pub type CloseHandler = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty; nothing was sent
    Invalid(&'static str),
    /// A previous submission is still in flight
    Busy,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

/// Where a click inside the overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Card,
}

pub struct ContactModal {
    api: Arc<dyn CatalogApi>,
    notifications: NotificationManager,
    property_name: String,
    form: ContactMessage,
    phase: ContactPhase,
    last_outcome: Option<SubmitOutcome>,
    on_close: Option<CloseHandler>,
    close_delay: Duration,
    pending_close: Option<JoinHandle<()>>,
}

impl ContactModal {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        notifications: NotificationManager,
        property_name: impl Into<String>,
        close_delay: Duration,
    ) -> Self {
        let property_name = property_name.into();
        Self {
            api,
            notifications,
            property_name: if property_name.is_empty() {
                DEFAULT_PROPERTY_NAME.to_string()
            } else {
                property_name
            },
            form: ContactMessage::default(),
            phase: ContactPhase::Idle,
            last_outcome: None,
            on_close: None,
            close_delay,
            pending_close: None,
        }
    }

    pub fn on_close(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(handler));
        self
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn form(&self) -> &ContactMessage {
        &self.form
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Phone => self.form.phone = value,
            ContactField::Message => self.form.message = value,
        }
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    /// Submit and cancel buttons are disabled while this is true
    pub fn is_busy(&self) -> bool {
        self.phase == ContactPhase::Submitting
    }

    pub fn last_outcome(&self) -> Option<SubmitOutcome> {
        self.last_outcome
    }

    /// Validates the form and enters `Submitting`, returning the payload to
    /// send. Hosts that drive the request themselves pair this with
    /// [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> std::result::Result<ContactPayload, SubmitOutcome> {
        if self.is_busy() {
            return Err(SubmitOutcome::Busy);
        }

        if let Some(field) = self.form.missing_required() {
            info!("[Contact] Not sending, {} is empty", field);
            self.notifications.error(MSG_MISSING_FIELDS);
            self.last_outcome = Some(SubmitOutcome::Invalid(field));
            return Err(SubmitOutcome::Invalid(field));
        }

        self.phase = ContactPhase::Submitting;
        Ok(self.form.to_payload(&self.property_name))
    }

    /// Applies the backend's answer and returns to `Idle`
    pub fn finish_submit(&mut self, reply: Result<ApiEnvelope<Value>>) -> SubmitOutcome {
        self.phase = ContactPhase::Idle;

        let outcome = match reply {
            Ok(envelope) if envelope.status_is_success() => {
                info!("[Contact] Message about {} sent", self.property_name);
                self.notifications.success(MSG_SENT);
                self.form.clear();
                self.schedule_close();
                SubmitOutcome::Sent
            }
            Ok(envelope) => {
                error!(
                    "[Contact] Backend refused message: {}",
                    envelope.message.as_deref().unwrap_or("no message")
                );
                self.notifications.error(MSG_REJECTED);
                SubmitOutcome::Failed
            }
            Err(e) => {
                error!("[Contact] Error sending message: {}", e);
                self.notifications.error(MSG_UNEXPECTED);
                SubmitOutcome::Failed
            }
        };

        self.last_outcome = Some(outcome);
        outcome
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };
        let reply = self.api.submit_contact(&payload).await;
        self.finish_submit(reply)
    }

    fn schedule_close(&mut self) {
        let Some(handler) = self.on_close.clone() else {
            return;
        };

        // Deadline is fixed now, not when the task first gets polled
        let deadline = Instant::now() + self.close_delay;
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                if let Some(previous) = self.pending_close.take() {
                    previous.abort();
                }
                self.pending_close = Some(runtime.spawn(async move {
                    sleep_until(deadline).await;
                    handler();
                }));
            }
            Err(_) => {
                warn!("[Contact] No async runtime to delay close, closing now");
                handler();
            }
        }
    }

    /// Whether a delayed close is still waiting to fire
    pub fn close_pending(&self) -> bool {
        self.pending_close
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Waits for the delayed close scheduled by a successful submit, if any
    pub async fn wait_for_close(&mut self) {
        if let Some(handle) = self.pending_close.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    error!("[Contact] Close task failed: {}", e);
                }
            }
        }
    }

    /// Close button; also used by the backdrop
    pub fn close(&mut self) {
        if let Some(pending) = self.pending_close.take() {
            pending.abort();
        }
        if let Some(handler) = &self.on_close {
            handler();
        }
    }

    /// Cancel button, disabled while a submission is in flight
    pub fn cancel(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.close();
        true
    }

    /// Clicking the dimmed backdrop closes; clicks on the card stay inside
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => {
                self.close();
                true
            }
            ClickTarget::Card => false,
        }
    }
}

impl Drop for ContactModal {
    fn drop(&mut self) {
        // A modal that is gone must not close whatever replaced it
        if let Some(pending) = self.pending_close.take() {
            pending.abort();
        }
    }
}

/// Holds the page's contact modal, if open, and drops it once it closes
#[derive(Default)]
pub struct ModalSlot {
    modal: Option<ContactModal>,
    closed: Arc<AtomicBool>,
}

impl ModalSlot {
    /// Shows `modal`, replacing any open one. The modal's own close handler
    /// still runs.
    pub fn open(&mut self, mut modal: ContactModal) -> &mut ContactModal {
        let closed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&closed);
        let inner = modal.on_close.take();
        modal.on_close = Some(Arc::new(move || {
            flag.store(true, Ordering::SeqCst);
            if let Some(inner) = &inner {
                inner();
            }
        }));
        self.closed = closed;
        self.modal.insert(modal)
    }

    fn reap(&mut self) {
        if self.closed.load(Ordering::SeqCst) {
            self.modal = None;
        }
    }

    pub fn get(&mut self) -> Option<&mut ContactModal> {
        self.reap();
        self.modal.as_mut()
    }

    pub fn is_open(&mut self) -> bool {
        self.reap();
        self.modal.is_some()
    }

    pub fn close(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.close();
        }
        self.modal = None;
    }
}
