//! Report client state and workflows
//!
//! [`ReportController`] owns the in-memory report list. Every handler in the
//! UI goes through it, and it reports what changed as [`ClientEvent`]s so the
//! view can rebuild itself from snapshots.

use crate::api::ReportApi;
use crate::history::ReportHistory;
use crate::notify::{Notice, Severity, StatusLine};
use crate::types::{ReportForm, ReportRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::AbortHandle;

pub const MSG_HISTORY_LOAD_FAILED: &str = "Failed to load report history from the server";
pub const MSG_GENERATING: &str = "Generating report…";
pub const MSG_GENERATED_TOAST: &str = "Report generated! Download started";
pub const MSG_GENERATED_STATUS: &str = "Report generated successfully!";
pub const MSG_GENERATION_FAILED: &str = "Error generating report";
pub const MSG_COMMUNICATION_FAILED: &str = "Failed to communicate with the server";
pub const MSG_AUTO_REMOVED_FROM_SERVER: &str = "Report automatically removed from the server!";
pub const MSG_DOWNLOAD_STARTING: &str = "Starting download…";
pub const MSG_AUTO_REMOVED: &str = "Report removed automatically!";
pub const MSG_DELETED: &str = "Report deleted successfully!";
pub const MSG_CONFIRM_REMOVE: &str = "Do you really want to remove this report?";

/// State changes the view reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientEvent {
    /// Full snapshot of the list, most recent first
    History(Vec<ReportRecord>),
    Notice(Notice),
    Status(StatusLine),
    /// Ask the view to save a file via hyperlink navigation
    Download(DownloadRequest),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub filename: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Generated(ReportRecord),
    GenerationFailed,
    CommunicationFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(ReportRecord),
    Declined,
    NotFound,
}

/// Which workflow scheduled an auto-delete; decides the follow-up messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AutoDeleteOrigin {
    Generated,
    Downloaded,
}

struct PendingDelete {
    ticket: u64,
    handle: AbortHandle,
}

struct Inner {
    api: Arc<dyn ReportApi>,
    history: Mutex<ReportHistory>,
    pending: Mutex<HashMap<String, PendingDelete>>,
    next_ticket: AtomicU64,
    auto_delete_delay: Duration,
    events: UnboundedSender<ClientEvent>,
}

/// Cheaply cloneable handle to the shared client state
#[derive(Clone)]
pub struct ReportController {
    inner: Arc<Inner>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ReportController {
    pub fn new(
        api: Arc<dyn ReportApi>,
        auto_delete_delay: Duration,
    ) -> (Self, UnboundedReceiver<ClientEvent>) {
        let (events, receiver) = unbounded_channel();
        let controller = Self {
            inner: Arc::new(Inner {
                api,
                history: Mutex::new(ReportHistory::new()),
                pending: Mutex::new(HashMap::new()),
                next_ticket: AtomicU64::new(1),
                auto_delete_delay,
                events,
            }),
        };
        (controller, receiver)
    }

    /// Snapshot of the current list
    pub fn records(&self) -> Vec<ReportRecord> {
        lock(&self.inner.history).records().to_vec()
    }

    /// Number of auto-deletes that have not fired yet
    pub fn pending_auto_deletes(&self) -> usize {
        lock(&self.inner.pending).len()
    }

    /// Replace the list with the server's history.
    ///
    /// On failure the list is left exactly as it was.
    pub async fn load_history(&self) -> bool {
        match self.inner.api.history().await {
            Ok(entries) => {
                let records: Vec<ReportRecord> =
                    entries.into_iter().map(ReportRecord::from).collect();
                tracing::info!(count = records.len(), "report history loaded");
                self.mutate(|history| history.replace(records));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load report history");
                self.notice(MSG_HISTORY_LOAD_FAILED, Severity::Danger);
                false
            }
        }
    }

    /// Send the form for generation and track the resulting report
    pub async fn submit(&self, form: ReportForm) -> SubmitOutcome {
        self.status(MSG_GENERATING, Severity::Info);

        let response = match self.inner.api.generate(&form).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "report submission failed");
                self.notice(MSG_COMMUNICATION_FAILED, Severity::Danger);
                self.status(MSG_COMMUNICATION_FAILED, Severity::Danger);
                return SubmitOutcome::CommunicationFailed;
            }
        };

        let Some(pdf_name) = response.pdf_name.filter(|name| !name.is_empty()) else {
            tracing::warn!(error = ?response.error, "server did not return a report file");
            self.notice(MSG_GENERATION_FAILED, Severity::Danger);
            self.status(MSG_GENERATION_FAILED, Severity::Danger);
            return SubmitOutcome::GenerationFailed;
        };

        let record = ReportRecord::new(form.name, form.role, pdf_name);
        tracing::info!(pdf_name = %record.pdf_name, "report generated");

        let added = record.clone();
        self.mutate(move |history| history.prepend(added));
        self.notice(MSG_GENERATED_TOAST, Severity::Success);
        self.status(MSG_GENERATED_STATUS, Severity::Success);
        self.emit(ClientEvent::Download(DownloadRequest {
            url: self.inner.api.download_url(&record.pdf_name),
            filename: record.pdf_name.clone(),
        }));
        self.schedule_auto_delete(&record.pdf_name, AutoDeleteOrigin::Generated);

        SubmitOutcome::Generated(record)
    }

    /// Save a listed report, then delete it from the server after the delay.
    ///
    /// Returns `false` when the identifier is no longer listed.
    pub fn download(&self, pdf_name: &str) -> bool {
        let Some(record) = lock(&self.inner.history).get(pdf_name).cloned() else {
            tracing::debug!(pdf_name, "download requested for unknown report");
            return false;
        };

        self.notice(MSG_DOWNLOAD_STARTING, Severity::Info);
        self.status(MSG_DOWNLOAD_STARTING, Severity::Info);
        self.emit(ClientEvent::Download(DownloadRequest {
            url: self.inner.api.download_url(&record.pdf_name),
            filename: record.download_filename(),
        }));
        self.schedule_auto_delete(&record.pdf_name, AutoDeleteOrigin::Downloaded);
        true
    }

    /// Delete a listed report once the user has confirmed
    pub async fn remove(&self, pdf_name: &str, confirmation: Confirmation) -> RemoveOutcome {
        if confirmation == Confirmation::Declined {
            return RemoveOutcome::Declined;
        }
        let listed = lock(&self.inner.history).contains(pdf_name);
        if !listed {
            tracing::debug!(pdf_name, "remove requested for unknown report");
            return RemoveOutcome::NotFound;
        }

        self.cancel_auto_delete(pdf_name);
        self.delete_on_server(pdf_name).await;

        let removed = self.mutate(|history| history.remove(pdf_name));
        self.notice(MSG_DELETED, Severity::Secondary);
        match removed {
            Some(record) => RemoveOutcome::Removed(record),
            None => RemoveOutcome::NotFound,
        }
    }

    /// Start the delayed delete for a report.
    ///
    /// A report that already has one pending keeps its earlier deadline.
    fn schedule_auto_delete(&self, pdf_name: &str, origin: AutoDeleteOrigin) {
        // Held across the spawn so the task never checks before its entry exists
        let mut pending = lock(&self.inner.pending);
        if pending.contains_key(pdf_name) {
            tracing::debug!(pdf_name, ?origin, "auto-delete already pending");
            return;
        }

        let ticket = self.inner.next_ticket.fetch_add(1, Ordering::Relaxed);
        let controller = self.clone();
        let id = pdf_name.to_string();
        let delay = self.inner.auto_delete_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.run_auto_delete(&id, ticket, origin).await;
        });
        pending.insert(
            pdf_name.to_string(),
            PendingDelete {
                ticket,
                handle: task.abort_handle(),
            },
        );
        drop(pending);

        tracing::debug!(pdf_name, ?origin, ?delay, "auto-delete scheduled");
    }

    fn cancel_auto_delete(&self, pdf_name: &str) {
        if let Some(pending) = lock(&self.inner.pending).remove(pdf_name) {
            pending.handle.abort();
            tracing::debug!(pdf_name, "auto-delete cancelled");
        }
    }

    async fn run_auto_delete(&self, pdf_name: &str, ticket: u64, origin: AutoDeleteOrigin) {
        {
            let mut pending = lock(&self.inner.pending);
            // cancelled, possibly followed by a fresh schedule
            if pending.get(pdf_name).map(|entry| entry.ticket) != Some(ticket) {
                return;
            }
            pending.remove(pdf_name);
        }

        self.delete_on_server(pdf_name).await;
        self.mutate(|history| history.remove(pdf_name));
        tracing::info!(pdf_name, "report auto-deleted");

        match origin {
            AutoDeleteOrigin::Generated => {
                self.notice(MSG_AUTO_REMOVED_FROM_SERVER, Severity::Secondary);
                self.status(MSG_AUTO_REMOVED_FROM_SERVER, Severity::Secondary);
            }
            AutoDeleteOrigin::Downloaded => {
                self.notice(MSG_AUTO_REMOVED, Severity::Secondary);
            }
        }
    }

    async fn delete_on_server(&self, pdf_name: &str) {
        if let Err(err) = self.inner.api.delete(pdf_name).await {
            tracing::warn!(pdf_name, error = %err, "report deletion failed");
        }
    }

    /// Apply a change to the list and publish the new snapshot
    fn mutate<R>(&self, change: impl FnOnce(&mut ReportHistory) -> R) -> R {
        let (result, snapshot) = {
            let mut history = lock(&self.inner.history);
            let result = change(&mut history);
            (result, history.records().to_vec())
        };
        self.emit(ClientEvent::History(snapshot));
        result
    }

    fn notice(&self, message: &str, severity: Severity) {
        self.emit(ClientEvent::Notice(Notice::new(message, severity)));
    }

    fn status(&self, message: &str, severity: Severity) {
        self.emit(ClientEvent::Status(StatusLine::new(message, severity)));
    }

    fn emit(&self, event: ClientEvent) {
        if self.inner.events.send(event).is_err() {
            tracing::trace!("client event dropped; no listener");
        }
    }
}
