//! Applicant notification collaborator. Status transitions attach a
//! best-effort notification; delivery failure is logged and must never fail
//! or roll back the transition itself.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::db::enums::ApplicationStatus;

#[derive(Serialize, Clone, Debug)]
pub struct StatusChangeNotification {
    pub program_title: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub old_status: ApplicationStatus,
    pub new_status: ApplicationStatus,
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Notification endpoint returned status {0}")]
    Endpoint(u16),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_status_change(
        &self,
        notification: &StatusChangeNotification,
    ) -> Result<(), NotifyError>;
}

/// Delivers notifications to the configured mail-gateway webhook.
pub struct WebhookNotifier {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookNotifier {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client, endpoint }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify_status_change(
        &self,
        notification: &StatusChangeNotification,
    ) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(notification)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Endpoint(response.status().as_u16()));
        }
        Ok(())
    }
}

/// Used when no webhook is configured: records the notification in the log
/// and drops it.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify_status_change(
        &self,
        notification: &StatusChangeNotification,
    ) -> Result<(), NotifyError> {
        tracing::info!(
            applicant = %notification.applicant_email,
            old_status = %notification.old_status,
            new_status = %notification.new_status,
            "Notification webhook not configured, dropping status-change notification"
        );
        Ok(())
    }
}

/// Fire the side effect without letting it affect the caller. The transition
/// has already been persisted by the time this runs.
pub async fn notify_best_effort(notifier: &dyn Notifier, notification: &StatusChangeNotification) {
    if let Err(e) = notifier.notify_status_change(notification).await {
        tracing::warn!(
            applicant = %notification.applicant_email,
            error = %e,
            "Failed to send status-change notification"
        );
    }
}
