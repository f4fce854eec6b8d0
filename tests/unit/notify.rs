use async_trait::async_trait;
use incubator_backend::db::enums::ApplicationStatus;
use incubator_backend::notify::{
    LogNotifier, Notifier, NotifyError, StatusChangeNotification, notify_best_effort,
};
use std::sync::atomic::{AtomicUsize, Ordering};

struct FailingNotifier {
    attempts: AtomicUsize,
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify_status_change(
        &self,
        _notification: &StatusChangeNotification,
    ) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::Endpoint(502))
    }
}

fn notification() -> StatusChangeNotification {
    StatusChangeNotification {
        program_title: "Fall Hackathon".to_string(),
        applicant_name: "Ada Lovelace".to_string(),
        applicant_email: "ada@example.com".to_string(),
        old_status: ApplicationStatus::Submitted,
        new_status: ApplicationStatus::Approved,
    }
}

#[tokio::test]
async fn delivery_failure_is_swallowed() {
    // The status change has already been persisted by the time the
    // notification fires; a failing collaborator must not surface an error.
    let notifier = FailingNotifier {
        attempts: AtomicUsize::new(0),
    };
    notify_best_effort(&notifier, &notification()).await;
    assert_eq!(notifier.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn log_notifier_always_succeeds() {
    let result = LogNotifier.notify_status_change(&notification()).await;
    assert!(result.is_ok());
}
