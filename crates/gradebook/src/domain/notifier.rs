//! Notification Dispatcher contract
//!
//! The submission workflow publishes one event per accepted submission.
//! Transport lives in the infra layer; retry policy belongs to whatever
//! sits behind the endpoint, not to this service.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Event published after a submission is persisted.
///
/// Field names are camelCase on the wire; downstream consumers already
/// parse this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEvent {
    pub user_email: String,
    pub submission_url: String,
    /// 1-based attempt number of the submission this event announces
    pub submission_count: i64,
    pub assignment_id: Uuid,
}

/// Dispatch failures. Any of these fails the submission as a whole.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// Endpoint reachable but returned a non-success status
    #[error("notification endpoint returned status {0}")]
    BadStatus(u16),

    /// Endpoint unreachable, timed out, or the payload could not be sent
    #[error("notification transport error: {0}")]
    Transport(String),
}

/// Submission notifier trait
#[trait_variant::make(SubmissionNotifier: Send)]
pub trait LocalSubmissionNotifier {
    /// Publish one submission event. Success means the dispatcher accepted
    /// the event, nothing more.
    async fn publish(&self, event: &SubmissionEvent) -> Result<(), DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_camel_case() {
        let event = SubmissionEvent {
            user_email: "student@example.com".into(),
            submission_url: "https://example.com/work.zip".into(),
            submission_count: 2,
            assignment_id: Uuid::nil(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["userEmail"], "student@example.com");
        assert_eq!(json["submissionUrl"], "https://example.com/work.zip");
        assert_eq!(json["submissionCount"], 2);
        assert!(json.get("assignmentId").is_some());
    }
}
