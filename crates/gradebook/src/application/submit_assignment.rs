//! Submit Assignment Use Case
//!
//! The full submission workflow: gate, persist, notify. The notification
//! is part of the transaction from the caller's point of view; if the
//! event cannot be dispatched the submission fails even though the row is
//! already in the store.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entity::{Principal, Submission};
use crate::domain::notifier::{SubmissionEvent, SubmissionNotifier};
use crate::domain::policy::evaluate_submission;
use crate::domain::repository::{AssignmentRepository, SubmissionRepository};
use crate::domain::value_object::SubmissionUrl;
use crate::error::{GradebookError, GradebookResult};

/// Submit assignment use case
pub struct SubmitAssignmentUseCase<R, N>
where
    R: AssignmentRepository + SubmissionRepository,
    N: SubmissionNotifier,
{
    store: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> SubmitAssignmentUseCase<R, N>
where
    R: AssignmentRepository + SubmissionRepository + Sync,
    N: SubmissionNotifier + Sync,
{
    pub fn new(store: Arc<R>, notifier: Arc<N>) -> Self {
        Self { store, notifier }
    }

    /// Any authenticated account may submit; submissions are not
    /// owner-scoped. `candidate_url` is the raw value from the request
    /// body, possibly absent.
    pub async fn execute(
        &self,
        principal: &Principal,
        assignment_id: Uuid,
        candidate_url: Option<String>,
    ) -> GradebookResult<Submission> {
        let candidate_url = candidate_url.unwrap_or_default();

        // A blank URL is rejected before any store access; the gate below
        // repeats the check so its decision order holds regardless.
        if candidate_url.trim().is_empty() {
            return Err(GradebookError::MissingSubmissionUrl);
        }

        let assignment = self.store.find_assignment_by_id(assignment_id).await?;

        // Count prior attempts only for an assignment that exists. The
        // count is best-effort serialized: a concurrent submission between
        // the count and the insert can land one extra attempt.
        let prior_attempts = match &assignment {
            Some(_) => {
                self.store
                    .count_submissions(assignment_id, &principal.email)
                    .await?
            }
            None => 0,
        };

        let accepted = evaluate_submission(
            &candidate_url,
            assignment.as_ref(),
            Utc::now(),
            prior_attempts,
        )?;

        let submission_url = SubmissionUrl::new(candidate_url)?;
        let submission = Submission::new(assignment_id, submission_url, principal.email.clone());

        self.store.insert_submission(&submission).await?;

        let event = SubmissionEvent {
            user_email: submission.submitted_by.clone(),
            submission_url: submission.submission_url.as_str().to_string(),
            submission_count: accepted.attempt_number,
            assignment_id,
        };
        self.notifier.publish(&event).await?;

        tracing::info!(
            assignment_id = %assignment_id,
            submitted_by = %submission.submitted_by,
            attempt = accepted.attempt_number,
            "submission accepted"
        );

        Ok(submission)
    }
}
