//! Submission Entity
//!
//! One attempt against an assignment. Created only by the accept path of
//! the submission gate, never mutated or deleted afterwards.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::SubmissionUrl;

/// Submission entity
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub submission_url: SubmissionUrl,
    /// Submitter's email, a weak string reference like `created_by`
    pub submitted_by: String,
    pub submission_date: DateTime<Utc>,
    pub submission_updated: DateTime<Utc>,
}

impl Submission {
    /// Record a new submission with fresh timestamps.
    pub fn new(assignment_id: Uuid, submission_url: SubmissionUrl, submitted_by: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            assignment_id,
            submission_url,
            submitted_by,
            submission_date: now,
            submission_updated: now,
        }
    }
}
