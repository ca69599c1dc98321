//! API DTOs (Data Transfer Objects)
//!
//! Wire field names are snake_case, matching what existing clients send
//! and expect, typo included.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{Assignment, Submission};
use crate::domain::validate::AssignmentFields;

/// Request body for POST and PUT on assignments.
///
/// All fields optional at the parse stage; the field validator decides
/// which are required for the operation at hand. Unknown fields are
/// ignored, wrong-typed fields fail deserialization and turn into a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub num_of_attemps: Option<i32>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl From<AssignmentBody> for AssignmentFields {
    fn from(body: AssignmentBody) -> Self {
        AssignmentFields {
            name: body.name,
            points: body.points,
            num_of_attemps: body.num_of_attemps,
            deadline: body.deadline,
        }
    }
}

/// Response for assignment reads and creation
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub name: String,
    pub points: i32,
    pub num_of_attemps: i32,
    pub deadline: DateTime<Utc>,
    pub assignment_created: DateTime<Utc>,
    pub assignment_updated: DateTime<Utc>,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id,
            name: assignment.name,
            points: assignment.points,
            num_of_attemps: assignment.num_of_attemps,
            deadline: assignment.deadline,
            assignment_created: assignment.assignment_created,
            assignment_updated: assignment.assignment_updated,
        }
    }
}

/// Request body for POST /v3/assignments/{id}/submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub submission_url: Option<String>,
}

/// Response for an accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub submission_url: String,
    pub submission_date: DateTime<Utc>,
    pub submission_updated: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            assignment_id: submission.assignment_id,
            submission_url: submission.submission_url.into_db(),
            submission_date: submission.submission_date,
            submission_updated: submission.submission_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_response_omits_owner() {
        let assignment = Assignment::new(
            "homework 1".into(),
            10,
            3,
            Utc::now(),
            "owner@example.com".into(),
        );
        let json = serde_json::to_value(AssignmentResponse::from(assignment)).unwrap();
        // created_by is internal; responses never expose it.
        assert!(json.get("created_by").is_none());
        assert!(json.get("num_of_attemps").is_some());
    }

    #[test]
    fn test_assignment_body_tolerates_missing_fields() {
        let body: AssignmentBody = serde_json::from_str("{}").unwrap();
        assert!(body.name.is_none());
        assert!(body.deadline.is_none());
    }

    #[test]
    fn test_assignment_body_rejects_wrong_types() {
        assert!(serde_json::from_str::<AssignmentBody>(r#"{"points": "ten"}"#).is_err());
        assert!(serde_json::from_str::<AssignmentBody>(r#"{"deadline": "not a date"}"#).is_err());
    }
}
