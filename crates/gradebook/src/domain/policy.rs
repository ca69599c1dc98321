//! Policy engines
//!
//! The decision core of the service: pure, synchronous functions over
//! inputs the caller has already fetched. No store access, no clock access
//! (`now` is a parameter), no shared state.

use chrono::{DateTime, Utc};

use crate::domain::entity::Assignment;
use crate::error::GradebookError;

// ============================================================================
// Authorization Engine
// ============================================================================

/// Outcome of an owner-scoped operation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerDecision {
    Allowed,
    /// The assignment exists but belongs to someone else
    Denied,
    /// The assignment does not exist. Checked before ownership, so a
    /// missing resource never turns into a 403.
    NotFound,
}

impl OwnerDecision {
    /// Turn a decision into a result for use-case code.
    pub fn require(self) -> Result<(), GradebookError> {
        match self {
            OwnerDecision::Allowed => Ok(()),
            OwnerDecision::Denied => Err(GradebookError::Forbidden),
            OwnerDecision::NotFound => Err(GradebookError::AssignmentNotFound),
        }
    }
}

/// Decide whether `actor_email` may read, update, or delete the assignment.
///
/// Ownership is exact, case-sensitive string equality against
/// `created_by`. There is no role hierarchy and no admin override.
pub fn authorize_owner_operation(
    actor_email: &str,
    assignment: Option<&Assignment>,
) -> OwnerDecision {
    match assignment {
        None => OwnerDecision::NotFound,
        Some(assignment) if assignment.is_owned_by(actor_email) => OwnerDecision::Allowed,
        Some(_) => OwnerDecision::Denied,
    }
}

// ============================================================================
// Submission Policy Engine
// ============================================================================

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionRejection {
    /// Candidate URL absent or blank after trimming
    MissingUrl,
    /// Assignment does not exist
    NotFound,
    /// `now` is at or past the deadline
    DeadlinePassed,
    /// Prior attempts already reached `num_of_attemps`
    AttemptsExceeded,
}

impl From<SubmissionRejection> for GradebookError {
    fn from(rejection: SubmissionRejection) -> Self {
        match rejection {
            SubmissionRejection::MissingUrl => GradebookError::MissingSubmissionUrl,
            SubmissionRejection::NotFound => GradebookError::AssignmentNotFound,
            SubmissionRejection::DeadlinePassed => GradebookError::DeadlinePassed,
            SubmissionRejection::AttemptsExceeded => GradebookError::AttemptsExceeded,
        }
    }
}

/// An accepted submission and the attempt number it will become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedSubmission {
    /// 1-based attempt number: prior attempts + 1
    pub attempt_number: i64,
}

/// Decide whether a new submission may be accepted.
///
/// Gates run in order and short-circuit on the first failure:
/// 1. candidate URL non-blank after trimming
/// 2. assignment exists
/// 3. `now` strictly before the deadline
/// 4. `prior_attempts` strictly less than `num_of_attemps`
pub fn evaluate_submission(
    candidate_url: &str,
    assignment: Option<&Assignment>,
    now: DateTime<Utc>,
    prior_attempts: i64,
) -> Result<AcceptedSubmission, SubmissionRejection> {
    if candidate_url.trim().is_empty() {
        return Err(SubmissionRejection::MissingUrl);
    }

    let Some(assignment) = assignment else {
        return Err(SubmissionRejection::NotFound);
    };

    if now >= assignment.deadline {
        return Err(SubmissionRejection::DeadlinePassed);
    }

    if prior_attempts >= i64::from(assignment.num_of_attemps) {
        return Err(SubmissionRejection::AttemptsExceeded);
    }

    Ok(AcceptedSubmission {
        attempt_number: prior_attempts + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const OWNER: &str = "owner@example.com";
    const OTHER: &str = "other@example.com";

    fn assignment(attempts: i32, deadline: DateTime<Utc>) -> Assignment {
        Assignment::new("homework 1".into(), 10, attempts, deadline, OWNER.into())
    }

    fn open_assignment() -> Assignment {
        assignment(3, Utc::now() + Duration::days(1))
    }

    // ---- authorization engine ----

    #[test]
    fn test_owner_is_allowed() {
        let a = open_assignment();
        assert_eq!(
            authorize_owner_operation(OWNER, Some(&a)),
            OwnerDecision::Allowed
        );
    }

    #[test]
    fn test_non_owner_is_denied() {
        let a = open_assignment();
        assert_eq!(
            authorize_owner_operation(OTHER, Some(&a)),
            OwnerDecision::Denied
        );
    }

    #[test]
    fn test_ownership_is_case_sensitive() {
        let a = open_assignment();
        assert_eq!(
            authorize_owner_operation("Owner@example.com", Some(&a)),
            OwnerDecision::Denied
        );
    }

    #[test]
    fn test_missing_assignment_is_not_found_for_any_actor() {
        // Existence wins over ownership: nobody gets a Denied for a
        // resource that does not exist.
        assert_eq!(
            authorize_owner_operation(OWNER, None),
            OwnerDecision::NotFound
        );
        assert_eq!(
            authorize_owner_operation(OTHER, None),
            OwnerDecision::NotFound
        );
    }

    // ---- submission policy engine ----

    #[test]
    fn test_accept_counts_attempts_from_one() {
        let a = open_assignment();
        let now = Utc::now();
        let accepted = evaluate_submission("https://example.com/x", Some(&a), now, 0).unwrap();
        assert_eq!(accepted.attempt_number, 1);

        let accepted = evaluate_submission("https://example.com/x", Some(&a), now, 2).unwrap();
        assert_eq!(accepted.attempt_number, 3);
    }

    #[test]
    fn test_blank_url_rejected_before_existence() {
        // Gate 1 fires even when the assignment is also missing.
        for url in ["", "   ", "\t\n"] {
            assert_eq!(
                evaluate_submission(url, None, Utc::now(), 0),
                Err(SubmissionRejection::MissingUrl)
            );
        }
    }

    #[test]
    fn test_missing_assignment_rejected() {
        assert_eq!(
            evaluate_submission("https://example.com/x", None, Utc::now(), 0),
            Err(SubmissionRejection::NotFound)
        );
    }

    #[test]
    fn test_deadline_checked_before_attempts() {
        // Attempts already exhausted AND deadline passed: the deadline gate
        // fires first.
        let a = assignment(1, Utc::now() - Duration::hours(1));
        assert_eq!(
            evaluate_submission("https://example.com/x", Some(&a), Utc::now(), 5),
            Err(SubmissionRejection::DeadlinePassed)
        );
    }

    #[test]
    fn test_deadline_boundary_is_exclusive() {
        let deadline = Utc::now();
        let a = assignment(3, deadline);
        // At exactly the deadline the window is closed.
        assert_eq!(
            evaluate_submission("https://example.com/x", Some(&a), deadline, 0),
            Err(SubmissionRejection::DeadlinePassed)
        );
        // One microsecond earlier it is still open.
        let just_before = deadline - Duration::microseconds(1);
        assert!(evaluate_submission("https://example.com/x", Some(&a), just_before, 0).is_ok());
    }

    #[test]
    fn test_attempt_cap_is_strict() {
        let a = assignment(2, Utc::now() + Duration::days(1));
        let now = Utc::now();
        assert!(evaluate_submission("https://example.com/x", Some(&a), now, 1).is_ok());
        assert_eq!(
            evaluate_submission("https://example.com/x", Some(&a), now, 2),
            Err(SubmissionRejection::AttemptsExceeded)
        );
    }

    #[test]
    fn test_decisions_map_to_domain_errors() {
        assert!(matches!(
            GradebookError::from(SubmissionRejection::MissingUrl),
            GradebookError::MissingSubmissionUrl
        ));
        assert!(OwnerDecision::Allowed.require().is_ok());
        assert!(matches!(
            OwnerDecision::Denied.require(),
            Err(GradebookError::Forbidden)
        ));
        assert!(matches!(
            OwnerDecision::NotFound.require(),
            Err(GradebookError::AssignmentNotFound)
        ));
    }
}
