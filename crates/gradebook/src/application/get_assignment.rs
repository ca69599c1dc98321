//! Get Assignment Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::{Assignment, Principal};
use crate::domain::policy::authorize_owner_operation;
use crate::domain::repository::AssignmentRepository;
use crate::error::{GradebookError, GradebookResult};

/// Get assignment use case
pub struct GetAssignmentUseCase<R>
where
    R: AssignmentRepository,
{
    assignment_repo: Arc<R>,
}

impl<R> GetAssignmentUseCase<R>
where
    R: AssignmentRepository,
{
    pub fn new(assignment_repo: Arc<R>) -> Self {
        Self { assignment_repo }
    }

    /// Fetch one assignment, owner only. Existence is decided before
    /// ownership, so a missing id is a not-found for everyone.
    pub async fn execute(&self, principal: &Principal, id: Uuid) -> GradebookResult<Assignment> {
        let assignment = self.assignment_repo.find_assignment_by_id(id).await?;

        authorize_owner_operation(&principal.email, assignment.as_ref()).require()?;

        assignment.ok_or(GradebookError::AssignmentNotFound)
    }
}
