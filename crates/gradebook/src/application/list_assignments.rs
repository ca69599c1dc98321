//! List Assignments Use Case

use std::sync::Arc;

use crate::domain::entity::Assignment;
use crate::domain::repository::AssignmentRepository;
use crate::error::GradebookResult;

/// List assignments use case
pub struct ListAssignmentsUseCase<R>
where
    R: AssignmentRepository,
{
    assignment_repo: Arc<R>,
}

impl<R> ListAssignmentsUseCase<R>
where
    R: AssignmentRepository,
{
    pub fn new(assignment_repo: Arc<R>) -> Self {
        Self { assignment_repo }
    }

    /// Every assignment, regardless of owner. Listing is read-only and
    /// unscoped; only the per-id operations check ownership.
    pub async fn execute(&self) -> GradebookResult<Vec<Assignment>> {
        self.assignment_repo.list_assignments().await
    }
}
