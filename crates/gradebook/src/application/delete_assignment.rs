//! Delete Assignment Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::Principal;
use crate::domain::policy::authorize_owner_operation;
use crate::domain::repository::AssignmentRepository;
use crate::error::GradebookResult;

/// Delete assignment use case
pub struct DeleteAssignmentUseCase<R>
where
    R: AssignmentRepository,
{
    assignment_repo: Arc<R>,
}

impl<R> DeleteAssignmentUseCase<R>
where
    R: AssignmentRepository,
{
    pub fn new(assignment_repo: Arc<R>) -> Self {
        Self { assignment_repo }
    }

    /// Delete one assignment, owner only. Submissions under it go with it
    /// via the store's cascade.
    pub async fn execute(&self, principal: &Principal, id: Uuid) -> GradebookResult<()> {
        let assignment = self.assignment_repo.find_assignment_by_id(id).await?;
        authorize_owner_operation(&principal.email, assignment.as_ref()).require()?;

        self.assignment_repo.delete_assignment(id).await?;

        tracing::info!(assignment_id = %id, "assignment deleted");

        Ok(())
    }
}
