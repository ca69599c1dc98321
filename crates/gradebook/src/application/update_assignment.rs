//! Update Assignment Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::{Assignment, Principal};
use crate::domain::policy::authorize_owner_operation;
use crate::domain::repository::AssignmentRepository;
use crate::error::{GradebookError, GradebookResult};
use crate::domain::validate::{validate_update, AssignmentFields};

/// Update assignment use case
pub struct UpdateAssignmentUseCase<R>
where
    R: AssignmentRepository,
{
    assignment_repo: Arc<R>,
}

impl<R> UpdateAssignmentUseCase<R>
where
    R: AssignmentRepository,
{
    pub fn new(assignment_repo: Arc<R>) -> Self {
        Self { assignment_repo }
    }

    /// Partial update, owner only.
    ///
    /// Field bounds are checked before touching the store, so a malformed
    /// body never costs a fetch. Absent fields keep their stored values.
    pub async fn execute(
        &self,
        principal: &Principal,
        id: Uuid,
        fields: AssignmentFields,
    ) -> GradebookResult<Assignment> {
        validate_update(&fields)?;

        let assignment = self.assignment_repo.find_assignment_by_id(id).await?;
        authorize_owner_operation(&principal.email, assignment.as_ref()).require()?;
        let mut assignment = assignment.ok_or(GradebookError::AssignmentNotFound)?;

        if let Some(name) = fields.name {
            assignment.name = name;
        }
        if let Some(points) = fields.points {
            assignment.points = points;
        }
        if let Some(attempts) = fields.num_of_attemps {
            assignment.num_of_attemps = attempts;
        }
        if let Some(deadline) = fields.deadline {
            assignment.deadline = deadline;
        }
        assignment.touch();

        self.assignment_repo.update_assignment(&assignment).await?;

        tracing::info!(assignment_id = %assignment.id, "assignment updated");

        Ok(assignment)
    }
}
