//! Create Assignment Use Case

use std::sync::Arc;

use crate::domain::entity::{Assignment, Principal};
use crate::domain::repository::AssignmentRepository;
use crate::domain::validate::{validate_create, AssignmentFields};
use crate::error::GradebookResult;

/// Create assignment use case
pub struct CreateAssignmentUseCase<R>
where
    R: AssignmentRepository,
{
    assignment_repo: Arc<R>,
}

impl<R> CreateAssignmentUseCase<R>
where
    R: AssignmentRepository,
{
    pub fn new(assignment_repo: Arc<R>) -> Self {
        Self { assignment_repo }
    }

    /// Validate the incoming fields and persist a new assignment owned by
    /// the authenticated principal. Name uniqueness is the store's call;
    /// a duplicate surfaces as a conflict from the unique index.
    pub async fn execute(
        &self,
        principal: &Principal,
        fields: AssignmentFields,
    ) -> GradebookResult<Assignment> {
        let validated = validate_create(fields)?;

        let assignment = Assignment::new(
            validated.name,
            validated.points,
            validated.num_of_attemps,
            validated.deadline,
            principal.email.clone(),
        );

        self.assignment_repo.create_assignment(&assignment).await?;

        tracing::info!(
            assignment_id = %assignment.id,
            created_by = %assignment.created_by,
            "assignment created"
        );

        Ok(assignment)
    }
}
