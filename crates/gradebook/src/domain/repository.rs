//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infra layer.
//! Email parameters are plain `&str` on purpose: lookups and the
//! `submitted_by` counter use exact string matching, the same semantics as
//! the ownership check.

use uuid::Uuid;

use crate::domain::entity::{Account, Assignment, Submission};
use crate::error::GradebookResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    async fn create_account(&self, account: &Account) -> GradebookResult<()>;

    /// Find an account by email (exact match)
    async fn find_account_by_email(&self, email: &str) -> GradebookResult<Option<Account>>;
}

/// Assignment repository trait
#[trait_variant::make(AssignmentRepository: Send)]
pub trait LocalAssignmentRepository {
    /// Create a new assignment
    async fn create_assignment(&self, assignment: &Assignment) -> GradebookResult<()>;

    /// Find an assignment by ID
    async fn find_assignment_by_id(&self, id: Uuid) -> GradebookResult<Option<Assignment>>;

    /// List every assignment
    async fn list_assignments(&self) -> GradebookResult<Vec<Assignment>>;

    /// Persist an updated assignment
    async fn update_assignment(&self, assignment: &Assignment) -> GradebookResult<()>;

    /// Delete an assignment (submissions cascade at the store level)
    async fn delete_assignment(&self, id: Uuid) -> GradebookResult<()>;
}

/// Submission repository trait
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Insert a new submission record
    async fn insert_submission(&self, submission: &Submission) -> GradebookResult<()>;

    /// Count prior submissions by this submitter for this assignment
    async fn count_submissions(
        &self,
        assignment_id: Uuid,
        submitted_by: &str,
    ) -> GradebookResult<i64>;
}

/// Store reachability probe for the health endpoint
#[trait_variant::make(StoreHealth: Send)]
pub trait LocalStoreHealth {
    /// Cheap round trip to the backing store
    async fn ping(&self) -> GradebookResult<()>;
}

/// Bound alias for the full store a request handler needs.
pub trait GradebookRepository:
    AccountRepository
    + AssignmentRepository
    + SubmissionRepository
    + StoreHealth
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> GradebookRepository for T where
    T: AccountRepository
        + AssignmentRepository
        + SubmissionRepository
        + StoreHealth
        + Clone
        + Send
        + Sync
        + 'static
{
}
