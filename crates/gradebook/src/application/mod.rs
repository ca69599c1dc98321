//! Application layer - one use case per operation
//!
//! Use cases own the I/O sequencing around the pure domain decisions:
//! fetch, decide, persist, notify.

pub mod authenticate;
pub mod bootstrap;
pub mod config;
pub mod create_assignment;
pub mod delete_assignment;
pub mod get_assignment;
pub mod list_assignments;
pub mod submit_assignment;
pub mod update_assignment;

pub use authenticate::{AuthenticateUseCase, BasicCredentials};
pub use bootstrap::{import_accounts_csv, ImportSummary};
pub use create_assignment::CreateAssignmentUseCase;
pub use delete_assignment::DeleteAssignmentUseCase;
pub use get_assignment::GetAssignmentUseCase;
pub use list_assignments::ListAssignmentsUseCase;
pub use submit_assignment::SubmitAssignmentUseCase;
pub use update_assignment::UpdateAssignmentUseCase;
