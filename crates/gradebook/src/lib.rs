//! Gradebook Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - entities, value objects, policy engines, repository traits
//! - `application/` - use cases, config, CSV account bootstrap
//! - `infra/` - PostgreSQL store, webhook notifier
//! - `presentation/` - HTTP handlers, DTOs, router, basic-auth middleware
//!
//! ## Policy model
//! - Authentication is HTTP basic auth against Argon2id-hashed credentials
//! - Assignments are single-owner: only the creator may read, update, or
//!   delete one (existence is checked before ownership, so a missing
//!   assignment is always 404)
//! - Submissions pass a sequential gate: URL present, assignment exists,
//!   deadline not passed, attempt cap not reached
//! - A submission is only successful once its event has been dispatched

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GradebookConfig;
pub use error::{GradebookError, GradebookResult};
pub use infra::postgres::PgGradebookStore;
pub use infra::webhook::WebhookNotifier;
pub use presentation::router::{api_router, ApiState};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgGradebookStore as GradebookStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
