//! Infrastructure layer - persistence and outbound transport

pub mod postgres;
pub mod webhook;

pub use postgres::PgGradebookStore;
pub use webhook::WebhookNotifier;
