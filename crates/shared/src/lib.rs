//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the smallest shared vocabulary of the service:
//! - [`error::kind::ErrorKind`] - error classification mapped to HTTP status codes
//! - [`error::app_error::AppError`] - the unified application error type
//! - Conversions from common library errors into `AppError`
//!
//! **Design principle**: only things that are hard to change and mean the
//! same thing in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
