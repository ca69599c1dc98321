//! Gradebook Error Types
//!
//! Domain-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The internal taxonomy is richer than
//! what clients see: authentication failures carry their real cause here
//! but surface as one uniform message.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;
use thiserror::Error;

use crate::domain::notifier::DispatchError;
use crate::domain::validate::FieldError;

/// Gradebook result type alias
pub type GradebookResult<T> = Result<T, GradebookError>;

/// Gradebook error variants
#[derive(Debug, Error)]
pub enum GradebookError {
    /// Basic auth header absent, undecodable, or with an empty part
    #[error("Missing credentials")]
    MissingCredentials,

    /// No account with the presented email
    #[error("User not found")]
    UserNotFound,

    /// Account exists but the password does not match
    #[error("Invalid password")]
    InvalidPassword,

    /// Authenticated actor is not the owner of the assignment
    #[error("Forbidden")]
    Forbidden,

    /// Assignment does not exist
    #[error("Assignment not found")]
    AssignmentNotFound,

    /// Field validation failure
    #[error("{0}")]
    Validation(#[from] FieldError),

    /// Submission URL absent or blank
    #[error("Submission URL is required")]
    MissingSubmissionUrl,

    /// Submission arrived at or after the assignment deadline
    #[error("Submission deadline has passed")]
    DeadlinePassed,

    /// Attempt cap for this (assignment, submitter) pair reached
    #[error("Submission attempts exceeded")]
    AttemptsExceeded,

    /// Notification dispatch failed; the submission is not successful
    #[error("Submission event dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GradebookError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradebookError::MissingCredentials
            | GradebookError::UserNotFound
            | GradebookError::InvalidPassword => ErrorKind::Unauthorized,
            GradebookError::Forbidden
            | GradebookError::DeadlinePassed
            | GradebookError::AttemptsExceeded => ErrorKind::Forbidden,
            GradebookError::AssignmentNotFound => ErrorKind::NotFound,
            GradebookError::Validation(_) | GradebookError::MissingSubmissionUrl => {
                ErrorKind::BadRequest
            }
            GradebookError::Dispatch(_) | GradebookError::Internal(_) => {
                ErrorKind::InternalServerError
            }
            GradebookError::Database(e) => sqlx_kind(e),
        }
    }

    /// Convert to the unified error type with the client-facing message.
    ///
    /// `UserNotFound` and `InvalidPassword` deliberately collapse into the
    /// same message so callers cannot probe which emails exist.
    pub fn to_app_error(self) -> AppError {
        match self {
            GradebookError::MissingCredentials => {
                AppError::unauthorized("Authentication required")
            }
            GradebookError::UserNotFound | GradebookError::InvalidPassword => {
                AppError::unauthorized("Invalid email or password")
            }
            GradebookError::Forbidden => {
                AppError::forbidden("You do not have permission to access this assignment.")
            }
            GradebookError::AssignmentNotFound => AppError::not_found("Assignment not found."),
            GradebookError::Validation(e) => AppError::bad_request(e.to_string()),
            GradebookError::MissingSubmissionUrl => {
                AppError::bad_request("Submission URL is required.")
            }
            GradebookError::DeadlinePassed => {
                AppError::forbidden("Submission deadline has passed.")
            }
            GradebookError::AttemptsExceeded => {
                AppError::forbidden("You have exceeded the number of submission attempts.")
            }
            GradebookError::Dispatch(e) => {
                AppError::internal("Internal server error.").with_source(e)
            }
            GradebookError::Database(e) => AppError::from(e),
            GradebookError::Internal(msg) => {
                tracing::error!(detail = %msg, "internal error");
                AppError::internal("Internal server error.")
            }
        }
    }

    /// Client-facing message, as it would appear in the response body.
    pub fn public_message(self) -> String {
        self.to_app_error().message().to_string()
    }
}

impl From<GradebookError> for AppError {
    fn from(err: GradebookError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for GradebookError {
    fn into_response(self) -> Response {
        // Missing credentials invite the client to retry with basic auth.
        let www_authenticate = matches!(self, GradebookError::MissingCredentials);

        let response = self.to_app_error().into_response();
        if www_authenticate {
            let mut response = response;
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Basic realm=\"Authorization required\""),
            );
            response
        } else {
            response
        }
    }
}

/// Non-consuming classification for sqlx errors, mirroring the kernel's
/// `From<sqlx::Error> for AppError` mapping.
fn sqlx_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") | Some("23503") => ErrorKind::Conflict,
            Some("23502") => ErrorKind::BadRequest,
            Some(code) if code.starts_with("53") || code.starts_with("57") => {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(GradebookError::MissingCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(GradebookError::UserNotFound.kind(), ErrorKind::Unauthorized);
        assert_eq!(GradebookError::InvalidPassword.kind(), ErrorKind::Unauthorized);
        assert_eq!(GradebookError::Forbidden.kind(), ErrorKind::Forbidden);
        assert_eq!(GradebookError::DeadlinePassed.kind(), ErrorKind::Forbidden);
        assert_eq!(GradebookError::AttemptsExceeded.kind(), ErrorKind::Forbidden);
        assert_eq!(GradebookError::AssignmentNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(GradebookError::MissingSubmissionUrl.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_auth_failures_share_one_external_message() {
        // Distinct internal reasons, indistinguishable to the caller.
        let not_found = GradebookError::UserNotFound.public_message();
        let bad_password = GradebookError::InvalidPassword.public_message();
        assert_eq!(not_found, bad_password);
        assert_eq!(not_found, "Invalid email or password");
    }

    #[test]
    fn test_dispatch_failure_is_a_server_error() {
        let err = GradebookError::Dispatch(DispatchError::BadStatus(502));
        assert!(err.kind().is_server_error());
        // No internal detail leaks into the body.
        assert_eq!(err.public_message(), "Internal server error.");
    }
}
