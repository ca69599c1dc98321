//! Error conversions - From implementations for common error types
//!
//! Converts library errors into [`AppError`] with an appropriate
//! classification and a message that leaks no internal detail.

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request("Malformed JSON body.").with_source(err)
        } else {
            AppError::internal("Internal server error.").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                AppError::not_found("Record not found.").with_source(err)
            }
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Service unavailable.").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error classes:
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        // Class 23 - integrity constraint violations. The store
                        // only enforces uniqueness and foreign keys; range
                        // checks live in the field validator.
                        "23505" => AppError::conflict("Duplicate value for a unique field."),
                        "23503" => AppError::conflict("Referenced record does not exist."),
                        "23502" => AppError::bad_request("Required field is missing."),
                        // Class 53 - insufficient resources
                        "53000" | "53100" | "53200" | "53300" => {
                            AppError::service_unavailable("Service unavailable.")
                        }
                        // Class 57 - operator intervention (shutdown, cancel)
                        "57000" | "57014" | "57P01" | "57P02" | "57P03" => {
                            AppError::service_unavailable("Service unavailable.")
                        }
                        _ => AppError::internal("Internal server error."),
                    }
                } else {
                    AppError::internal("Internal server error.")
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Service unavailable.").with_source(err)
            }
            _ => AppError::internal("Internal server error.").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        // Dependency failures are logged at error severity, everything else
        // is an expected client-correctable condition.
        if self.is_server_error() {
            tracing::error!(error = %self, source = ?std::error::Error::source(&self), "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = serde_json::json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_json_syntax_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_conversion() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_pool_timeout_conversion() {
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
    }
}
