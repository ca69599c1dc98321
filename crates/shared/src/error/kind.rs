//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps error classes to HTTP status codes.

use serde::Serialize;

/// Error classification.
///
/// Each variant corresponds to the HTTP status code the service emits for
/// that class of failure. Only the statuses this API actually produces are
/// listed; `non_exhaustive` leaves room for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - malformed or disallowed request input
    BadRequest,
    /// 401 - authentication missing or failed
    Unauthorized,
    /// 403 - authenticated but not permitted
    Forbidden,
    /// 404 - resource does not exist
    NotFound,
    /// 405 - method not supported on this route
    MethodNotAllowed,
    /// 409 - conflicts with current state (uniqueness, FK integrity)
    Conflict,
    /// 500 - unexpected server-side failure
    InternalServerError,
    /// 503 - a backing dependency is unreachable
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Standard reason phrase for this kind.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::MethodNotAllowed => "Method Not Allowed",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx errors. These are the ones that get logged at error severity.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx errors, expected to be client-correctable.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
