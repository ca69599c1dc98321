//! Auth Middleware
//!
//! Extracts basic auth credentials, authenticates them against the store,
//! and attaches the resulting [`Principal`] for handlers to consume.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine;

use crate::application::authenticate::{AuthenticateUseCase, BasicCredentials};
use crate::domain::notifier::SubmissionNotifier;
use crate::domain::repository::GradebookRepository;
use crate::error::GradebookError;
use crate::presentation::router::ApiState;

/// Middleware that requires valid basic auth credentials
pub async fn require_basic_auth<R, N>(
    State(state): State<ApiState<R, N>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    let credentials = match extract_basic_credentials(req.headers()) {
        Ok(credentials) => credentials,
        Err(e) => return Err(e.into_response()),
    };

    let use_case = AuthenticateUseCase::new(state.store.clone());
    let principal = match use_case.execute(credentials).await {
        Ok(principal) => principal,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Parse an `Authorization: Basic` header into credentials.
///
/// Anything short of a well-formed header with a decodable
/// `email:password` payload is missing credentials; the parts may still
/// be empty, which the authenticate use case rejects.
fn extract_basic_credentials(
    headers: &axum::http::HeaderMap,
) -> Result<BasicCredentials, GradebookError> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(GradebookError::MissingCredentials)?;

    let encoded = header_value
        .strip_prefix("Basic ")
        .ok_or(GradebookError::MissingCredentials)?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| GradebookError::MissingCredentials)?;

    let decoded = String::from_utf8(decoded).map_err(|_| GradebookError::MissingCredentials)?;

    // Passwords may contain ':'; only the first one separates the parts.
    let (email, password) = decoded
        .split_once(':')
        .ok_or(GradebookError::MissingCredentials)?;

    Ok(BasicCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    fn basic(payload: &str) -> String {
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(payload)
        )
    }

    #[test]
    fn test_extracts_well_formed_credentials() {
        let headers = headers_with_auth(&basic("user@example.com:hunter2"));
        let credentials = extract_basic_credentials(&headers).unwrap();
        assert_eq!(credentials.email, "user@example.com");
        assert_eq!(credentials.password, "hunter2");
    }

    #[test]
    fn test_password_may_contain_colons() {
        let headers = headers_with_auth(&basic("user@example.com:pa:ss:word"));
        let credentials = extract_basic_credentials(&headers).unwrap();
        assert_eq!(credentials.password, "pa:ss:word");
    }

    #[test]
    fn test_missing_or_malformed_header_is_missing_credentials() {
        let empty = HeaderMap::new();
        assert!(matches!(
            extract_basic_credentials(&empty),
            Err(GradebookError::MissingCredentials)
        ));

        let no_colon = basic("no-colon");
        for value in ["Bearer abc123", "Basic !!!not-base64!!!", no_colon.as_str()] {
            let headers = headers_with_auth(value);
            assert!(
                matches!(
                    extract_basic_credentials(&headers),
                    Err(GradebookError::MissingCredentials)
                ),
                "value={value}"
            );
        }
    }
}
