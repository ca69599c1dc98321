//! Request Extractors
//!
//! A `Json` wrapper whose rejection is a 400 with the service's JSON error
//! body. The stock extractor answers wrong-typed fields with 422 and a
//! missing JSON content type with 415; clients of this API get 400 for
//! every malformed body.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use serde::Serialize;

/// JSON body extractor with a uniform 400 rejection
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(JsonBodyError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Rejection carrying the underlying extractor failure for logs.
#[derive(Debug)]
pub struct JsonBodyError(JsonRejection);

impl From<JsonRejection> for JsonBodyError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for JsonBodyError {
    fn into_response(self) -> Response {
        AppError::bad_request("Malformed JSON body.")
            .with_source(self.0)
            .into_response()
    }
}
