//! HTTP Handlers
//!
//! Thin adapters between the HTTP surface and the use cases. Counter names
//! are the statsd names the existing dashboards query by, mixed dotted and
//! snake_case spelling included; the exporter sanitizes them for scraping.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use uuid::Uuid;

use crate::application::create_assignment::CreateAssignmentUseCase;
use crate::application::delete_assignment::DeleteAssignmentUseCase;
use crate::application::get_assignment::GetAssignmentUseCase;
use crate::application::list_assignments::ListAssignmentsUseCase;
use crate::application::submit_assignment::SubmitAssignmentUseCase;
use crate::application::update_assignment::UpdateAssignmentUseCase;
use crate::domain::entity::Principal;
use crate::domain::notifier::SubmissionNotifier;
use crate::domain::repository::GradebookRepository;
use crate::domain::validate::FieldError;
use crate::error::GradebookError;
use crate::presentation::dto::{
    AssignmentBody, AssignmentResponse, SubmissionResponse, SubmitRequest,
};
use crate::presentation::extract::Json;
use crate::presentation::router::ApiState;

// List and create take no query parameters at all.
fn reject_query_params() -> GradebookError {
    GradebookError::Validation(FieldError {
        field: "query parameters",
        reason: "are not allowed",
    })
}

/// GET /
pub async fn welcome() -> &'static str {
    "Welcome to my web application!"
}

/// GET /healthz
///
/// Health is a bare liveness probe: no query parameters, no body, no
/// payload in the answer beyond the status text.
pub async fn health<R, N>(
    State(state): State<ApiState<R, N>>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    if query.is_some() || !body.is_empty() {
        state.metrics.increment("health_check_bad_request");
        return (StatusCode::BAD_REQUEST, "Bad Request").into_response();
    }

    match state.store.ping().await {
        Ok(()) => {
            state.metrics.increment("health_check_success");
            (StatusCode::OK, "OK").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            state.metrics.increment("health_check_database_failure");
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable").into_response()
        }
    }
}

/// GET /v3/assignments
pub async fn list_assignments<R, N>(
    State(state): State<ApiState<R, N>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<AssignmentResponse>>, GradebookError>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    state.metrics.increment("assignments.endpoint.hit");

    if query.is_some() {
        return Err(reject_query_params());
    }

    let use_case = ListAssignmentsUseCase::new(state.store.clone());
    let assignments = use_case.execute().await?;

    state
        .metrics
        .gauge("assignments.retrieved", assignments.len() as f64);

    Ok(Json(
        assignments.into_iter().map(AssignmentResponse::from).collect(),
    ))
}

/// POST /v3/assignments
pub async fn create_assignment<R, N>(
    State(state): State<ApiState<R, N>>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
    Json(body): Json<AssignmentBody>,
) -> Result<impl IntoResponse, GradebookError>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    state.metrics.increment("assignments.post.hit");

    if query.is_some() {
        return Err(reject_query_params());
    }

    let use_case = CreateAssignmentUseCase::new(state.store.clone());
    let assignment = use_case.execute(&principal, body.into()).await?;

    state.metrics.increment("assignments.post.created");

    Ok((StatusCode::CREATED, Json(AssignmentResponse::from(assignment))))
}

/// GET /v3/assignments/{id}
pub async fn get_assignment<R, N>(
    State(state): State<ApiState<R, N>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssignmentResponse>, GradebookError>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    let use_case = GetAssignmentUseCase::new(state.store.clone());
    let assignment = use_case.execute(&principal, id).await?;

    state.metrics.increment("assignment_retrieved");

    Ok(Json(AssignmentResponse::from(assignment)))
}

/// PUT /v3/assignments/{id}
pub async fn update_assignment<R, N>(
    State(state): State<ApiState<R, N>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignmentBody>,
) -> Result<StatusCode, GradebookError>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    let use_case = UpdateAssignmentUseCase::new(state.store.clone());
    use_case.execute(&principal, id, body.into()).await?;

    state.metrics.increment("assignment_updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v3/assignments/{id}
pub async fn delete_assignment<R, N>(
    State(state): State<ApiState<R, N>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, GradebookError>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    let use_case = DeleteAssignmentUseCase::new(state.store.clone());
    use_case.execute(&principal, id).await?;

    state.metrics.increment("assignment_deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v3/assignments/{id}/submission
pub async fn submit_assignment<R, N>(
    State(state): State<ApiState<R, N>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(body): Json<SubmitRequest>,
) -> Result<impl IntoResponse, GradebookError>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    state.metrics.increment("assignment_submission.post.hit");

    let use_case = SubmitAssignmentUseCase::new(state.store.clone(), state.notifier.clone());
    let submission = use_case
        .execute(&principal, id, body.submission_url)
        .await?;

    state.metrics.increment("assignment_submission.post.success");

    Ok((StatusCode::CREATED, Json(SubmissionResponse::from(submission))))
}

/// GET /metrics
pub async fn export_metrics<R, N>(State(state): State<ApiState<R, N>>) -> String
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    state.metrics.export_prometheus()
}

/// Fallback for every unrouted path.
pub async fn fallback<R, N>(State(state): State<ApiState<R, N>>) -> Response
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    state.metrics.increment("non_existent_endpoint_attempt");
    (
        StatusCode::BAD_REQUEST,
        "Bad Request: This endpoint does not exist.",
    )
        .into_response()
}
