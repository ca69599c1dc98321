//! API Router

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Router};

use platform::metrics::MetricsStore;

use crate::domain::notifier::SubmissionNotifier;
use crate::domain::repository::GradebookRepository;
use crate::presentation::handlers;
use crate::presentation::middleware::require_basic_auth;

/// Shared state for API handlers
pub struct ApiState<R, N>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    pub store: Arc<R>,
    pub notifier: Arc<N>,
    pub metrics: Arc<MetricsStore>,
}

// Derived Clone would demand R: Clone and N: Clone on the state itself;
// the Arcs are what actually gets cloned.
impl<R, N> Clone for ApiState<R, N>
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            notifier: self.notifier.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

/// Create the API router for any store and notifier implementation.
///
/// Assignment routes sit behind basic auth; the welcome, health, and
/// metrics routes are open. Anything unrouted hits the fallback.
pub fn api_router<R, N>(state: ApiState<R, N>) -> Router
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    let protected = Router::new()
        .route(
            "/v3/assignments",
            get(handlers::list_assignments::<R, N>).post(handlers::create_assignment::<R, N>),
        )
        .route(
            "/v3/assignments/{id}",
            get(handlers::get_assignment::<R, N>)
                .put(handlers::update_assignment::<R, N>)
                .delete(handlers::delete_assignment::<R, N>),
        )
        .route(
            "/v3/assignments/{id}/submission",
            post(handlers::submit_assignment::<R, N>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth::<R, N>,
        ));

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/healthz", get(handlers::health::<R, N>))
        .route("/metrics", get(handlers::export_metrics::<R, N>))
        .merge(protected)
        .fallback(handlers::fallback::<R, N>)
        // Outermost, so PATCH is answered before auth or routing runs.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            reject_patch::<R, N>,
        ))
        .with_state(state)
}

/// No route supports PATCH; answer it uniformly for every path.
async fn reject_patch<R, N>(
    State(state): State<ApiState<R, N>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    R: GradebookRepository,
    N: SubmissionNotifier + Send + Sync + 'static,
{
    if req.method() == Method::PATCH {
        state.metrics.increment("undefined_patch_route_attempt");
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }
    next.run(req).await
}
