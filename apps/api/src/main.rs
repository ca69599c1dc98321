//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use gradebook::application::bootstrap::import_accounts_csv;
use gradebook::{api_router, ApiState, GradebookConfig, PgGradebookStore, WebhookNotifier};
use platform::metrics::MetricsStore;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,gradebook=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../database/migrations").run(&pool).await?;

    tracing::info!("Migrations completed");

    let config = GradebookConfig::from_env();
    let store = PgGradebookStore::new(pool.clone());

    // Startup account bootstrap from CSV.
    // Errors here should not prevent server startup.
    if let Some(path) = &config.accounts_csv {
        match import_accounts_csv(&store, path).await {
            Ok(summary) => {
                tracing::info!(
                    created = summary.created,
                    skipped = summary.skipped,
                    "Account bootstrap completed"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Account bootstrap failed, continuing anyway");
            }
        }
    }

    let notifier = WebhookNotifier::new(config.notify_endpoint.clone(), config.notify_timeout)
        .map_err(|e| anyhow::anyhow!("failed to build notifier: {e}"))?;

    let state = ApiState {
        store: Arc::new(store),
        notifier: Arc::new(notifier),
        metrics: Arc::new(MetricsStore::new()),
    };

    // Build router
    let app = api_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
