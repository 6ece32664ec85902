//! `api` crate — HTTP/JSON surface of the job board.
//!
//! Exposes:
//!   POST   /signup
//!   POST   /login
//!   POST   /post-job
//!   GET    /all-jobs
//!   GET    /all-jobs/:id
//!   PATCH  /update-job/:id
//!   GET    /myJobs/:email
//!   DELETE /job/:id
//!   GET    /

pub mod cors;
pub mod error;
pub mod handlers;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use board::{CredentialManager, JobRegistry, JobStore, UserStore};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use cors::cors_layer;
pub use error::HttpError;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialManager>,
    pub jobs: Arc<JobRegistry>,
}

impl AppState {
    pub fn new(credentials: CredentialManager, jobs: JobRegistry) -> Self {
        Self {
            credentials: Arc::new(credentials),
            jobs: Arc::new(jobs),
        }
    }

    /// Back both services with one store.
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: UserStore + JobStore + 'static,
    {
        Self::new(
            CredentialManager::new(store.clone()),
            JobRegistry::new(store),
        )
    }
}

/// Build the application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        .route("/post-job", post(handlers::jobs::post_job))
        .route("/all-jobs", get(handlers::jobs::all_jobs))
        .route("/all-jobs/:id", get(handlers::jobs::get_job))
        .route("/update-job/:id", patch(handlers::jobs::update_job))
        .route("/myJobs/:email", get(handlers::jobs::my_jobs))
        .route("/job/:id", delete(handlers::jobs::delete_job))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve `app` until `shutdown` resolves, then let in-flight
/// requests finish.
pub async fn serve<F>(addr: SocketAddr, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Successfully running on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl+c interrupt, closing server"),
        _ = terminate => info!("received SIGTERM, closing server"),
    }
}
