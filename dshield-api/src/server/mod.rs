// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use dshield_repository::MockDataService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use self::state::AppState;
use crate::config::create_cors_layer;
use crate::errors::ServerError;

/// Create the Axum application router with all routes and middleware
pub fn create_app(service: Arc<MockDataService>) -> Router {
    let state = AppState::new(service);

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/api/solutions", get(handlers::solutions))
        .route("/api/embrain/search", post(handlers::embrain_search))
        .route("/api/embrain/tags", post(handlers::embrain_update_tags))
        .route(
            "/api/embrain/create-instance",
            post(handlers::embrain_create_instance),
        )
        .route("/api/social-dome/feed", get(handlers::social_dome_feed))
        .route("/api/napoleon/run", post(handlers::napoleon_run))
        .route(
            "/api/napoleon/status/:job_id",
            get(handlers::napoleon_status),
        )
        .route("/api/relationships/graph", get(handlers::relationships_graph))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Bind the specified address and serve until ctrl-c
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app).await
}

/// Serve on an already bound listener until ctrl-c
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    info!("Server listening on {}", addr);
    info!("- Solutions endpoint: http://{}/api/solutions", addr);
    info!("- Napoleon endpoint: http://{}/api/napoleon/run", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
