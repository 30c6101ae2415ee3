//! HTTP server: router construction and the serve loop.

pub mod routes;
pub mod views;

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
}

/// Build the application router over a database handle.
pub fn router(db: Arc<DbPool>) -> Router {
    let state = AppState { db };

    Router::new()
        .route("/", get(routes::homepage))
        .route(
            "/add/",
            get(routes::new_customer_form).post(routes::add_customer),
        )
        .route("/customers/top10", get(routes::top_customers_page))
        .route("/customer/search", post(routes::search_customers_page))
        .route("/{id}/", get(routes::customer_detail))
        .route(
            "/{id}/edit/",
            get(routes::edit_customer_form).post(routes::edit_customer),
        )
        .route("/{id}/add-reservation/", post(routes::add_reservation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn serve(addr: SocketAddr, db: Arc<DbPool>) -> AppResult<()> {
    let app = router(db);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
