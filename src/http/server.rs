//! Router construction and the HTTP serve loop

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::core::config::Config;
use crate::http::{handlers, middleware as http_middleware};

/// CORS policy: any origin, GET/POST/OPTIONS, Content-Type header
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the API router
///
/// Known paths requested with an unsupported method fall through to
/// the same 404 as unknown paths.
pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::root_handler).fallback(handlers::not_found_handler),
        )
        .route(
            "/a2r",
            get(handlers::a2r_handler).fallback(handlers::not_found_handler),
        )
        .route(
            "/r2a",
            get(handlers::r2a_handler).fallback(handlers::not_found_handler),
        )
        .fallback(handlers::not_found_handler)
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(cors_layer())
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(config: &Config) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - try http://{}/a2r?arabic=123", addr);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
