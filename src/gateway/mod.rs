pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the HTTP router
pub fn router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/orders",
            post(handlers::create_order).get(handlers::get_orders),
        )
        .route("/availability", get(handlers::get_availability))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(openapi::ApiDoc::openapi()) }),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

/// Start HTTP Gateway server
///
/// Binds `config.host:config.port` and serves until `shutdown` resolves.
pub async fn run_server(
    config: &GatewayConfig,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind gateway to {}", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/api-docs/openapi.json", addr);

    serve(
        listener,
        router(state, config.request_timeout()),
        config.shutdown_timeout(),
        shutdown,
    )
    .await
}

/// Serve `app` on an already bound listener.
///
/// Once `shutdown` resolves, in-flight requests get `grace` to finish;
/// after that the server task is aborted.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let draining = Arc::new(Notify::new());
    let trigger = draining.clone();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown.await;
        tracing::info!("shutting down server...");
        trigger.notify_one();
    });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        res = &mut server => {
            res.context("server task panicked")?.context("server failed")?;
            tracing::info!("server closed");
            return Ok(());
        }
        _ = draining.notified() => {}
    }

    match tokio::time::timeout(grace, &mut server).await {
        Ok(res) => {
            res.context("server task panicked")?
                .context("server shutdown failed")?;
            tracing::info!("server shutdown gracefully");
        }
        Err(_) => {
            server.abort();
            tracing::warn!(
                "server shutdown timed out after {:?}, dropping open connections",
                grace
            );
        }
    }
    Ok(())
}

/// Wait for Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("failed to listen for SIGTERM: {}", e);
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
}
