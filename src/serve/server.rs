//! HTTP server for compiled playlists and the front-end bundle

use super::mime::TEXT_PLAIN;
use super::routes::{self, Resolution};
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;

/// Server settings
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Directory served as `/`
    pub root: PathBuf,

    /// Bind address
    pub bind: String,

    /// Listening port
    pub port: u16,
}

impl ServeConfig {
    /// Serve `root` on localhost:8000
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            bind: "localhost".to_string(),
            port: 8000,
        }
    }

    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Create the router; every GET goes through [`routes::resolve`]
pub fn create_router(root: PathBuf) -> Router {
    Router::new()
        .route("/", get(handle))
        .route("/*path", get(handle))
        .with_state(Arc::new(root))
}

async fn handle(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    match routes::resolve(&root, uri.path()) {
        Resolution::File { path, content_type } => match tokio::fs::read(&path).await {
            Ok(body) => {
                log::debug!("GET {} -> {:?} ({})", uri.path(), path, content_type);
                (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response()
            }
            Err(e) => {
                log::warn!("Failed to read {:?}: {}", path, e);
                not_found()
            }
        },
        Resolution::NotFound => {
            log::debug!("GET {} -> 404", uri.path());
            not_found()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        "404 - Not Found",
    )
        .into_response()
}

/// Run the server until Ctrl+C
pub async fn serve(config: ServeConfig) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    log::info!("Server bound to address {}", config.bind);
    log::info!("Server listening on port {}", config.port);
    log::info!("Serving {:?}", config.root);

    axum::serve(listener, create_router(config.root))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        log::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
