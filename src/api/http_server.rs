// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::check::check_handler;
use super::form::form_handler;
use crate::vision::HotdogDetector;

/// Request body room for the EUID field and multipart framing
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Shared, read-only state for every request
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<HotdogDetector>,
    /// Maximum body size accepted on POST /check
    pub body_limit: usize,
}

impl AppState {
    pub fn new(detector: HotdogDetector) -> Self {
        let body_limit = request_body_limit(detector.max_image_bytes());
        Self {
            detector: Arc::new(detector),
            body_limit,
        }
    }
}

/// Body limit that fits two images of `max_image_bytes` plus the form
pub fn request_body_limit(max_image_bytes: usize) -> usize {
    max_image_bytes
        .saturating_mul(2)
        .saturating_add(FORM_OVERHEAD_BYTES)
}

pub fn create_app(state: AppState) -> Router {
    let body_limit = state.body_limit;

    Router::new()
        // Upload form
        .route("/", get(form_handler))
        // Classification
        .route("/check", post(check_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Hot dog checker listening on http://{}", listener.local_addr()?);
    info!("   GET  /       - Upload form");
    info!("   POST /check  - Classify two images");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
