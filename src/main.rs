// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use hotdog_checker::{
    api::{start_server, AppState},
    config::ServerConfig,
    version,
    vision::{HotdogDetector, OnnxClassifier},
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Default to info when RUST_LOG is unset
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🌭 Starting {}", version::get_version_string());
    info!("📦 BUILD VERSION: {}", version::VERSION);

    let config = ServerConfig::parse();
    config.validate().context("Invalid configuration")?;
    let addr = config.listen_addr()?;

    // Loaded once; shared read-only by every request
    let classifier = OnnxClassifier::load(&config.model_path, config.intra_threads)
        .with_context(|| format!("Failed to load classifier from {}", config.model_path))?;

    let detector = HotdogDetector::new(Arc::new(classifier))
        .with_target_index(config.target_index)
        .with_max_image_bytes(config.max_image_bytes);

    info!(
        "✅ Detector ready (model: {}, target index: {}, max image: {} bytes)",
        detector.classifier_name(),
        detector.target_index(),
        detector.max_image_bytes()
    );

    start_server(addr, AppState::new(detector)).await
}
