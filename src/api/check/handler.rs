// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Check endpoint handler

use std::sync::Arc;

use axum::{extract::State, response::Html};
use axum_extra::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info, warn};

use super::request::{CheckSubmission, IMAGE_FIELDS};
use super::response::ResultPage;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vision::{CheckedImage, HotdogDetector};

/// POST /check - Classify two uploaded images
///
/// # Request
/// `multipart/form-data` with:
/// - `euid`: Submitter identifier (required, non-empty after trimming)
/// - `image1`, `image2`: Image files (required)
///
/// # Response
/// An HTML page with both verdicts and both images embedded as `data:` URIs.
///
/// # Errors
/// All error bodies are plain text.
/// - 200 OK: "No EUID provided." / "Please upload two images."
/// - 400 Bad Request: Malformed form or an upload that is not a readable image
/// - 500 Internal Server Error: Classification failed
pub async fn check_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let submission = CheckSubmission::from_multipart(multipart)
        .await
        .map_err(|e| {
            warn!("Failed to read check form: {}", e);
            e
        })?
        .validate()
        .map_err(|e| {
            warn!("Check validation failed: {}", e);
            e
        })?;

    debug!("Check request received from EUID {}", submission.euid);

    // The two images are independent; classify them side by side
    let (first, second) = tokio::try_join!(
        check_image(state.detector.clone(), IMAGE_FIELDS[0], submission.image1.bytes),
        check_image(state.detector.clone(), IMAGE_FIELDS[1], submission.image2.bytes),
    )?;

    info!(
        "Check complete for EUID {}: {} / {}",
        submission.euid, first.verdict, second.verdict
    );

    let page = ResultPage::new(submission.euid, first, second);
    Ok(Html(page.render()))
}

/// Run the detector for one upload on the blocking pool
async fn check_image(
    detector: Arc<HotdogDetector>,
    field: &'static str,
    bytes: Bytes,
) -> Result<CheckedImage, ApiError> {
    let result = tokio::task::spawn_blocking(move || detector.check(&bytes))
        .await
        .map_err(|e| ApiError::InternalError(format!("{} task failed: {}", field, e)))?;

    result.map_err(|e| {
        warn!("Failed to check {}: {}", field, e);
        ApiError::from_detect(field, e)
    })
}
