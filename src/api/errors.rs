// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

use crate::vision::DetectError;

/// Errors returned by the HTTP handlers
///
/// Every variant renders as a plain-text body. The two form validation
/// errors keep a 200 status, as browsers show the message either way.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    MissingEuid,
    MissingImages,
    InvalidForm(String),
    UnreadableImage { field: String, reason: String },
    ClassificationFailed { field: String, reason: String },
    InternalError(String),
}

impl ApiError {
    /// Map a detector failure for one upload field
    pub fn from_detect(field: &str, err: DetectError) -> Self {
        match err {
            DetectError::Decode(e) => ApiError::UnreadableImage {
                field: field.to_string(),
                reason: e.to_string(),
            },
            DetectError::Classifier(e) => ApiError::ClassificationFailed {
                field: field.to_string(),
                reason: e.to_string(),
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingEuid | ApiError::MissingImages => StatusCode::OK,
            ApiError::InvalidForm(_) | ApiError::UnreadableImage { .. } => StatusCode::BAD_REQUEST,
            ApiError::ClassificationFailed { .. } | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingEuid => write!(f, "No EUID provided."),
            ApiError::MissingImages => write!(f, "Please upload two images."),
            ApiError::InvalidForm(msg) => write!(f, "Invalid form submission: {}", msg),
            ApiError::UnreadableImage { field, reason } => {
                write!(f, "Could not read {}: {}", field, reason)
            }
            ApiError::ClassificationFailed { field, reason } => {
                write!(f, "Classification failed for {}: {}", field, reason)
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
