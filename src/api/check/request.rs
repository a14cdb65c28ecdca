// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Check submission parsing and validation

use axum_extra::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::api::errors::ApiError;

/// Multipart field carrying the submitter identifier
pub const EUID_FIELD: &str = "euid";

/// Multipart fields carrying the two images
pub const IMAGE_FIELDS: [&str; 2] = ["image1", "image2"];

/// One uploaded file, held only for the duration of the request
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Bytes,
    /// Content type declared by the browser
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

/// Raw form contents of a POST /check
#[derive(Debug, Clone, Default)]
pub struct CheckSubmission {
    pub euid: Option<String>,
    pub image1: Option<UploadedImage>,
    pub image2: Option<UploadedImage>,
}

/// A submission that passed validation
#[derive(Debug, Clone)]
pub struct ValidSubmission {
    /// Trimmed, non-empty identifier
    pub euid: String,
    pub image1: UploadedImage,
    pub image2: UploadedImage,
}

impl CheckSubmission {
    /// Read every multipart field
    ///
    /// Unknown fields are drained and ignored. When a field repeats, the
    /// first occurrence wins.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut submission = CheckSubmission::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::InvalidForm(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                EUID_FIELD => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| ApiError::InvalidForm(e.to_string()))?;
                    submission.euid.get_or_insert(text);
                }
                "image1" | "image2" => {
                    let content_type = field.content_type().map(str::to_string);
                    let file_name = field.file_name().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::InvalidForm(e.to_string()))?;

                    debug!(
                        "Received {}: {} bytes, content type {:?}",
                        name,
                        bytes.len(),
                        content_type
                    );

                    let slot = if name == "image1" {
                        &mut submission.image1
                    } else {
                        &mut submission.image2
                    };
                    slot.get_or_insert(UploadedImage {
                        bytes,
                        content_type,
                        file_name,
                    });
                }
                _ => {
                    debug!("Ignoring unknown form field '{}'", name);
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::InvalidForm(e.to_string()))?;
                }
            }
        }

        Ok(submission)
    }

    /// Validate the submission
    ///
    /// The identifier is checked first, so a missing EUID is reported even
    /// when the files are missing too. A file part with no content (what a
    /// browser sends for an empty file input) counts as missing.
    pub fn validate(self) -> Result<ValidSubmission, ApiError> {
        let euid = self
            .euid
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingEuid)?
            .to_string();

        let present = |image: Option<UploadedImage>| image.filter(|i| !i.bytes.is_empty());

        match (present(self.image1), present(self.image2)) {
            (Some(image1), Some(image2)) => Ok(ValidSubmission {
                euid,
                image1,
                image2,
            }),
            _ => Err(ApiError::MissingImages),
        }
    }
}
