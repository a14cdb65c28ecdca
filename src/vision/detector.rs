// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hot dog detector: decode, preprocess, classify, decide

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use super::classifier::{top1, ClassifierError, ImageClassifier};
use super::image_utils::{
    data_uri, decode_image_bytes, encode_base64, format_name, ImageError, DEFAULT_MAX_IMAGE_BYTES,
    DISPLAY_MIME,
};
use super::preprocessing::preprocess_for_classification;
use super::verdict::{Verdict, HOTDOG_INDEX};

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("unreadable image: {0}")]
    Decode(#[from] ImageError),

    #[error("classification failed: {0}")]
    Classifier(#[from] ClassifierError),
}

/// Outcome of checking one uploaded image
#[derive(Debug, Clone)]
pub struct CheckedImage {
    pub verdict: Verdict,
    /// Classifier top-1 class index
    pub top1_index: usize,
    /// Softmax probability of the top-1 class
    pub top1_probability: f32,
    /// Original upload bytes, base64-encoded
    pub base64: String,
    /// MIME type used for display
    pub mime: &'static str,
    pub processing_time_ms: u64,
}

impl CheckedImage {
    /// `data:` URI for embedding in an `<img>` tag
    pub fn data_uri(&self) -> String {
        data_uri(self.mime, &self.base64)
    }
}

/// Immutable detector shared by every request
///
/// Holds the pretrained classifier and the fixed decision constants.
#[derive(Clone)]
pub struct HotdogDetector {
    classifier: Arc<dyn ImageClassifier>,
    target_index: usize,
    max_image_bytes: usize,
}

impl std::fmt::Debug for HotdogDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotdogDetector")
            .field("classifier", &self.classifier.name())
            .field("target_index", &self.target_index)
            .field("max_image_bytes", &self.max_image_bytes)
            .finish()
    }
}

impl HotdogDetector {
    pub fn new(classifier: Arc<dyn ImageClassifier>) -> Self {
        Self {
            classifier,
            target_index: HOTDOG_INDEX,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_target_index(mut self, target_index: usize) -> Self {
        self.target_index = target_index;
        self
    }

    pub fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Check one uploaded image
    ///
    /// CPU-bound; call from a blocking context.
    pub fn check(&self, bytes: &[u8]) -> Result<CheckedImage, DetectError> {
        let start = Instant::now();

        let (image, info) = decode_image_bytes(bytes, self.max_image_bytes)?;
        debug!(
            "Decoded {} image: {}x{}, {} bytes",
            format_name(info.format),
            info.width,
            info.height,
            info.size_bytes
        );

        let input = preprocess_for_classification(&image);
        let scores = self.classifier.scores(&input)?;
        let prediction = top1(&scores)?;
        let verdict = Verdict::from_top1(prediction.index, self.target_index);

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Classified image: top1={} p={:.3} verdict={} ({}ms)",
            prediction.index, prediction.probability, verdict, processing_time_ms
        );

        Ok(CheckedImage {
            verdict,
            top1_index: prediction.index,
            top1_probability: prediction.probability,
            base64: encode_base64(bytes),
            mime: DISPLAY_MIME,
            processing_time_ms,
        })
    }
}
