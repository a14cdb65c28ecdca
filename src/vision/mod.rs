// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing module for CPU-based hot dog detection
//!
//! This module provides:
//! - Upload decoding and display encoding
//! - ImageNet preprocessing
//! - A classifier seam with an ONNX Runtime implementation
//! - The binary hot dog verdict
//!
//! Everything runs on CPU.

pub mod classifier;
pub mod detector;
pub mod image_utils;
pub mod onnx;
pub mod preprocessing;
pub mod verdict;

pub use classifier::{ClassifierError, ImageClassifier, Prediction, IMAGENET_CLASSES};
pub use detector::{CheckedImage, DetectError, HotdogDetector};
pub use image_utils::{
    check_dimensions, decode_image_bytes, detect_format, ImageError, ImageInfo, DISPLAY_MIME,
    DEFAULT_MAX_IMAGE_BYTES, MAX_ASPECT_RATIO,
};
pub use onnx::OnnxClassifier;
pub use verdict::{Verdict, HOTDOG_INDEX};
