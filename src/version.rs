// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the hot dog checker

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-resnet18-onnx-2026-10-16";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-16";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "two-image-upload",
    "imagenet-preprocessing",
    "onnx-cpu-inference",
    "concurrent-classification",
    "unreadable-image-errors",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Hot Dog Checker {} ({})", VERSION_NUMBER, BUILD_DATE)
}
