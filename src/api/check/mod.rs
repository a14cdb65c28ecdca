// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Check endpoint module
//!
//! Provides POST /check for classifying two uploaded images.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::check_handler;
pub use request::{CheckSubmission, UploadedImage, ValidSubmission};
pub use response::ResultPage;
