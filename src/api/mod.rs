// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod check;
pub mod errors;
pub mod form;
pub mod http_server;

pub use check::{check_handler, CheckSubmission, ResultPage, UploadedImage};
pub use errors::ApiError;
pub use form::form_handler;
pub use http_server::{create_app, start_server, AppState};
