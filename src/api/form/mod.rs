// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upload form endpoint
//!
//! Provides GET / with the two-image upload form.

pub mod handler;

pub use handler::{form_handler, FORM_HTML};
