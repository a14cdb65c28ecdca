// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration from command-line flags and environment variables

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

use crate::vision::image_utils::DEFAULT_MAX_IMAGE_BYTES;
use crate::vision::{HOTDOG_INDEX, IMAGENET_CLASSES};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid host '{0}'")]
    InvalidHost(String),

    #[error("target index {0} is outside the {1}-class label space")]
    TargetIndexOutOfRange(usize, usize),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Hot dog checker server
#[derive(Parser, Debug, Clone)]
#[command(name = "hotdog-checker")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Upload two images and find out which one is a hot dog", long_about = None)]
pub struct ServerConfig {
    /// Interface to listen on
    #[arg(long, env = "HOTDOG_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "HOTDOG_PORT", default_value_t = 5050)]
    pub port: u16,

    /// Path to the pretrained ImageNet classifier (ONNX)
    #[arg(long, env = "HOTDOG_MODEL_PATH", default_value = "./models/resnet18.onnx")]
    pub model_path: String,

    /// Classifier output index that means "hot dog"
    #[arg(long, env = "HOTDOG_INDEX", default_value_t = HOTDOG_INDEX)]
    pub target_index: usize,

    /// Maximum size of a single uploaded image in bytes
    #[arg(long, env = "HOTDOG_MAX_IMAGE_BYTES", default_value_t = DEFAULT_MAX_IMAGE_BYTES)]
    pub max_image_bytes: usize,

    /// ONNX Runtime intra-op threads
    #[arg(long, env = "HOTDOG_INTRA_THREADS", default_value_t = 4)]
    pub intra_threads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5050,
            model_path: "./models/resnet18.onnx".to_string(),
            target_index: HOTDOG_INDEX,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            intra_threads: 4,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr()?;

        if self.target_index >= IMAGENET_CLASSES {
            return Err(ConfigError::TargetIndexOutOfRange(
                self.target_index,
                IMAGENET_CLASSES,
            ));
        }
        if self.max_image_bytes == 0 {
            return Err(ConfigError::Zero("max_image_bytes"));
        }
        if self.intra_threads == 0 {
            return Err(ConfigError::Zero("intra_threads"));
        }

        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
