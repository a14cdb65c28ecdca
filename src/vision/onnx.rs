// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ONNX Runtime backed classifier
//!
//! Wraps a ResNet-style ImageNet classifier exported to ONNX (for example
//! torchvision's `resnet18` with default weights). Runs on CPU only.

use ndarray::Array4;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::classifier::{ClassifierError, ImageClassifier};

fn load_failed<E: std::fmt::Display>(e: E) -> ClassifierError {
    ClassifierError::LoadFailed(e.to_string())
}

fn inference_failed<E: std::fmt::Display>(e: E) -> ClassifierError {
    ClassifierError::InferenceFailed(e.to_string())
}

/// Pretrained ONNX image classifier
#[derive(Clone)]
pub struct OnnxClassifier {
    /// ONNX Runtime session (run needs exclusive access)
    session: Arc<Mutex<Session>>,
    /// Model input name
    input_name: String,
    /// Model name derived from the file stem
    model_name: String,
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("model_name", &self.model_name)
            .field("input_name", &self.input_name)
            .finish_non_exhaustive()
    }
}

impl OnnxClassifier {
    /// Load the classifier from an ONNX file
    ///
    /// # Errors
    /// Returns error if:
    /// - Model file not found
    /// - ONNX Runtime initialization fails
    pub fn load<P: AsRef<Path>>(model_path: P, intra_threads: usize) -> Result<Self, ClassifierError> {
        let model_path = model_path.as_ref();

        if !model_path.exists() {
            return Err(ClassifierError::ModelNotFound(
                model_path.display().to_string(),
            ));
        }

        info!("Loading classifier model from {}", model_path.display());

        let session = Session::builder()
            .map_err(load_failed)?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .map_err(load_failed)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(load_failed)?
            .with_intra_threads(intra_threads)
            .map_err(load_failed)?
            .commit_from_file(model_path)
            .map_err(load_failed)?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .unwrap_or_else(|| "input".to_string());

        if let Some(input) = session.inputs.first() {
            debug!("Classifier input shape: {:?}", input.input_type);
        }

        let model_name = model_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "onnx-classifier".to_string());

        info!("✅ Classifier {} loaded (CPU-only, input: {})", model_name, input_name);

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            model_name,
        })
    }
}

impl ImageClassifier for OnnxClassifier {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn scores(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let shape = input.shape();
        if shape.len() != 4 || shape[0] != 1 || shape[1] != 3 {
            return Err(ClassifierError::InvalidInput(shape.to_vec()));
        }

        let input_value = Value::from_array(input.to_owned()).map_err(inference_failed)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ClassifierError::InferenceFailed("session lock poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input_value])
            .map_err(inference_failed)?;

        // Output is [1, num_classes]
        let output_tensor = outputs[0].try_extract_array::<f32>().map_err(inference_failed)?;
        let scores: Vec<f32> = output_tensor.iter().copied().collect();

        if scores.is_empty() {
            return Err(ClassifierError::EmptyOutput);
        }

        debug!("Classifier produced {} scores", scores.len());

        Ok(scores)
    }
}
