// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Classifier seam and top-1 selection

use ndarray::Array4;
use thiserror::Error;

/// Number of classes in the ImageNet-1k label space
pub const IMAGENET_CLASSES: usize = 1000;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Model file not found: {0}")]
    ModelNotFound(String),

    #[error("Failed to load model: {0}")]
    LoadFailed(String),

    #[error("Invalid input shape: {0:?}, expected [1, 3, H, W]")]
    InvalidInput(Vec<usize>),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("Model returned no scores")]
    EmptyOutput,
}

/// A pretrained image classifier
///
/// Implementations take a preprocessed NCHW tensor of shape `[1, 3, H, W]`
/// and return one raw score per class. They are loaded once and shared
/// read-only across requests.
pub trait ImageClassifier: Send + Sync {
    /// Short model name for logs
    fn name(&self) -> &str;

    /// Raw class scores (logits) for a single image
    fn scores(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError>;
}

/// Top-1 result of a classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Arg-max class index
    pub index: usize,
    /// Softmax probability of that class
    pub probability: f32,
}

/// Numerically stable softmax
pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the largest value; ties go to the lowest index
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Turn raw scores into a top-1 prediction
pub fn top1(scores: &[f32]) -> Result<Prediction, ClassifierError> {
    let probabilities = softmax(scores);
    let index = argmax(&probabilities).ok_or(ClassifierError::EmptyOutput)?;
    Ok(Prediction {
        index,
        probability: probabilities[index],
    })
}
