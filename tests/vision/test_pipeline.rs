// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Detector pipeline tests: decode -> preprocess -> classify -> verdict

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hotdog_checker::vision::{
    preprocessing::{preprocess_for_classification, CROP_SIZE},
    ClassifierError, DetectError, HotdogDetector, ImageClassifier, ImageError, Verdict,
    DEFAULT_MAX_IMAGE_BYTES, HOTDOG_INDEX, MAX_ASPECT_RATIO,
};
use image::{DynamicImage, ImageFormat};
use ndarray::Array4;

use crate::common::{blue_png, png_of_size, red_png, solid_image, RedMeansHotdog};

/// Returns a fixed score vector and records nothing
struct ScriptedClassifier(Vec<f32>);

impl ImageClassifier for ScriptedClassifier {
    fn name(&self) -> &str {
        "scripted"
    }

    fn scores(&self, _input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        Ok(self.0.clone())
    }
}

fn one_hot(index: usize) -> Vec<f32> {
    let mut scores = vec![-1.0; 1000];
    scores[index] = 3.0;
    scores
}

#[test]
fn test_verdict_is_hot_dog_only_for_target_index() {
    let bytes = red_png();
    for index in [0, 1, HOTDOG_INDEX - 1, HOTDOG_INDEX, HOTDOG_INDEX + 1, 999] {
        let detector = HotdogDetector::new(Arc::new(ScriptedClassifier(one_hot(index))));
        let checked = detector.check(&bytes).unwrap();
        assert_eq!(checked.top1_index, index);
        assert_eq!(
            checked.verdict.is_hot_dog(),
            index == HOTDOG_INDEX,
            "index {}",
            index
        );
    }
}

#[test]
fn test_verdict_uses_configured_target() {
    let detector =
        HotdogDetector::new(Arc::new(ScriptedClassifier(one_hot(5)))).with_target_index(5);
    assert_eq!(detector.check(&red_png()).unwrap().verdict, Verdict::HotDog);
}

#[test]
fn test_same_image_same_verdict() {
    let detector = HotdogDetector::new(Arc::new(RedMeansHotdog));
    let bytes = red_png();
    let first = detector.check(&bytes).unwrap();
    let second = detector.check(&bytes).unwrap();
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.base64, second.base64);
}

#[test]
fn test_fake_classifier_sees_image_content() {
    let detector = HotdogDetector::new(Arc::new(RedMeansHotdog));
    assert_eq!(detector.check(&red_png()).unwrap().verdict, Verdict::HotDog);
    assert_eq!(detector.check(&blue_png()).unwrap().verdict, Verdict::NotHotDog);
}

#[test]
fn test_base64_round_trip() {
    let bytes = solid_image([10, 200, 10], ImageFormat::Bmp);
    let detector = HotdogDetector::new(Arc::new(RedMeansHotdog));
    let checked = detector.check(&bytes).unwrap();
    assert_eq!(STANDARD.decode(&checked.base64).unwrap(), bytes);
    assert_eq!(checked.mime, "image/png");
}

#[test]
fn test_decode_errors_are_typed() {
    let detector = HotdogDetector::new(Arc::new(RedMeansHotdog));

    assert!(matches!(
        detector.check(&[]),
        Err(DetectError::Decode(ImageError::EmptyData))
    ));
    assert!(matches!(
        detector.check(b"GIF8 but nothing else"),
        Err(DetectError::Decode(ImageError::UnsupportedFormat))
    ));
}

#[test]
fn test_empty_scores_are_a_classifier_error() {
    let detector = HotdogDetector::new(Arc::new(ScriptedClassifier(vec![])));
    assert!(matches!(
        detector.check(&red_png()),
        Err(DetectError::Classifier(ClassifierError::EmptyOutput))
    ));
}

#[test]
fn test_preprocessing_handles_extreme_aspect_ratios() {
    for (w, h) in [(1, 1), (600, 10), (10, 600), (225, 224)] {
        let tensor = preprocess_for_classification(&DynamicImage::new_rgb8(w, h));
        assert_eq!(
            tensor.shape(),
            &[1, 3, CROP_SIZE as usize, CROP_SIZE as usize],
            "{}x{}",
            w,
            h
        );
    }
}

#[test]
fn test_thin_strip_is_rejected_before_resizing() {
    // Compresses to a few MB but would resize to 256 x 512,000,000
    let strip = png_of_size(1, 2_000_000);
    assert!(strip.len() < DEFAULT_MAX_IMAGE_BYTES);

    let detector = HotdogDetector::new(Arc::new(RedMeansHotdog));
    assert!(matches!(
        detector.check(&strip),
        Err(DetectError::Decode(ImageError::DimensionsTooLarge(1, 2_000_000)))
    ));
}

#[test]
fn test_widest_accepted_aspect_ratio_is_classified() {
    let detector = HotdogDetector::new(Arc::new(RedMeansHotdog));

    let wide = png_of_size(MAX_ASPECT_RATIO * 4, 4);
    assert!(detector.check(&wide).is_ok());

    let too_wide = png_of_size(MAX_ASPECT_RATIO * 4 + 1, 4);
    assert!(matches!(
        detector.check(&too_wide),
        Err(DetectError::Decode(ImageError::DimensionsTooLarge(..)))
    ));
}
