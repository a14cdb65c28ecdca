// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ImageNet preprocessing for the classifier

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use ndarray::Array4;

/// Shorter side after the first resize
pub const RESIZE_SHORT_SIDE: u32 = 256;

/// Side of the square center crop fed to the model
pub const CROP_SIZE: u32 = 224;

/// Mean values for normalization (ImageNet)
pub const MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Std values for normalization (ImageNet)
pub const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Preprocess an image for classification
///
/// Steps:
/// 1. Resize so the shorter side is RESIZE_SHORT_SIDE (aspect ratio kept)
/// 2. Center-crop to CROP_SIZE x CROP_SIZE
/// 3. Convert to RGB
/// 4. Normalize with ImageNet mean/std: (pixel/255 - mean) / std
/// 5. Convert to NCHW tensor format [1, 3, 224, 224]
///
/// The resize target grows with the aspect ratio; images should pass
/// `check_dimensions` first, as `decode_image_bytes` does.
pub fn preprocess_for_classification(image: &DynamicImage) -> Array4<f32> {
    let resized = resize_short_side(image, RESIZE_SHORT_SIDE);
    let cropped = center_crop(&resized, CROP_SIZE);
    let rgb = cropped.to_rgb8();

    let size = CROP_SIZE as usize;
    let mut tensor = Array4::zeros((1, 3, size, size));

    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            let normalized = (pixel[c] as f32 / 255.0 - MEAN[c]) / STD[c];
            tensor[[0, c, y as usize, x as usize]] = normalized;
        }
    }

    tensor
}

/// Output dimensions when scaling the shorter side to `short_side`
///
/// The longer side is truncated, matching the usual torchvision `Resize(int)`.
pub fn short_side_dimensions(width: u32, height: u32, short_side: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (short_side, short_side);
    }

    if width <= height {
        let long = (short_side as u64 * height as u64 / width as u64) as u32;
        (short_side, long.max(short_side))
    } else {
        let long = (short_side as u64 * width as u64 / height as u64) as u32;
        (long.max(short_side), short_side)
    }
}

/// Resize with aspect ratio preservation so the shorter side is `short_side`
pub fn resize_short_side(image: &DynamicImage, short_side: u32) -> DynamicImage {
    let (orig_w, orig_h) = image.dimensions();
    let (new_w, new_h) = short_side_dimensions(orig_w, orig_h, short_side);

    if (new_w, new_h) == (orig_w, orig_h) {
        return image.clone();
    }

    image.resize_exact(new_w, new_h, FilterType::Triangle)
}

/// Crop a `size` x `size` square from the center of the image
///
/// Images smaller than `size` on either side are resized up first.
pub fn center_crop(image: &DynamicImage, size: u32) -> DynamicImage {
    let (w, h) = image.dimensions();
    if w < size || h < size {
        return center_crop(&resize_short_side(image, size), size);
    }

    let left = ((w - size) as f32 / 2.0).round() as u32;
    let top = ((h - size) as f32 / 2.0).round() as u32;

    image.crop_imm(left, top, size, size)
}
