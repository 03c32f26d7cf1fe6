use crate::config::ContrastPivot;
use image::{Rgb, RgbImage};

/// Calculate BT.601 luma for an RGB pixel
///
/// Formula: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Weights are summed in integer thousandths so pure white lands on exactly
/// 255.0 and always reaches the last palette entry.
///
/// # Returns
/// Luma on the 0.0-255.0 scale
pub fn luminance(pixel: Rgb<u8>) -> f64 {
    let [r, g, b] = pixel.0.map(u32::from);
    (299 * r + 587 * g + 114 * b) as f64 / 1000.0
}

/// Apply gamma correction to a normalized brightness
///
/// # Arguments
/// * `luma` - Luma on the 0.0-255.0 scale
/// * `gamma` - Exponent, 0.8 expands mid-tones
///
/// # Returns
/// `(luma / 255)^gamma`, in [0.0, 1.0] for in-range luma
pub fn gamma_correct(luma: f64, gamma: f32) -> f64 {
    (luma / 255.0).clamp(0.0, 1.0).powf(gamma as f64)
}

/// Resolve the contrast pivot for an image
pub fn contrast_pivot(img: &RgbImage, pivot: ContrastPivot) -> f64 {
    match pivot {
        ContrastPivot::Midpoint => 128.0,
        ContrastPivot::Mean => mean_luma(img),
    }
}

/// 8-bit BT.601 luma, rounded to the nearest integer
pub fn luma_u8(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0.map(u32::from);
    ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
}

/// Mean of the 8-bit luma image, rounded half up; 0.0 for an empty image
pub fn mean_luma(img: &RgbImage) -> f64 {
    let count = img.pixels().len();
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = img.pixels().map(|p| luma_u8(*p) as u64).sum();
    (sum as f64 / count as f64 + 0.5).floor()
}

/// Linear contrast stretch of one channel around `pivot`
///
/// `pivot + (value - pivot) * gain`, clamped to [0, 255] then truncated
pub fn stretch_channel(value: u8, pivot: f64, gain: f32) -> u8 {
    let stretched = pivot + (value as f64 - pivot) * gain as f64;
    stretched.clamp(0.0, 255.0) as u8
}

/// Apply the contrast stretch to every channel of an image in place
pub fn contrast_boost(img: &mut RgbImage, pivot: f64, gain: f32) {
    for pixel in img.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = stretch_channel(*channel, pivot, gain);
        }
    }
}

/// Boost a display color by `factor`, saturating each channel at 255
pub fn boost_color(pixel: Rgb<u8>, factor: f32) -> Rgb<u8> {
    Rgb(pixel.0.map(|c| (c as f64 * factor as f64).floor().min(255.0) as u8))
}
