//! Relative luminance and contrast ratio
//!
//! Implements the WCAG 2.x definitions:
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use super::Color;
use crate::constants::{contrast, luminance, srgb};

/// Convert a normalized sRGB channel value to linear light
pub fn linearize(value: f64) -> f64 {
    if value <= srgb::LINEAR_THRESHOLD {
        value / srgb::LINEAR_DIVISOR
    } else {
        ((value + srgb::GAMMA_OFFSET) / srgb::GAMMA_SCALE).powf(srgb::GAMMA_EXPONENT)
    }
}

/// Relative luminance of a color, in [0, 1]
pub fn relative_luminance(color: Color) -> f64 {
    let normalized = color.to_srgb_f64();
    luminance::RED_WEIGHT * linearize(normalized.red)
        + luminance::GREEN_WEIGHT * linearize(normalized.green)
        + luminance::BLUE_WEIGHT * linearize(normalized.blue)
}

/// Contrast ratio between two colors, in [1, 21]
///
/// Order of the arguments does not matter.
pub fn contrast_ratio(first: Color, second: Color) -> f64 {
    let l1 = relative_luminance(first);
    let l2 = relative_luminance(second);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + contrast::FLARE) / (darker + contrast::FLARE)
}
