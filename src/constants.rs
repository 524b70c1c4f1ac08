//! WCAG reference values for contrast evaluation
//!
//! This module contains compile-time constants for the luminance and
//! contrast formulas of WCAG 2.x, plus the ranges used by the settings model.

/// sRGB transfer function parameters as written in WCAG 2.x
///
/// WCAG 2.x uses 0.03928 as the linear segment cutoff (the IEC sRGB
/// standard uses 0.04045). Both produce identical results for 8-bit input.
pub mod srgb {
    /// Maximum 8-bit channel value
    pub const CHANNEL_MAX: f64 = 255.0;

    /// Normalized channel value at or below which the linear segment applies
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor of the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Scale of the power segment
    pub const GAMMA_SCALE: f64 = 1.055;

    /// Exponent of the power segment
    pub const GAMMA_EXPONENT: f64 = 2.4;
}

/// Relative luminance weights (Rec. 709 primaries, D65 white)
pub mod luminance {
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;
}

/// Contrast ratio thresholds and limits
pub mod contrast {
    /// Flare term added to both luminances
    pub const FLARE: f64 = 0.05;

    /// Ratio of a color against itself
    pub const MIN_RATIO: f64 = 1.0;

    /// Ratio of black against white
    pub const MAX_RATIO: f64 = 21.0;

    /// Lowest ratio classified as AAA
    pub const AAA_THRESHOLD: f64 = 7.0;

    /// Lowest ratio classified as AA
    pub const AA_THRESHOLD: f64 = 4.5;

    /// Lowest ratio classified as A
    pub const A_THRESHOLD: f64 = 3.0;
}

/// Accepted ranges for speech settings
pub mod speech {
    pub const MIN_RATE: f32 = 0.5;
    pub const MAX_RATE: f32 = 2.0;
    pub const DEFAULT_RATE: f32 = 1.0;

    pub const MIN_PITCH: f32 = 0.0;
    pub const MAX_PITCH: f32 = 2.0;
    pub const DEFAULT_PITCH: f32 = 1.0;
}
