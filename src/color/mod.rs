//! Color parsing and luminance module
//!
//! This module handles hex color parsing and the WCAG relative luminance
//! and contrast ratio formulas.

pub mod hex;
pub mod luminance;

pub use hex::{parse_color, Color};
pub use luminance::{contrast_ratio, linearize, relative_luminance};
