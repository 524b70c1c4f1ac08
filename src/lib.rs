//! # WCAG Contrast
//!
//! A Rust crate for evaluating text/background color contrast against the
//! WCAG 2.x success criteria.
//!
//! This library provides:
//! - Strict `#RRGGBB` parsing, plus a lenient parser that falls back to black
//! - Relative luminance and contrast ratio per WCAG 2.x
//! - Classification into AAA / AA / A / Fail tiers
//! - Serializable accessibility toolbar settings passed as explicit values
//!
//! ## Example
//!
//! ```rust
//! use wcag_contrast::{check_contrast, ComplianceTier};
//!
//! let report = check_contrast("#FFFFFF", "#2196F3")?;
//! assert_eq!(report.formatted_ratio(), "3.12:1");
//! assert_eq!(report.tier, ComplianceTier::A);
//! # Ok::<(), wcag_contrast::ContrastError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod compliance;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{contrast_ratio, parse_color, relative_luminance, Color};
pub use compliance::{classify, ComplianceTier, Indicator};
pub use config::{AccessibilitySettings, ColorBlindMode, ContrastMode, FocusStyle, FontSize};
pub use error::{ContrastError, Result};

/// Complete contrast evaluation of one foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// Text color
    pub foreground: Color,
    /// Background color
    pub background: Color,
    /// WCAG contrast ratio (1.0 to 21.0)
    pub ratio: f64,
    /// Highest tier the ratio reaches
    pub tier: ComplianceTier,
}

impl ContrastReport {
    pub fn new(foreground: Color, background: Color) -> Self {
        let ratio = contrast_ratio(foreground, background);
        let report = Self {
            foreground,
            background,
            ratio,
            tier: classify(ratio),
        };
        tracing::trace!(
            foreground = %foreground,
            background = %background,
            ratio,
            tier = %report.tier,
            "evaluated contrast"
        );
        report
    }

    /// Ratio formatted for display, e.g. `"4.54:1"`
    pub fn formatted_ratio(&self) -> String {
        format!("{:.2}:1", self.ratio)
    }

    pub fn indicator(&self) -> Indicator {
        self.tier.indicator()
    }

    /// Whether the pair reaches at least the given tier
    pub fn passes(&self, tier: ComplianceTier) -> bool {
        self.tier >= tier
    }
}

/// Evaluate contrast between two hex color strings
///
/// # Arguments
///
/// * `foreground` - Text color (e.g., "#FFFFFF")
/// * `background` - Background color (e.g., "2196f3")
///
/// # Errors
///
/// Returns [`ContrastError::InvalidColorFormat`] for the first input that is
/// not a six digit hex color
pub fn check_contrast(foreground: &str, background: &str) -> Result<ContrastReport> {
    let foreground = Color::from_hex(foreground)?;
    let background = Color::from_hex(background)?;
    Ok(ContrastReport::new(foreground, background))
}

/// Evaluate contrast, treating malformed colors as black
pub fn check_contrast_lenient(foreground: &str, background: &str) -> ContrastReport {
    ContrastReport::new(parse_color(foreground), parse_color(background))
}
