//! Accessibility toolbar settings.
//!
//! This module defines the user-facing accessibility preferences as a plain
//! value. UI code owns an [`AccessibilitySettings`] and passes it explicitly;
//! every state transition is a method on the value.
//!
//! # Configuration Loading
//!
//! Settings can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use wcag_contrast::AccessibilitySettings;
//! use std::path::Path;
//!
//! // Load from file
//! let settings = AccessibilitySettings::from_json_file(Path::new("settings.json"))?;
//!
//! // Or use defaults
//! let settings = AccessibilitySettings::default();
//! # Ok::<(), wcag_contrast::ContrastError>(())
//! ```
//!
//! Missing keys take their default, so a partial document such as
//! `{"fontSize": "large"}` is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::speech;
use crate::{ContrastError, ContrastReport, Result};

/// Complete accessibility preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    /// Page text size
    pub font_size: FontSize,

    /// Page contrast theme
    pub contrast: ContrastMode,

    /// Announce changes through a live region
    pub screen_reader: bool,

    /// Show focus rings for keyboard users
    pub keyboard_navigation: bool,

    /// Horizontal line following the pointer
    pub reading_guide: bool,

    /// Color vision deficiency filter
    pub color_blind_mode: ColorBlindMode,

    /// Focus highlight strength
    pub focus_style: FocusStyle,

    /// Speech synthesis rate multiplier
    pub speech_rate: f32,

    /// Speech synthesis pitch
    pub speech_pitch: f32,

    /// Caption text size
    pub caption_size: FontSize,

    /// Caption text color
    pub caption_color: Color,

    /// Caption background color
    pub caption_background: Color,

    /// Enlarge pointer targets
    pub enhanced_touch_targets: bool,

    /// Hide decorative page elements
    pub simplified_interface: bool,

    /// Name of the preferred speech voice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_voice: Option<String>,
}

/// Text size steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
    XLarge,
}

/// Page contrast theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    #[default]
    Normal,
    High,
    Inverse,
}

/// Color vision deficiency simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBlindMode {
    #[default]
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Monochromacy,
}

/// Focus outline strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusStyle {
    #[default]
    Normal,
    High,
    Extra,
}

impl FontSize {
    const ORDER: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Normal,
        FontSize::Large,
        FontSize::XLarge,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Next larger size, staying at the largest
    pub fn larger(self) -> Self {
        Self::ORDER[(self.index() + 1).min(Self::ORDER.len() - 1)]
    }

    /// Next smaller size, staying at the smallest
    pub fn smaller(self) -> Self {
        Self::ORDER[self.index().saturating_sub(1)]
    }

    /// Caption font size in CSS pixels
    pub fn caption_px(self) -> u32 {
        match self {
            FontSize::Small => 14,
            FontSize::Normal => 16,
            FontSize::Large => 20,
            FontSize::XLarge => 24,
        }
    }
}

impl ContrastMode {
    /// Cycle normal -> high -> inverse -> normal
    pub fn next(self) -> Self {
        match self {
            ContrastMode::Normal => ContrastMode::High,
            ContrastMode::High => ContrastMode::Inverse,
            ContrastMode::Inverse => ContrastMode::Normal,
        }
    }
}

impl ColorBlindMode {
    /// Body class applied for this mode, none for normal vision
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            ColorBlindMode::Normal => None,
            ColorBlindMode::Protanopia => Some("protanopia-mode"),
            ColorBlindMode::Deuteranopia => Some("deuteranopia-mode"),
            ColorBlindMode::Tritanopia => Some("tritanopia-mode"),
            ColorBlindMode::Monochromacy => Some("monochromacy-mode"),
        }
    }
}

impl FocusStyle {
    pub fn outline_color(self) -> Color {
        match self {
            FocusStyle::Normal => Color::new(0x21, 0x96, 0xF3),
            FocusStyle::High => Color::new(0xFF, 0x00, 0x00),
            FocusStyle::Extra => Color::new(0x00, 0xFF, 0x00),
        }
    }

    /// Outline width and offset in CSS pixels
    pub fn outline_width_px(self) -> u32 {
        match self {
            FocusStyle::Normal => 2,
            FocusStyle::High => 3,
            FocusStyle::Extra => 5,
        }
    }

    /// Contrast of the focus outline against a page background
    pub fn contrast_against(self, background: Color) -> ContrastReport {
        ContrastReport::new(self.outline_color(), background)
    }
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size: FontSize::Normal,
            contrast: ContrastMode::Normal,
            screen_reader: false,
            keyboard_navigation: false,
            reading_guide: false,
            color_blind_mode: ColorBlindMode::Normal,
            focus_style: FocusStyle::Normal,
            speech_rate: speech::DEFAULT_RATE,
            speech_pitch: speech::DEFAULT_PITCH,
            caption_size: FontSize::Normal,
            caption_color: Color::WHITE,
            caption_background: Color::BLACK,
            enhanced_touch_targets: false,
            simplified_interface: false,
            selected_voice: None,
        }
    }
}

impl AccessibilitySettings {
    /// Restore every setting to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn increase_font_size(&mut self) -> FontSize {
        self.font_size = self.font_size.larger();
        self.font_size
    }

    pub fn decrease_font_size(&mut self) -> FontSize {
        self.font_size = self.font_size.smaller();
        self.font_size
    }

    /// Advance to the next contrast theme and return it
    pub fn cycle_contrast(&mut self) -> ContrastMode {
        self.contrast = self.contrast.next();
        self.contrast
    }

    /// Check numeric settings against their accepted ranges
    ///
    /// # Errors
    ///
    /// Returns [`ContrastError::InvalidParameter`] naming the first
    /// out-of-range field
    pub fn validate(&self) -> Result<()> {
        if !(speech::MIN_RATE..=speech::MAX_RATE).contains(&self.speech_rate) {
            return Err(ContrastError::invalid_parameter("speechRate", self.speech_rate));
        }
        if !(speech::MIN_PITCH..=speech::MAX_PITCH).contains(&self.speech_pitch) {
            return Err(ContrastError::invalid_parameter("speechPitch", self.speech_pitch));
        }
        Ok(())
    }

    /// Contrast of caption text on the caption background
    pub fn caption_contrast(&self) -> ContrastReport {
        ContrastReport::new(self.caption_color, self.caption_background)
    }

    /// Parse and validate settings from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ContrastError::settings_io(format!("failed to read {}", path.display()), e)
        })?;
        let settings = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded accessibility settings");
        Ok(settings)
    }

    /// Save settings to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        std::fs::write(path, json).map_err(|e| {
            ContrastError::settings_io(format!("failed to write {}", path.display()), e)
        })?;
        tracing::debug!(path = %path.display(), "saved accessibility settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComplianceTier;

    #[test]
    fn test_defaults() {
        let settings = AccessibilitySettings::default();
        assert_eq!(settings.font_size, FontSize::Normal);
        assert_eq!(settings.contrast, ContrastMode::Normal);
        assert_eq!(settings.caption_color, Color::WHITE);
        assert_eq!(settings.caption_background, Color::BLACK);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_font_size_clamps() {
        assert_eq!(FontSize::XLarge.larger(), FontSize::XLarge);
        assert_eq!(FontSize::Small.smaller(), FontSize::Small);
        assert_eq!(FontSize::Normal.larger(), FontSize::Large);
        assert_eq!(FontSize::Normal.smaller(), FontSize::Small);

        let mut settings = AccessibilitySettings::default();
        for _ in 0..5 {
            settings.increase_font_size();
        }
        assert_eq!(settings.font_size, FontSize::XLarge);
        assert_eq!(settings.decrease_font_size(), FontSize::Large);
        assert_eq!(settings.font_size.caption_px(), 20);
    }

    #[test]
    fn test_contrast_cycle() {
        let mut settings = AccessibilitySettings::default();
        assert_eq!(settings.cycle_contrast(), ContrastMode::High);
        assert_eq!(settings.cycle_contrast(), ContrastMode::Inverse);
        assert_eq!(settings.cycle_contrast(), ContrastMode::Normal);
    }

    #[test]
    fn test_reset() {
        let mut settings = AccessibilitySettings {
            screen_reader: true,
            font_size: FontSize::Small,
            selected_voice: Some("Ting-Ting".to_string()),
            ..Default::default()
        };
        settings.reset();
        assert_eq!(settings, AccessibilitySettings::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = AccessibilitySettings::from_json_str(
            r##"{"fontSize": "xlarge", "contrast": "inverse", "captionColor": "#ffff00"}"##,
        )
        .unwrap();
        assert_eq!(settings.font_size, FontSize::XLarge);
        assert_eq!(settings.contrast, ContrastMode::Inverse);
        assert_eq!(settings.caption_color, Color::new(255, 255, 0));
        assert_eq!(settings.caption_background, Color::BLACK);
        assert_eq!(settings.speech_rate, speech::DEFAULT_RATE);
    }

    #[test]
    fn test_json_rejects_bad_values() {
        let err = AccessibilitySettings::from_json_str(r#"{"speechRate": 9.0}"#).unwrap_err();
        assert!(matches!(err, ContrastError::InvalidParameter { ref parameter, .. } if parameter == "speechRate"));

        let err = AccessibilitySettings::from_json_str(r#"{"captionColor": "yellow"}"#).unwrap_err();
        assert!(matches!(err, ContrastError::SettingsFormat { .. }));

        let err = AccessibilitySettings::from_json_str(r#"{"fontSize": "huge"}"#).unwrap_err();
        assert!(matches!(err, ContrastError::SettingsFormat { .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = AccessibilitySettings {
            color_blind_mode: ColorBlindMode::Tritanopia,
            focus_style: FocusStyle::Extra,
            speech_pitch: 1.5,
            ..Default::default()
        };
        let json = settings.to_json_string().unwrap();
        assert!(json.contains("\"colorBlindMode\": \"tritanopia\""));
        assert!(!json.contains("selectedVoice"));
        assert_eq!(AccessibilitySettings::from_json_str(&json).unwrap(), settings);
    }

    #[test]
    fn test_caption_contrast_defaults() {
        let report = AccessibilitySettings::default().caption_contrast();
        assert!((report.ratio - 21.0).abs() < 1e-6);
        assert_eq!(report.tier, ComplianceTier::AAA);
    }

    #[test]
    fn test_focus_outline_on_white() {
        assert_eq!(FocusStyle::Normal.outline_color().to_string(), "#2196F3");
        assert_eq!(FocusStyle::Normal.contrast_against(Color::WHITE).tier, ComplianceTier::A);
        assert_eq!(FocusStyle::Extra.outline_width_px(), 5);
    }

    #[test]
    fn test_color_blind_class() {
        assert_eq!(ColorBlindMode::Normal.css_class(), None);
        assert_eq!(ColorBlindMode::Deuteranopia.css_class(), Some("deuteranopia-mode"));
    }
}
