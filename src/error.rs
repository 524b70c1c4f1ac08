//! Error types for the wcag_contrast library

use thiserror::Error;

/// Result type alias for wcag_contrast operations
pub type Result<T> = std::result::Result<T, ContrastError>;

/// Error types for contrast evaluation and settings handling
#[derive(Error, Debug)]
pub enum ContrastError {
    /// Color string is not exactly six hex digits with an optional leading `#`
    #[error("Invalid color format: {input:?} (expected #RRGGBB)")]
    InvalidColorFormat { input: String },

    /// Settings value outside its accepted range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Settings file could not be read or written
    #[error("Settings I/O error: {message}")]
    SettingsIo {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be encoded or decoded as JSON
    #[error("Settings format error: {source}")]
    SettingsFormat {
        #[from]
        source: serde_json::Error,
    },
}

impl ContrastError {
    /// Create an invalid color error for the given input
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a settings I/O error with context
    pub fn settings_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::SettingsIo {
            message: message.into(),
            source,
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// A malformed color can always fall back to black via
    /// [`parse_color`](crate::parse_color).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ContrastError::InvalidColorFormat { .. } | ContrastError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ContrastError::InvalidColorFormat { input } => {
                format!(
                    "\"{}\" is not a valid color. Please use a six digit hex value such as #1A2B3C.",
                    input
                )
            }
            ContrastError::InvalidParameter { parameter, value } => {
                format!("The value {} is not allowed for {}.", value, parameter)
            }
            ContrastError::SettingsIo { .. } | ContrastError::SettingsFormat { .. } => {
                "Could not load or save accessibility settings. Defaults will be used.".to_string()
            }
        }
    }
}
