use thiserror::Error;

/// Main error type for the Retro-Image-Maker library
#[derive(Error, Debug)]
pub enum RetroError {
    #[error("Invalid parameter {name}: {details}")]
    InvalidParameter { name: String, details: String },

    #[error("Unknown style: {name}")]
    UnknownStyle { name: String },

    #[error("Unsupported palette size: {requested} colors requested, capacity is {capacity}")]
    UnsupportedPaletteSize { requested: usize, capacity: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using RetroError
pub type Result<T> = std::result::Result<T, RetroError>;

impl RetroError {
    /// Create an [`RetroError::InvalidParameter`] for the named parameter
    pub fn invalid_parameter<N: Into<String>, D: Into<String>>(name: N, details: D) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            details: details.into(),
        }
    }

    /// Create an [`RetroError::UnknownStyle`]
    pub fn unknown_style<S: Into<String>>(name: S) -> Self {
        Self::UnknownStyle { name: name.into() }
    }

    /// Whether the error was raised by the pipeline itself rather than by
    /// decoding, encoding or configuration around it
    pub fn is_pipeline_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::UnknownStyle { .. } | Self::UnsupportedPaletteSize { .. }
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownStyle { name } => {
                format!(
                    "Style '{}' not found. Run with --list to see the available styles.",
                    name
                )
            }
            Self::UnsupportedPaletteSize { requested, capacity } => {
                format!(
                    "Cannot build a {}-color palette; at most {} colors are supported.",
                    requested, capacity
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Image(e) => {
                format!("Could not read or write the image: {}. Please check the file exists and is a supported format.", e)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_classification() {
        assert!(RetroError::unknown_style("nope").is_pipeline_error());
        assert!(RetroError::invalid_parameter("bits", "0").is_pipeline_error());

        let io = RetroError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(!io.is_pipeline_error());
    }

    #[test]
    fn test_user_message_mentions_style() {
        let message = RetroError::unknown_style("Amiga").user_message();
        assert!(message.contains("Amiga"));
        assert!(message.contains("--list"));
    }
}
