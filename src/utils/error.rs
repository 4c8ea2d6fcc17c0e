use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Failed to read input file '{path}': {source}")]
    InputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Pattern compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Pattern,
    Configuration,
}

impl TranslateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TranslateError::InputError { .. }
            | TranslateError::OutputError { .. } => ErrorCategory::Io,
            TranslateError::PatternError(_) => ErrorCategory::Pattern,
            TranslateError::ConfigValidationError { .. }
            | TranslateError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TranslateError::InputError { path, .. } => {
                format!("Could not read '{}'", path)
            }
            TranslateError::OutputError { path, .. } => {
                format!("Could not write '{}'", path)
            }
            TranslateError::PatternError(_) => {
                "A phrase could not be turned into a search pattern".to_string()
            }
            TranslateError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            TranslateError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TranslateError::InputError { .. } => {
                "Check that the input file exists, is readable and is UTF-8 encoded"
            }
            TranslateError::OutputError { .. } => {
                "Check that the output directory exists and is writable"
            }
            TranslateError::PatternError(_) => "Shorten the offending phrase in the phrase table",
            TranslateError::ConfigValidationError { .. } => {
                "Fix the phrase table file so it is valid TOML with [[phrases]] entries"
            }
            TranslateError::InvalidConfigValueError { .. } => {
                "Correct the reported value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
