use thiserror::Error;

/// Why a single persisted line could not be turned into a candidate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("expected 4 '|'-separated fields, found {found}")]
    MissingFields { found: usize },

    #[error("cgpa '{value}' is not a number")]
    InvalidCgpa { value: String },

    #[error("experience '{value}' is not a non-negative integer")]
    InvalidExperience { value: String },

    #[error("line is not valid UTF-8 (bad byte at column {column})")]
    InvalidEncoding { column: usize },
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Parse error on line {line}: {source}")]
    ParseError {
        line: usize,
        #[source]
        source: CodecError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Io,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::ParseError { .. } => ErrorCategory::Data,
            RosterError::IoError(_) => ErrorCategory::Io,
            RosterError::SerializationError(_) => ErrorCategory::Output,
            RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// IO failures leave the in-memory roster intact, so the caller can retry.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RosterError::ParseError { line, .. } => format!(
                "Fix line {} of the data file so it reads name|cgpa|experience|skill1,skill2",
                line
            ),
            RosterError::IoError(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                "Check the permissions of the data file and its directory".to_string()
            }
            RosterError::IoError(_) => {
                "Check that the data file path exists and is writable, then retry".to_string()
            }
            RosterError::SerializationError(_) => "Retry without --json".to_string(),
            RosterError::ConfigError { .. } | RosterError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            RosterError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            RosterError::MissingConfigError { field } => {
                format!("Set '{}' in the configuration file or on the command line", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::ParseError { line, source } => {
                format!("The data file is damaged at line {} ({})", line, source)
            }
            RosterError::IoError(e) => format!("Could not access the data file: {}", e),
            RosterError::SerializationError(e) => format!("Could not render output: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
