use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        ReportError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::InvalidArgument { .. } => ErrorCategory::Input,
            ReportError::ConfigError { .. }
            | ReportError::MissingConfigError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReportError::ProcessingError { .. } | ReportError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            ReportError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依錯誤類型給出修正建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReportError::InvalidArgument { field, .. } => {
                format!("Check the value passed for '{}' and run again", field)
            }
            ReportError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file or pass it on the command line", field)
            }
            ReportError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            ReportError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            ReportError::ProcessingError { .. } => {
                "Use smaller amounts; the values overflowed decimal precision".to_string()
            }
            ReportError::SerializationError(_) => "Try the text output format".to_string(),
            ReportError::IoError(_) => "Check that stdout and the config path are accessible".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::InvalidArgument { field, reason } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            ReportError::MissingConfigError { field } => format!("{} is required", field),
            ReportError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is not valid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_is_input_error() {
        let err = ReportError::invalid_argument("raise_percent", "percentage must not be absent");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("raise_percent"));
        assert!(err.recovery_suggestion().contains("raise_percent"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: ReportError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
