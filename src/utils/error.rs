use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsolidationError {
    #[error("Source file not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 in {} at line {line}", path.display())]
    Decode { path: PathBuf, line: usize },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

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
    Source,
    Io,
    Encoding,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConsolidationError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingSource { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingSource { .. } => ErrorCategory::Source,
            Self::Io { .. } => ErrorCategory::Io,
            Self::Decode { .. } => ErrorCategory::Encoding,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Source | ErrorCategory::Encoding => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Exit code used by the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingSource { path } => {
                format!("Check that {} exists and the path is spelled correctly", path.display())
            }
            Self::Io { path, .. } => format!(
                "Check permissions and free space for {}",
                path.display()
            ),
            Self::Decode { path, .. } => format!(
                "Re-encode {} as UTF-8 (e.g. `iconv -t UTF-8`)",
                path.display()
            ),
            Self::SerializationError(_) => "Try the text report format instead".to_string(),
            Self::TomlError(_) => "Check the TOML syntax of the job file".to_string(),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Review the command line arguments or job file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingSource { path } => format!("Word list not found: {}", path.display()),
            Self::Io { path, source } => {
                format!("Could not read or write {}: {}", path.display(), source)
            }
            Self::Decode { path, line } => {
                format!("{} is not valid UTF-8 (line {})", path.display(), line)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConsolidationError>;
