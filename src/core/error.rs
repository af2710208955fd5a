//! Error types for Lania

use thiserror::Error;

/// Result type alias for Lania operations
pub type LaniaResult<T> = Result<T, LaniaError>;

/// Main error type for Lania
#[derive(Error, Debug)]
pub enum LaniaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported project: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Project config not found. Run 'lan create' first.")]
    ConfigNotFound,

    #[error("Working directory is not empty")]
    DirectoryNotEmpty,

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User input error: {0}")]
    Dialoguer(String),

    #[error("{0}")]
    Other(String),
}

impl From<dialoguer::Error> for LaniaError {
    fn from(err: dialoguer::Error) -> Self {
        LaniaError::Dialoguer(err.to_string())
    }
}

impl LaniaError {
    /// Create a generic error from a string
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LaniaError::Other(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LaniaError::Config(msg.into())
    }

    /// Create a registry error
    pub fn registry<S: Into<String>>(msg: S) -> Self {
        LaniaError::Registry(msg.into())
    }

    /// Create an unsupported-combination error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        LaniaError::Unsupported(msg.into())
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LaniaError::PackageNotFound(_) => 2,
            LaniaError::Unsupported(_) => 3,
            LaniaError::ConfigNotFound | LaniaError::DirectoryNotEmpty => 5,
            _ => 1,
        }
    }
}
