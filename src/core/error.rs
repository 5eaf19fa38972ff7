use std::fmt;
use std::path::PathBuf;

/// Error types for urlsift operations outside the pure filtering core
#[derive(Debug)]
pub enum UrlSiftError {
    /// IO error (reading inputs, writing exports)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Config file that is not valid TOML for [`Config`](crate::config::Config)
    TomlParsing {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// JSON serialization error
    Json(serde_json::Error),

    /// File not found error
    FileNotFound(String),
}

impl fmt::Display for UrlSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlSiftError::Io(err) => write!(f, "IO error: {err}"),
            UrlSiftError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlSiftError::TomlParsing { path, source } => write!(
                f,
                "Invalid TOML in config file '{}': {source}",
                path.display()
            ),
            UrlSiftError::Json(err) => write!(f, "JSON error: {err}"),
            UrlSiftError::FileNotFound(path) => write!(f, "File not found: {path}"),
        }
    }
}

impl std::error::Error for UrlSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlSiftError::Io(err) => Some(err),
            UrlSiftError::TomlParsing { source, .. } => Some(source),
            UrlSiftError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlSiftError {
    fn from(err: std::io::Error) -> Self {
        UrlSiftError::Io(err)
    }
}

impl From<serde_json::Error> for UrlSiftError {
    fn from(err: serde_json::Error) -> Self {
        UrlSiftError::Json(err)
    }
}

/// Type alias for Results using UrlSiftError
pub type Result<T> = std::result::Result<T, UrlSiftError>;
