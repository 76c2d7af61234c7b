//! Error types for frankhertz.
//!
//! Config loading and scene selection are the only fallible operations;
//! the motion and timeline code never fails at runtime.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Failed to read a file from disk.
    Io(std::io::Error),
    /// `config.toml` is not valid TOML or does not match the config schema.
    Parse(toml::de::Error),
    /// A config value is out of range.
    InvalidConfig(String),
    /// No scene is registered under this name.
    UnknownScene(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "Failed to read config file: {}", e),
            Error::Parse(e) => write!(f, "Failed to parse config file: {}", e),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::UnknownScene(name) => write!(
                f,
                "Unknown scene '{}'. Available scenes: frank_hertz, collision",
                name
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Parse(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
