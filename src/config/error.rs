use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("value for {path} not found")]
    NotFound { path: String },

    #[error("error converting {path} to {target}")]
    Conversion { path: String, target: &'static str },

    #[error("{path} is required, please specify it by adding key -k {path}:<value>")]
    Required { path: String },

    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read config stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to encode config: {0}")]
    EncodeError(#[from] toml::ser::Error),

    #[error("invalid override '{0}': expected 'dotted.path:value'")]
    InvalidOverride(String),
}
