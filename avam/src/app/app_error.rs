use crate::model::score::ScoreError;
use crate::util::fs::FileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    FileError(#[from] FileError),
    #[error(transparent)]
    ScoreError(#[from] ScoreError),
    #[error("failure reading scoring configuration: {0}")]
    ConfigurationError(#[from] config::ConfigError),
    #[error("failure rendering configuration template: {0}")]
    TemplateError(#[from] toml::ser::Error),
    #[error("failure building output features: {0}")]
    OutputError(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidArgument(String),
}
