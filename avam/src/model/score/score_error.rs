use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid scoring configuration: {0}")]
    ConfigurationError(String),
}
