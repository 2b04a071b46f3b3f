use thiserror::Error;

use crate::graphic::GraphicId;

/// Errors a scene reports for operations on graphics it does not hold
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("graphic {0} is not in the scene")]
    GraphicNotFound(GraphicId),
}

/// Errors that can occur while loading the toolbar configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
