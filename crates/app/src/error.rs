use engine::EngineError;
use thiserror::Error;

use crate::parsing::ParseError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("invalid record: {0}")]
    Record(#[from] ParseError),
}
