use druid::PlatformError;
use thiserror::Error;

use crate::config::ConfigLoadError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error while loading config: {0}")]
    ConfigLoadError(#[from] ConfigLoadError),
    #[error("Error while initializing GUI widget: {0}")]
    DruidError(#[from] PlatformError),
}
