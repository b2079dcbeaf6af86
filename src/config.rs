use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::Info,
            title: "Enhanced Interactive Linear Regression".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory. A missing file gives the defaults.
    pub fn load() -> Result<Config, ConfigLoadError> {
        Config::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigLoadError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };
        let mut s = String::new();
        BufReader::new(file).read_to_string(&mut s)?;
        Ok(toml::from_str(&s)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    IllegalConfigEntry(#[from] toml::de::Error),
}
