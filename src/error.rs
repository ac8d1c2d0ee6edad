use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("File watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Catalog not found at: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Unknown route: {0}")]
    InvalidRoute(String),
}

pub type Result<T> = std::result::Result<T, Error>;
