use thiserror::Error;

/// Errors from reading or parsing the configuration file
#[derive(Error, Debug)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> ConfigError {
        ConfigError(format!("file system error: {}", e.to_string()))
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> ConfigError {
        ConfigError(format!("toml document error: {}", e.to_string()))
    }
}

/// Errors while persisting an aggregated forecast
#[derive(Error, Debug)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);
impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> StorageError {
        StorageError(format!("file system error: {}", e.to_string()))
    }
}
impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> StorageError {
        StorageError(format!("json document error: {}", e.to_string()))
    }
}

/// Errors raised during startup, before any forecast is fetched
#[derive(Error, Debug)]
#[error("initialization error: {0}")]
pub struct InitError(pub String);
impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> InitError {
        InitError(e.to_string())
    }
}
