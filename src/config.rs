use std::fs;
use std::path::Path;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
#[serde(default)]
pub struct OpenWeatherParameters {
    pub base_url: String,
}

impl Default for OpenWeatherParameters {
    fn default() -> Self {
        OpenWeatherParameters {
            base_url: "https://api.openweathermap.org/data/2.5/forecast".to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct Files {
    pub forecast_dir: String,
}

impl Default for Files {
    fn default() -> Self {
        Files {
            forecast_dir: "forecasts".to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_path: "skycast.log".to_string(),
            log_level: LevelFilter::Info,
            log_to_stdout: true,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub open_weather: OpenWeatherParameters,
    pub files: Files,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items.
///
/// A missing file is not an error, every item has a usable default.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let path = Path::new(config_path);
    if !path.exists() {
        return Ok(Config::default());
    }

    let toml = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("no-such-skycast.toml").unwrap();

        assert_eq!(config.open_weather.base_url, "https://api.openweathermap.org/data/2.5/forecast");
        assert_eq!(config.files.forecast_dir, "forecasts");
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(config.general.log_to_stdout);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let toml = r#"
            [general]
            log_level = "debug"
            log_to_stdout = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert!(!config.general.log_to_stdout);
        assert_eq!(config.files.forecast_dir, "forecasts");
    }

    #[test]
    fn full_file_overrides_everything() {
        let toml = r#"
            [open_weather]
            base_url = "http://localhost:8080/forecast"

            [files]
            forecast_dir = "/var/lib/skycast"

            [general]
            log_path = "/var/log/skycast.log"
            log_level = "warn"
            log_to_stdout = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.open_weather.base_url, "http://localhost:8080/forecast");
        assert_eq!(config.files.forecast_dir, "/var/lib/skycast");
        assert_eq!(config.general.log_path, "/var/log/skycast.log");
        assert_eq!(config.general.log_level, LevelFilter::Warn);
    }
}
