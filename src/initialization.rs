use std::env;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, Config};
use crate::errors::InitError;
use crate::manager_open_weather::OpenWeather;

/// Log line pattern shared by the file and console appenders
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {m}{n}";

/// Initializes logging and returns the OpenWeather manager together with
/// the loaded configuration.
///
/// The API key is an opaque credential taken from the environment and handed
/// to the manager, it never lives in the configuration file.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn init(config_path: &str) -> Result<(OpenWeather, Config), InitError> {
    let config = load_config(config_path)?;

    init_logging(&config)?;

    let api_key = env::var("OPEN_WEATHER_API_KEY")
        .map_err(|_| InitError("missing OPEN_WEATHER_API_KEY environment variable".to_string()))?;

    let open_weather = OpenWeather::new(api_key, config.open_weather.base_url.clone());

    Ok((open_weather, config))
}

/// Sets up log4rs with a file appender and, when configured, a console appender
///
/// # Arguments
///
/// * 'config' - the loaded configuration holding the log settings
fn init_logging(config: &Config) -> Result<(), InitError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&config.general.log_path)
        .map_err(|e| InitError(format!("log file error: {}", e.to_string())))?;

    let mut builder = LogConfig::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if config.general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder
        .build(root.build(config.general.log_level))
        .map_err(|e| InitError(format!("log config error: {}", e.to_string())))?;

    log4rs::init_config(log_config)
        .map_err(|e| InitError(format!("log init error: {}", e.to_string())))?;

    Ok(())
}
