use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use crate::errors::StorageError;
use crate::models::forecast::ForecastResult;

/// Saves an aggregated forecast as pretty printed json and returns the path
/// of the written file.
///
/// The destination directory is created if missing and the file name is
/// derived from the city and country the forecast was requested for. The
/// result is serialized before the file is touched, so a failure leaves
/// either the previous file or no file at all.
///
/// # Arguments
///
/// * 'forecast_dir' - the directory to save the file to
/// * 'city' - the city the forecast was requested for
/// * 'country' - the country code the forecast was requested for
/// * 'result' - the aggregated forecast to save
pub fn save_forecast(forecast_dir: &str, city: &str, country: &str, result: &ForecastResult)
                     -> Result<PathBuf, StorageError> {

    let file_path = PathBuf::from(forecast_dir)
        .join(format!("{}-{}_forecast.json", city, country));

    let json = serde_json::to_string_pretty(result)?;

    fs::create_dir_all(forecast_dir)?;
    fs::write(&file_path, json)?;

    Ok(file_path)
}
