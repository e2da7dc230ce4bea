use std::process;
use log::{error, info};
use crate::aggregation::aggregate;
use crate::cli::{parse_args, print_usage};
use crate::initialization::init;
use crate::storage::save_forecast;

mod aggregation;
mod cli;
mod config;
mod errors;
mod initialization;
mod manager_open_weather;
mod models;
mod storage;
mod validation;

/// Exit status when the forecast fetch fails
const EXIT_FETCH_FAILED: i32 = 1;
/// Exit status when persisting the forecast fails
const EXIT_WRITE_FAILED: i32 = 2;
/// Exit status when input or configuration is rejected, before any fetch
const EXIT_BAD_INPUT: i32 = 3;

fn main() {
    let options = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            process::exit(EXIT_BAD_INPUT);
        }
    };

    let (open_weather, config) = match init(&options.config_path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(EXIT_BAD_INPUT);
        }
    };

    info!("requesting weather forecast for {}, {}", options.city, options.country);

    let (location, samples) = match open_weather.fetch(&options.city, &options.country) {
        Ok(v) => v,
        Err(e) => {
            error!("forecast fetch for {}, {} failed: {}", options.city, options.country, e);
            process::exit(EXIT_FETCH_FAILED);
        }
    };
    info!("received {} forecast samples for {}", samples.len(), location);

    let result = aggregate(&location, &samples);

    match save_forecast(&config.files.forecast_dir, &options.city, &options.country, &result) {
        Ok(path) => {
            info!("forecast for {} written to {}", location, path.display());
        }
        Err(e) => {
            error!("could not write forecast for {}: {}", location, e);
            process::exit(EXIT_WRITE_FAILED);
        }
    }
}
