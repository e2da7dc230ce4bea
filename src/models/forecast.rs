use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One raw temperature observation as delivered by the forecast API
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub kelvin: f64,
}

/// Aggregated temperatures for one calendar day
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub temp: f64,
    pub measure_count: u32,
}

/// The aggregated forecast as it is persisted to file
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub forecast_location: String,
    pub forecast_min_temp: f64,
    pub forecast_max_temp: f64,
    pub forecast_details: Vec<DaySummary>,
}
