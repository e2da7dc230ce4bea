pub mod errors;

use std::time::Duration;
use chrono::NaiveDateTime;
use ureq::Agent;
use crate::manager_open_weather::errors::OpenWeatherError;
use crate::models::forecast::ForecastSample;
use crate::models::open_weather::FullForecast;

/// Format of the dt_txt field in forecast payload entries
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Struct for managing weather forecasts produced by OpenWeatherMap
pub struct OpenWeather {
    agent: Agent,
    api_key: String,
    base_url: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching weather forecasts
    ///
    /// # Arguments
    ///
    /// * 'api_key' - api key for the OpenWeatherMap forecast API
    /// * 'base_url' - endpoint to fetch forecasts from
    pub fn new(api_key: String, base_url: String) -> OpenWeather {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build();

        let agent = config.into();

        Self { agent, api_key, base_url }
    }

    /// Retrieves the multi day forecast for the given city and country.
    ///
    /// The returned tuple holds the location label as reported by the API
    /// together with one sample per three hour forecast entry, temperatures
    /// still in Kelvin. Any non 2xx response is fatal and reported with its
    /// http status code and reason, there are no retries.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city to get a forecast for
    /// * 'country' - two letter country code qualifying the city
    pub fn fetch(&self, city: &str, country: &str) -> Result<(String, Vec<ForecastSample>), OpenWeatherError> {
        let place = format!("{},{}", city, country);

        let mut res = self.agent
            .get(&self.base_url)
            .query("q", &place)
            .query("appid", &self.api_key)
            .call()?;

        let status = res.status();
        if !status.is_success() {
            return Err(OpenWeatherError(format!("http error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown"))));
        }

        let json = res.body_mut().read_to_string()?;
        let forecast: FullForecast = serde_json::from_str(&json)?;

        samples_from_payload(forecast)
    }
}

/// Flattens a raw forecast payload into the location label and plain samples
///
/// # Arguments
///
/// * 'forecast' - the deserialized forecast payload
fn samples_from_payload(forecast: FullForecast) -> Result<(String, Vec<ForecastSample>), OpenWeatherError> {
    let label = format!("{}({})", forecast.city.name, forecast.city.country);

    let mut samples: Vec<ForecastSample> = Vec::with_capacity(forecast.list.len());
    for unit in forecast.list {
        let timestamp = NaiveDateTime::parse_from_str(&unit.dt_txt, TIMESTAMP_FORMAT)?;
        samples.push(ForecastSample { timestamp, kelvin: unit.main.temp });
    }

    Ok((label, samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"
    {
        "cod": "200",
        "cnt": 3,
        "city": {
            "id": 2992166,
            "name": "Montpellier",
            "country": "FR",
            "timezone": 3600
        },
        "list": [
            {"dt": 1704103200, "dt_txt": "2024-01-01 09:00:00", "main": {"temp": 280.0, "humidity": 75}},
            {"dt": 1704114000, "dt_txt": "2024-01-01 12:00:00", "main": {"temp": 282.5, "humidity": 70}},
            {"dt": 1704178800, "dt_txt": "2024-01-02 06:00:00", "main": {"temp": 278.2, "humidity": 81}}
        ]
    }"#;

    #[test]
    fn payload_maps_to_label_and_samples() {
        let forecast: FullForecast = serde_json::from_str(PAYLOAD).unwrap();
        let (label, samples) = samples_from_payload(forecast).unwrap();

        assert_eq!(label, "Montpellier(FR)");
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].kelvin, 280.0);
        assert_eq!(samples[0].timestamp.to_string(), "2024-01-01 09:00:00");
        assert_eq!(samples[2].timestamp.date().to_string(), "2024-01-02");
    }

    #[test]
    fn malformed_timestamp_is_a_document_error() {
        let forecast: FullForecast = serde_json::from_str(
            r#"{"city": {"name": "X", "country": "YZ"},
                "list": [{"dt_txt": "01/01/2024 09:00", "main": {"temp": 280.0}}]}"#).unwrap();

        assert!(samples_from_payload(forecast).is_err());
    }
}
