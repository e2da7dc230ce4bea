use thiserror::Error;

#[derive(Error, Debug)]
#[error("error in communication with OpenWeatherMap: {0}")]
pub struct OpenWeatherError(pub String);
impl From<serde_json::Error> for OpenWeatherError {
    fn from(e: serde_json::Error) -> OpenWeatherError {
        OpenWeatherError(format!("json document error: {}", e.to_string()))
    }
}
impl From<ureq::Error> for OpenWeatherError {
    fn from(e: ureq::Error) -> OpenWeatherError {
        OpenWeatherError(format!("http request error: {}", e.to_string()))
    }
}
impl From<chrono::ParseError> for OpenWeatherError {
    fn from(e: chrono::ParseError) -> OpenWeatherError {
        OpenWeatherError(format!("timestamp parse error: {}", e.to_string()))
    }
}
