use serde::Deserialize;

#[derive(Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
}

#[derive(Deserialize)]
pub struct MainValues {
    pub temp: f64,
}

#[derive(Deserialize)]
pub struct ForecastUnit {
    pub dt_txt: String,
    pub main: MainValues,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub city: City,
    pub list: Vec<ForecastUnit>,
}
