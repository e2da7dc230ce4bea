use chrono::NaiveDate;
use crate::models::forecast::{DaySummary, ForecastResult, ForecastSample};

/// Start value for the running minimum, any realistic sample ends up below it
const MIN_SENTINEL: f64 = 100.0;
/// Start value for the running maximum, any realistic sample ends up above it
const MAX_SENTINEL: f64 = -100.0;

/// Accumulator for all samples sharing one calendar date.
/// Invariant: measure_count equals the number of samples summed into temperature_sum.
struct DayBucket {
    date: NaiveDate,
    measure_count: u32,
    temperature_sum: f64,
}

/// Converts a temperature in Kelvin to degrees Celsius
///
/// # Arguments
///
/// * 'kelvin' - the temperature to convert
fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Rounds a temperature to one decimal
///
/// # Arguments
///
/// * 'value' - the temperature to round
fn round_temp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregates raw forecast samples into one summary per calendar day.
///
/// Each sample is converted to Celsius and rounded to one decimal before it
/// enters the running min/max and its day bucket, and the per day mean is
/// rounded once more when the bucket is folded into a summary. The two
/// roundings compound on fractional boundaries and are both part of the
/// observable output.
///
/// The date of a sample is taken from its timestamp exactly as it arrived,
/// without any timezone conversion, and the returned summaries keep the order
/// in which distinct dates were first seen in the input.
///
/// With no samples at all the min/max stay at their start values of 100.0 and
/// -100.0. That also means a forecast containing temperatures at or beyond
/// those bounds gets its extrema clipped, a documented boundary condition
/// rather than a bug.
///
/// # Arguments
///
/// * 'location_label' - human readable label for the place the forecast covers
/// * 'samples' - raw forecast samples in the order the API delivered them
pub fn aggregate(location_label: &str, samples: &[ForecastSample]) -> ForecastResult {
    let mut min_temp = MIN_SENTINEL;
    let mut max_temp = MAX_SENTINEL;
    let mut buckets: Vec<DayBucket> = Vec::new();

    for sample in samples {
        let date = sample.timestamp.date();
        let temperature = round_temp(kelvin_to_celsius(sample.kelvin));

        match buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => {
                bucket.measure_count += 1;
                bucket.temperature_sum += temperature;
            }
            None => {
                buckets.push(DayBucket { date, measure_count: 1, temperature_sum: temperature });
            }
        }

        if temperature < min_temp {
            min_temp = temperature;
        }
        if temperature > max_temp {
            max_temp = temperature;
        }
    }

    let forecast_details = buckets
        .iter()
        .map(|b| DaySummary {
            date: b.date,
            temp: round_temp(b.temperature_sum / b.measure_count as f64),
            measure_count: b.measure_count,
        })
        .collect();

    ForecastResult {
        forecast_location: location_label.to_string(),
        forecast_min_temp: min_temp,
        forecast_max_temp: max_temp,
        forecast_details,
    }
}
