use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("the country code should be a 2 letters code")]
    BadCountryCode,
    #[error("the city name should only contain letters or spaces")]
    BadCityName,
}

/// Validates a city name, which may only contain letters and spaces
///
/// # Arguments
///
/// * 'city' - the city name to validate
pub fn validate_city(city: &str) -> Result<String, ValidationError> {
    if !city.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err(ValidationError::BadCityName);
    }

    Ok(city.to_string())
}

/// Validates a country code and normalizes it to upper case
///
/// # Arguments
///
/// * 'country' - the country code to validate
pub fn validate_country(country: &str) -> Result<String, ValidationError> {
    if country.chars().count() != 2 || !country.chars().all(|c| c.is_alphabetic()) {
        return Err(ValidationError::BadCountryCode);
    }

    Ok(country.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_accepts_letters_and_spaces() {
        assert_eq!(validate_city("Montpellier").unwrap(), "Montpellier");
        assert_eq!(validate_city("New York").unwrap(), "New York");
    }

    #[test]
    fn city_rejects_digits_and_punctuation() {
        assert_eq!(validate_city("M0ntpellier"), Err(ValidationError::BadCityName));
        assert_eq!(validate_city("Saint-Denis"), Err(ValidationError::BadCityName));
    }

    #[test]
    fn country_normalizes_to_upper_case() {
        assert_eq!(validate_country("fr").unwrap(), "FR");
        assert_eq!(validate_country("Us").unwrap(), "US");
    }

    #[test]
    fn country_rejects_wrong_shape() {
        assert_eq!(validate_country("F"), Err(ValidationError::BadCountryCode));
        assert_eq!(validate_country("FRA"), Err(ValidationError::BadCountryCode));
        assert_eq!(validate_country("F1"), Err(ValidationError::BadCountryCode));
        assert_eq!(validate_country(""), Err(ValidationError::BadCountryCode));
    }
}
