use std::env;
use crate::validation::{validate_city, validate_country};

pub struct CliOptions {
    pub city: String,
    pub country: String,
    pub config_path: String,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    let mut config_path: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or_else(|| {
                    "missing value for --config (expected a TOML file path)".to_string()
                })?;
                if config_path.replace(path.clone()).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => return Err(format!("unknown argument: {flag}")),
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    if positional.len() != 2 {
        return Err("expected exactly two arguments: <CITY> <COUNTRY>".to_string());
    }

    let city = validate_city(&positional[0]).map_err(|e| e.to_string())?;
    let country = validate_country(&positional[1]).map_err(|e| e.to_string())?;

    Ok(CliOptions {
        city,
        country,
        config_path: config_path.unwrap_or_else(|| "skycast.toml".to_string()),
    })
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  skycast [--config <path>] <CITY> <COUNTRY>");
    eprintln!();
    eprintln!("  CITY     city to fetch the forecast for, letters and spaces only");
    eprintln!("  COUNTRY  2 letter country code qualifying the city (ex: US, FR)");
}

#[cfg(test)]
mod tests {
    use super::parse_args_from;

    #[test]
    fn accepts_city_and_country() {
        let opts = parse_args_from(vec!["Montpellier".to_string(), "fr".to_string()])
            .expect("parse should succeed");

        assert_eq!(opts.city, "Montpellier");
        assert_eq!(opts.country, "FR");
        assert_eq!(opts.config_path, "skycast.toml");
    }

    #[test]
    fn supports_config_flag() {
        let opts = parse_args_from(vec![
            "--config".to_string(),
            "custom.toml".to_string(),
            "Lund".to_string(),
            "SE".to_string(),
        ])
        .expect("parse should succeed");

        assert_eq!(opts.config_path, "custom.toml");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(parse_args_from(vec!["--verbose".to_string()]).is_err());
    }

    #[test]
    fn rejects_missing_positionals() {
        assert!(parse_args_from(vec!["Montpellier".to_string()]).is_err());
    }

    #[test]
    fn rejects_invalid_city_before_anything_else() {
        assert!(parse_args_from(vec!["M0ntpellier".to_string(), "FR".to_string()]).is_err());
    }

    #[test]
    fn rejects_invalid_country_code() {
        assert!(parse_args_from(vec!["Montpellier".to_string(), "FRA".to_string()]).is_err());
    }
}
