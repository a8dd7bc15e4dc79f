//! Temperature parsing: plain Kelvin values or preset names.

use crate::types::Temperature;
use wblab_core::presets::{find_preset, WB_PRESETS};

/// Parse a Kelvin value such as `5500` or `5500K`.
///
/// Rejects non-finite and non-positive values; the core conversion is only
/// defined for positive temperatures.
pub fn parse_kelvin(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_suffix('K')
        .or_else(|| trimmed.strip_suffix('k'))
        .unwrap_or(trimmed)
        .trim();

    let kelvin = digits
        .parse::<f64>()
        .map_err(|_| format!("Invalid temperature: {}", value))?;

    if !kelvin.is_finite() || kelvin <= 0.0 {
        return Err(format!(
            "Temperature must be a positive number of Kelvin, got: {}",
            value
        ));
    }

    Ok(kelvin)
}

/// Parse a temperature given either in Kelvin or as a preset name.
pub fn parse_temperature(value: &str) -> Result<Temperature, String> {
    if let Some(preset) = find_preset(value) {
        return Ok(Temperature::Preset(preset));
    }

    parse_kelvin(value).map(Temperature::Kelvin).map_err(|err| {
        let names: Vec<_> = WB_PRESETS.iter().map(|p| p.name.to_lowercase()).collect();
        format!("{} (expected Kelvin or one of: {})", err, names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kelvin_forms() {
        assert_eq!(parse_kelvin("5500").unwrap(), 5500.0);
        assert_eq!(parse_kelvin("5500K").unwrap(), 5500.0);
        assert_eq!(parse_kelvin(" 3200k ").unwrap(), 3200.0);
        assert_eq!(parse_kelvin("1800.5").unwrap(), 1800.5);
    }

    #[test]
    fn test_parse_kelvin_rejects_bad_values() {
        assert!(parse_kelvin("warm").is_err());
        assert!(parse_kelvin("0").is_err());
        assert!(parse_kelvin("-5500").is_err());
        assert!(parse_kelvin("inf").is_err());
        assert!(parse_kelvin("NaN").is_err());
        assert!(parse_kelvin("").is_err());
    }

    #[test]
    fn test_parse_temperature_preset_names() {
        match parse_temperature("Tungsten").unwrap() {
            Temperature::Preset(p) => assert_eq!(p.kelvin, 2850.0),
            other => panic!("expected preset, got {:?}", other),
        }
        assert_eq!(parse_temperature("flash").unwrap().kelvin(), 5500.0);
        assert_eq!(
            parse_temperature("6500K").unwrap(),
            Temperature::Kelvin(6500.0)
        );
    }

    #[test]
    fn test_parse_temperature_numeric_is_kelvin() {
        assert_eq!(
            parse_temperature("4321").unwrap(),
            Temperature::Kelvin(4321.0)
        );
        assert_eq!(parse_temperature(" 2850k ").unwrap().kelvin(), 2850.0);
        assert!(parse_temperature("-1").is_err());
    }

    #[test]
    fn test_parse_temperature_error_lists_presets() {
        let err = parse_temperature("sunset").unwrap_err();
        assert!(err.contains("daylight"), "{}", err);
    }
}
