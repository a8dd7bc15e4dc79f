use crate::render::Painter;
use serde::Serialize;
use wblab_core::{kelvin_to_rgb, Rgb};

#[derive(Serialize)]
struct ConvertedTemperature {
    kelvin: f64,
    rgb: Rgb,
    css: String,
    hex: String,
}

/// Print the approximate light color of each temperature.
pub fn cmd_rgb(temperatures: Vec<f64>, color: bool, json: bool) -> Result<(), String> {
    if temperatures.is_empty() {
        return Err("At least one temperature is required".to_string());
    }

    let converted: Vec<_> = temperatures
        .into_iter()
        .map(|kelvin| {
            let rgb = kelvin_to_rgb(kelvin);
            ConvertedTemperature {
                kelvin,
                rgb,
                css: rgb.to_string(),
                hex: rgb.to_hex(),
            }
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&converted)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    let painter = Painter::new(color);
    for entry in &converted {
        println!(
            "{:>7}K  {}  {}  {}",
            entry.kelvin,
            painter.swatch(entry.rgb, 4),
            entry.css,
            entry.hex
        );
    }
    Ok(())
}
