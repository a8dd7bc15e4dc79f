use wblab_core::presets::{nearest_preset, Preset, WB_PRESETS};

fn describe(preset: &Preset) -> String {
    format!(
        "{} {:<12} {:>5}K  {}",
        preset.icon, preset.name, preset.kelvin, preset.description
    )
}

/// List the built-in white balance presets.
pub fn cmd_presets(json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(&WB_PRESETS)
            .map_err(|e| format!("Failed to serialize presets: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    for preset in &WB_PRESETS {
        println!("  {}", describe(preset));
    }
    Ok(())
}

/// Show the preset closest to a temperature.
pub fn cmd_nearest(kelvin: f64, json: bool) -> Result<(), String> {
    let preset = nearest_preset(kelvin);

    if json {
        let out = serde_json::to_string_pretty(preset)
            .map_err(|e| format!("Failed to serialize preset: {}", e))?;
        println!("{}", out);
    } else {
        println!("{}", describe(preset));
    }
    Ok(())
}
