use wblab_core::white_balance_filter;

/// Print the color cast filter for a white balance under a scene light.
pub fn cmd_filter(wb_kelvin: f64, scene_kelvin: f64, json: bool) -> Result<(), String> {
    let filter = white_balance_filter(wb_kelvin, scene_kelvin);

    if json {
        let out = serde_json::to_string_pretty(&filter)
            .map_err(|e| format!("Failed to serialize filter: {}", e))?;
        println!("{}", out);
    } else {
        println!("{}", filter);
    }
    Ok(())
}
