//! Temperature to display color conversion

use super::Rgb;

/// Convert a color temperature in Kelvin to an approximate display color
///
/// Based on Tanner Helland's curve fit of the Planckian locus.
/// Reference: https://tannerhelland.com/2012/09/18/convert-temperature-rgb-algorithm-code.html
///
/// Any finite positive temperature is accepted. Values outside the fit's
/// natural range simply saturate, which is what legends quoting 1800K or
/// 10000K rely on.
///
/// # Arguments
/// * `kelvin` - Color temperature in Kelvin
///
/// # Returns
/// The light color with each channel rounded to the nearest integer
#[allow(clippy::excessive_precision)] // Published constants from Tanner Helland algorithm
pub fn kelvin_to_rgb(kelvin: f64) -> Rgb {
    let temp = kelvin / 100.0;

    let r = if temp <= 66.0 {
        255.0
    } else {
        329.698727446 * (temp - 60.0).powf(-0.1332047592)
    };

    let g = if temp <= 66.0 {
        99.4708025861 * temp.ln() - 161.1195681661
    } else {
        288.1221695283 * (temp - 60.0).powf(-0.0755148492)
    };

    let b = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.5177312231 * (temp - 10.0).ln() - 305.0447927307
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Clamp to the 8-bit range, then round.
#[inline]
fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}
