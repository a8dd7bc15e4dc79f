//! Filter composition from white balance and scene temperatures

use super::{FilterDescription, FilterEffect};

/// Mismatches smaller than this are rendered without any cast.
pub const NEUTRAL_THRESHOLD_KELVIN: f64 = 200.0;

/// Mismatch at which the cast reaches full intensity.
pub const MAX_EFFECT_DIFF_KELVIN: f64 = 4000.0;

/// Compose the color cast produced by a white-balance setting under a light.
///
/// A setting above the scene light makes the camera compensate for light
/// that isn't there, so the image comes out warmer; below it, cooler.
///
/// Warm casts lead with a sepia tone to build the orange bias. Cool casts
/// rely on hue rotation alone, so the two directions differ in form and not
/// only in sign.
///
/// # Arguments
/// * `wb_kelvin` - Camera white-balance setting in Kelvin
/// * `scene_kelvin` - Actual scene light temperature in Kelvin
pub fn white_balance_filter(wb_kelvin: f64, scene_kelvin: f64) -> FilterDescription {
    let diff = wb_kelvin - scene_kelvin;

    if diff.abs() < NEUTRAL_THRESHOLD_KELVIN {
        return FilterDescription::NoEffect;
    }

    let normalized = (diff / MAX_EFFECT_DIFF_KELVIN).clamp(-1.0, 1.0);
    let intensity = normalized.abs();

    let effects = if normalized > 0.0 {
        vec![
            FilterEffect::Sepia(intensity * 80.0),
            FilterEffect::HueRotate(intensity * -15.0),
            FilterEffect::Saturate(100.0 + intensity * 40.0),
            FilterEffect::Brightness(100.0 + intensity * 5.0),
        ]
    } else {
        vec![
            FilterEffect::HueRotate(intensity * 45.0),
            FilterEffect::Saturate(100.0 + intensity * 30.0),
            FilterEffect::Brightness(100.0 - intensity * 5.0),
        ]
    };

    FilterDescription::Effects(effects)
}
