//! Temperature scale legend and slider marks

use crate::color::{kelvin_to_rgb, Rgb};
use serde::{Deserialize, Serialize};

/// A labelled point on the color temperature legend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleStop {
    pub kelvin: f64,
    pub label: &'static str,
}

impl ScaleStop {
    /// Light color at this stop
    pub fn swatch(&self) -> Rgb {
        kelvin_to_rgb(self.kelvin)
    }
}

/// Legend stops from candle light to blue sky.
pub const TEMPERATURE_SCALE: [ScaleStop; 5] = [
    ScaleStop {
        kelvin: 1800.0,
        label: "Candle",
    },
    ScaleStop {
        kelvin: 3200.0,
        label: "Tungsten",
    },
    ScaleStop {
        kelvin: 5500.0,
        label: "Sunlight",
    },
    ScaleStop {
        kelvin: 6500.0,
        label: "Overcast",
    },
    ScaleStop {
        kelvin: 10000.0,
        label: "Blue sky",
    },
];

/// Hand-picked gradient behind the legend, warm to cool.
pub const LEGEND_GRADIENT: [Rgb; 11] = [
    Rgb::from_u32(0xFF4500),
    Rgb::from_u32(0xFF6B35),
    Rgb::from_u32(0xFF8C00),
    Rgb::from_u32(0xFFB347),
    Rgb::from_u32(0xFFD700),
    Rgb::from_u32(0xFFFACD),
    Rgb::from_u32(0xF0F8FF),
    Rgb::from_u32(0xE0FFFF),
    Rgb::from_u32(0xB0E0E6),
    Rgb::from_u32(0x87CEEB),
    Rgb::from_u32(0x6495ED),
];

/// Gradient painted on the white-balance slider track.
pub const SLIDER_GRADIENT: [Rgb; 6] = [
    Rgb::from_u32(0xFF6B35),
    Rgb::from_u32(0xFFB347),
    Rgb::from_u32(0xFFFACD),
    Rgb::from_u32(0xE0FFFF),
    Rgb::from_u32(0x87CEEB),
    Rgb::from_u32(0x6495ED),
];

/// Output width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Narrow screens
    Compact,
    #[default]
    Wide,
}

/// Labelled positions under the white-balance slider.
pub fn slider_marks(layout: Layout) -> &'static [u32] {
    match layout {
        Layout::Compact => &[2500, 5500, 10000],
        Layout::Wide => &[2500, 4000, 5500, 6500, 8000, 10000],
    }
}

/// Sample a gradient at `t` in 0.0-1.0 with evenly spaced stops.
pub fn sample_gradient(stops: &[Rgb], t: f64) -> Rgb {
    match stops.len() {
        0 => Rgb::BLACK,
        1 => stops[0],
        n => {
            let pos = t.clamp(0.0, 1.0) * (n - 1) as f64;
            let i = (pos.floor() as usize).min(n - 2);
            stops[i].mix(stops[i + 1], pos - i as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_ordered() {
        for pair in TEMPERATURE_SCALE.windows(2) {
            assert!(pair[0].kelvin < pair[1].kelvin);
        }
    }

    #[test]
    fn test_scale_swatches_run_warm_to_cool() {
        let candle = TEMPERATURE_SCALE[0].swatch();
        let sky = TEMPERATURE_SCALE[4].swatch();
        assert_eq!(candle.b, 0);
        assert_eq!(sky.b, 255);
        assert!(candle.r > sky.r);
    }

    #[test]
    fn test_slider_marks() {
        assert_eq!(slider_marks(Layout::Compact), &[2500, 5500, 10000]);
        assert_eq!(slider_marks(Layout::Wide).len(), 6);
    }

    #[test]
    fn test_sample_gradient_endpoints() {
        assert_eq!(sample_gradient(&LEGEND_GRADIENT, 0.0), LEGEND_GRADIENT[0]);
        assert_eq!(sample_gradient(&LEGEND_GRADIENT, 1.0), LEGEND_GRADIENT[10]);
        assert_eq!(sample_gradient(&LEGEND_GRADIENT, 0.5), LEGEND_GRADIENT[5]);
        assert_eq!(sample_gradient(&[], 0.5), Rgb::BLACK);
    }
}
