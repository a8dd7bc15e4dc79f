//! White balance presets
//!
//! The fixed catalog of camera white-balance presets and lookups over it.

use serde::Serialize;

/// Camera white-balance preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    /// Display name (e.g., "Tungsten")
    pub name: &'static str,

    /// Color temperature in Kelvin
    pub kelvin: f64,

    /// Icon glyph shown on preset buttons
    pub icon: &'static str,

    /// Typical light source for this preset
    pub description: &'static str,
}

/// Built-in presets in display order.
///
/// Daylight and Flash share 5500K; lookups that break ties by order
/// resolve to Daylight.
pub static WB_PRESETS: [Preset; 6] = [
    Preset {
        name: "Tungsten",
        kelvin: 2850.0,
        icon: "💡",
        description: "Classic bulbs",
    },
    Preset {
        name: "Fluorescent",
        kelvin: 4000.0,
        icon: "🔦",
        description: "Neon tubes, offices",
    },
    Preset {
        name: "Daylight",
        kelvin: 5500.0,
        icon: "☀️",
        description: "Midday sun",
    },
    Preset {
        name: "Flash",
        kelvin: 5500.0,
        icon: "⚡",
        description: "Camera flash",
    },
    Preset {
        name: "Cloudy",
        kelvin: 6500.0,
        icon: "☁️",
        description: "Overcast sky",
    },
    Preset {
        name: "Shade",
        kelvin: 7500.0,
        icon: "🏔️",
        description: "Shaded area",
    },
];

/// Find the built-in preset closest to `kelvin`.
///
/// Ties keep the earlier catalog entry, so 5500K gives Daylight.
pub fn nearest_preset(kelvin: f64) -> &'static Preset {
    nearest_from(&WB_PRESETS[0], &WB_PRESETS[1..], kelvin)
}

/// Find the closest entry of an arbitrary catalog.
///
/// Returns `None` only for an empty catalog. Entries are scanned in order and
/// a later entry replaces the current best only when strictly closer.
pub fn nearest_in(kelvin: f64, catalog: &[Preset]) -> Option<&Preset> {
    let (first, rest) = catalog.split_first()?;
    Some(nearest_from(first, rest, kelvin))
}

fn nearest_from<'a>(first: &'a Preset, rest: &'a [Preset], kelvin: f64) -> &'a Preset {
    rest.iter().fold(first, |best, candidate| {
        if (candidate.kelvin - kelvin).abs() < (best.kelvin - kelvin).abs() {
            candidate
        } else {
            best
        }
    })
}

/// All presets set to exactly `kelvin` (used to highlight preset buttons).
pub fn presets_at(kelvin: f64) -> impl Iterator<Item = &'static Preset> {
    WB_PRESETS.iter().filter(move |p| p.kelvin == kelvin)
}

/// Look up a preset by name, ignoring case.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    WB_PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        let names: Vec<_> = WB_PRESETS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Tungsten", "Fluorescent", "Daylight", "Flash", "Cloudy", "Shade"]
        );
    }

    #[test]
    fn test_nearest_exact_match() {
        assert_eq!(nearest_preset(2850.0).name, "Tungsten");
        assert_eq!(nearest_preset(4000.0).name, "Fluorescent");
        assert_eq!(nearest_preset(7500.0).name, "Shade");
    }

    #[test]
    fn test_nearest_tie_prefers_first_entry() {
        // Daylight and Flash are both 5500K
        assert_eq!(nearest_preset(5500.0).name, "Daylight");
        assert_eq!(nearest_preset(5400.0).name, "Daylight");
        assert_eq!(nearest_preset(5600.0).name, "Daylight");

        // Halfway between Fluorescent and Daylight keeps Fluorescent
        assert_eq!(nearest_preset(4750.0).name, "Fluorescent");
        assert_eq!(nearest_preset(4751.0).name, "Daylight");
    }

    #[test]
    fn test_nearest_out_of_range() {
        assert_eq!(nearest_preset(1000.0).name, "Tungsten");
        assert_eq!(nearest_preset(10000.0).name, "Shade");
        assert_eq!(nearest_preset(6000.0).name, "Daylight");
        assert_eq!(nearest_preset(6001.0).name, "Cloudy");
    }

    #[test]
    fn test_nearest_in_custom_catalog() {
        assert!(nearest_in(5000.0, &[]).is_none());

        let reversed: Vec<Preset> = WB_PRESETS.iter().rev().copied().collect();
        assert_eq!(nearest_in(5500.0, &reversed).unwrap().name, "Flash");
    }

    #[test]
    fn test_presets_at_highlights_shared_temperature() {
        let names: Vec<_> = presets_at(5500.0).map(|p| p.name).collect();
        assert_eq!(names, ["Daylight", "Flash"]);
        assert_eq!(presets_at(5600.0).count(), 0);
    }

    #[test]
    fn test_find_preset_ignores_case() {
        assert_eq!(find_preset("cloudy").unwrap().kelvin, 6500.0);
        assert_eq!(find_preset(" SHADE ").unwrap().kelvin, 7500.0);
        assert!(find_preset("candle").is_none());
    }
}
