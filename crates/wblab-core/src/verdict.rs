//! Color cast classification and explanation copy.

use serde::Serialize;

/// Direction of the color cast a white-balance setting produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCast {
    /// Setting matches the light; whites stay white
    Neutral,
    /// Setting above the light; orange/yellow cast
    Warmer,
    /// Setting below the light; blue cast
    Cooler,
}

impl ColorCast {
    /// Classify a setting against the scene light.
    ///
    /// Only an exact match counts as neutral here. The rendered filter uses
    /// a wider neutral band, so a setting 100K off reads as "warmer" while
    /// the preview still shows no tint.
    pub fn classify(wb_kelvin: f64, scene_kelvin: f64) -> Self {
        if wb_kelvin == scene_kelvin {
            ColorCast::Neutral
        } else if wb_kelvin > scene_kelvin {
            ColorCast::Warmer
        } else {
            ColorCast::Cooler
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ColorCast::Neutral => "✅",
            ColorCast::Warmer => "🔶",
            ColorCast::Cooler => "🔷",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ColorCast::Neutral => "Neutral colors",
            ColorCast::Warmer => "Warmer image",
            ColorCast::Cooler => "Cooler image",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            ColorCast::Neutral => {
                "The white balance matches the scene light. Whites look white."
            }
            ColorCast::Warmer => {
                "The white balance is set higher than the actual light. The camera \
                 adds orange/yellow because it \"thinks\" it is compensating for a \
                 colder light."
            }
            ColorCast::Cooler => {
                "The white balance is set lower than the actual light. The camera \
                 adds blue because it \"thinks\" it is compensating for a warmer light."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ColorCast::classify(5500.0, 5500.0), ColorCast::Neutral);
        assert_eq!(ColorCast::classify(6500.0, 5500.0), ColorCast::Warmer);
        assert_eq!(ColorCast::classify(2850.0, 5500.0), ColorCast::Cooler);
    }

    #[test]
    fn test_small_offset_is_not_neutral() {
        // Below the filter's neutral band but still reported as a cast
        assert_eq!(ColorCast::classify(5600.0, 5500.0), ColorCast::Warmer);
        assert_eq!(ColorCast::classify(5400.0, 5500.0), ColorCast::Cooler);
    }

    #[test]
    fn test_copy_mentions_cast_color() {
        assert!(ColorCast::Warmer.explanation().contains("orange"));
        assert!(ColorCast::Cooler.explanation().contains("blue"));
        assert_eq!(ColorCast::Neutral.headline(), "Neutral colors");
    }
}
