//! Filter effect types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named adjustment with its parameter.
///
/// Percentages use 100 as identity, hue rotation is in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", content = "value", rename_all = "kebab-case")]
pub enum FilterEffect {
    /// Sepia tone, 0-100 %
    Sepia(f64),
    /// Hue rotation in degrees
    HueRotate(f64),
    /// Saturation, 100 % = unchanged
    Saturate(f64),
    /// Brightness, 100 % = unchanged
    Brightness(f64),
}

impl FilterEffect {
    /// CSS function name
    pub fn name(&self) -> &'static str {
        match self {
            FilterEffect::Sepia(_) => "sepia",
            FilterEffect::HueRotate(_) => "hue-rotate",
            FilterEffect::Saturate(_) => "saturate",
            FilterEffect::Brightness(_) => "brightness",
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            FilterEffect::Sepia(v)
            | FilterEffect::HueRotate(v)
            | FilterEffect::Saturate(v)
            | FilterEffect::Brightness(v) => v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            FilterEffect::HueRotate(_) => "deg",
            _ => "%",
        }
    }
}

impl fmt::Display for FilterEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}{})", self.name(), self.value(), self.unit())
    }
}

/// Composed filter for a white-balance mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterDescription {
    /// Settings are close enough to look neutral
    NoEffect,
    /// Effects in application order
    Effects(Vec<FilterEffect>),
}

impl FilterDescription {
    pub fn is_no_effect(&self) -> bool {
        matches!(self, FilterDescription::NoEffect)
    }

    /// Effects in application order (empty for `NoEffect`).
    pub fn effects(&self) -> &[FilterEffect] {
        match self {
            FilterDescription::NoEffect => &[],
            FilterDescription::Effects(effects) => effects,
        }
    }

    /// Sepia amount if the filter carries one.
    pub fn sepia(&self) -> Option<f64> {
        self.effects().iter().find_map(|e| match e {
            FilterEffect::Sepia(v) => Some(*v),
            _ => None,
        })
    }

    /// Hue rotation if the filter carries one.
    pub fn hue_rotation(&self) -> Option<f64> {
        self.effects().iter().find_map(|e| match e {
            FilterEffect::HueRotate(v) => Some(*v),
            _ => None,
        })
    }
}

/// Formats as a CSS `filter` property value.
impl fmt::Display for FilterDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterDescription::NoEffect => f.write_str("none"),
            FilterDescription::Effects(effects) => {
                for (i, effect) in effects.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", effect)?;
                }
                Ok(())
            }
        }
    }
}
