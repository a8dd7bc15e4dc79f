//! Temperature argument for CLI interface.

use std::fmt;
use wblab_core::presets::Preset;
use wblab_core::widget::WhiteBalanceWidget;

/// A temperature given on the command line.
///
/// Naming a preset behaves like clicking its button (exact value), while a
/// number behaves like dragging the slider (clamped and snapped to the step).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Temperature {
    /// Explicit value in Kelvin
    Kelvin(f64),
    /// One of the built-in presets
    Preset(&'static Preset),
}

impl Temperature {
    /// Raw value in Kelvin, before any snapping.
    pub fn kelvin(&self) -> f64 {
        match self {
            Temperature::Kelvin(k) => *k,
            Temperature::Preset(p) => p.kelvin,
        }
    }

    /// Apply as the scene light of `widget`.
    pub fn apply_to_scene(&self, widget: &mut WhiteBalanceWidget) {
        match self {
            Temperature::Kelvin(k) => {
                widget.set_scene_light(*k);
            }
            Temperature::Preset(p) => widget.select_scene_preset(p),
        }
    }

    /// Apply as the camera white balance of `widget`.
    pub fn apply_to_white_balance(&self, widget: &mut WhiteBalanceWidget) {
        match self {
            Temperature::Kelvin(k) => {
                widget.set_white_balance(*k);
            }
            Temperature::Preset(p) => widget.select_white_balance_preset(p),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Kelvin(k) => write!(f, "{}K", k),
            Temperature::Preset(p) => write!(f, "{} ({}K)", p.name, p.kelvin),
        }
    }
}
