//! Default widget values and their validation/sanitization.

use crate::scale::Layout;
use serde::{Deserialize, Serialize};

/// Interactive temperature domain of the sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KelvinRange {
    /// Lowest selectable temperature
    pub min: f64,
    /// Highest selectable temperature
    pub max: f64,
    /// Slider increment
    pub step: f64,
}

impl Default for KelvinRange {
    fn default() -> Self {
        Self {
            min: 2000.0,
            max: 10000.0,
            step: 100.0,
        }
    }
}

impl KelvinRange {
    /// Clamp into the range and round to the nearest step from `min`.
    pub fn snap(&self, kelvin: f64) -> f64 {
        let clamped = self.clamp(kelvin);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Clamp into the range without snapping to a step.
    pub fn clamp(&self, kelvin: f64) -> f64 {
        kelvin.clamp(self.min, self.max)
    }

    pub fn contains(&self, kelvin: f64) -> bool {
        (self.min..=self.max).contains(&kelvin)
    }

    pub(crate) fn sanitize(&mut self) {
        let defaults = Self::default();
        if !self.min.is_finite() || self.min <= 0.0 {
            self.min = defaults.min;
        }
        if !self.max.is_finite() || self.max <= 0.0 {
            self.max = defaults.max;
        }
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
        }
        if !self.step.is_finite() || self.step < 0.0 {
            self.step = defaults.step;
        }
    }
}

/// Initial widget state and presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetDefaults {
    /// Scene light temperature on startup
    pub scene_kelvin: f64,
    /// Camera white balance on startup
    pub white_balance_kelvin: f64,
    /// Slider domain shared by both inputs
    pub range: KelvinRange,
    /// Output width class
    pub layout: Layout,
    /// Use 24-bit ANSI color in terminal output
    pub color: bool,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            scene_kelvin: 5500.0,
            white_balance_kelvin: 5500.0,
            range: KelvinRange::default(),
            layout: Layout::Wide,
            color: true,
        }
    }
}

impl WidgetDefaults {
    pub(crate) fn sanitize(&mut self) {
        self.range.sanitize();
        let fallback = Self::default();
        if !self.scene_kelvin.is_finite() {
            self.scene_kelvin = fallback.scene_kelvin;
        }
        if !self.white_balance_kelvin.is_finite() {
            self.white_balance_kelvin = fallback.white_balance_kelvin;
        }
        self.scene_kelvin = self.range.clamp(self.scene_kelvin);
        self.white_balance_kelvin = self.range.clamp(self.white_balance_kelvin);
    }
}
