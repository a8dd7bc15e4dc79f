//! White-balance widget state
//!
//! Owns the two interactive inputs and caches every derived value against
//! the inputs it depends on, so repeated reads between changes are free.

use crate::color::{kelvin_to_rgb, Rgb};
use crate::config::{KelvinRange, WidgetDefaults};
use crate::filter::{white_balance_filter, FilterDescription};
use crate::presets::{nearest_preset, presets_at, Preset};
use crate::scene::TintedScene;
use crate::verdict::ColorCast;
use serde::Serialize;

/// Single-entry cache keyed on the inputs of one computation.
#[derive(Debug, Clone)]
struct Memo<K, V> {
    entry: Option<(K, V)>,
    computations: usize,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq + Copy, V: Clone> Memo<K, V> {
    fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some((cached_key, value)) = &self.entry {
            if *cached_key == key {
                return value.clone();
            }
        }
        let value = compute();
        self.computations += 1;
        self.entry = Some((key, value.clone()));
        value
    }
}

/// Float keys compare by bit pattern so a cached entry is reused only for
/// identical inputs.
fn key(kelvin: f64) -> u64 {
    kelvin.to_bits()
}

/// Everything the presentation layer shows for one pair of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSnapshot {
    pub scene_kelvin: f64,
    pub white_balance_kelvin: f64,
    pub light_color: Rgb,
    pub light_css: String,
    pub filter: FilterDescription,
    pub filter_css: String,
    pub closest_preset: Preset,
    pub cast: ColorCast,
    pub headline: &'static str,
    pub explanation: &'static str,
}

/// Interactive state: scene light and camera white balance.
#[derive(Debug, Clone)]
pub struct WhiteBalanceWidget {
    range: KelvinRange,
    scene_kelvin: f64,
    white_balance_kelvin: f64,
    light_color: Memo<u64, Rgb>,
    filter: Memo<(u64, u64), FilterDescription>,
    closest: Memo<u64, &'static Preset>,
}

impl Default for WhiteBalanceWidget {
    fn default() -> Self {
        Self::new(&WidgetDefaults::default())
    }
}

impl WhiteBalanceWidget {
    pub fn new(defaults: &WidgetDefaults) -> Self {
        Self {
            range: defaults.range,
            scene_kelvin: defaults.scene_kelvin,
            white_balance_kelvin: defaults.white_balance_kelvin,
            light_color: Memo::default(),
            filter: Memo::default(),
            closest: Memo::default(),
        }
    }

    pub fn range(&self) -> KelvinRange {
        self.range
    }

    pub fn scene_kelvin(&self) -> f64 {
        self.scene_kelvin
    }

    pub fn white_balance_kelvin(&self) -> f64 {
        self.white_balance_kelvin
    }

    /// Move the scene light slider. Returns the value actually stored.
    pub fn set_scene_light(&mut self, kelvin: f64) -> f64 {
        self.scene_kelvin = self.snap("scene light", kelvin);
        self.scene_kelvin
    }

    /// Move the white balance slider. Returns the value actually stored.
    pub fn set_white_balance(&mut self, kelvin: f64) -> f64 {
        self.white_balance_kelvin = self.snap("white balance", kelvin);
        self.white_balance_kelvin
    }

    /// Light the scene with a preset's temperature (not snapped to the step).
    pub fn select_scene_preset(&mut self, preset: &Preset) {
        self.scene_kelvin = preset.kelvin;
    }

    /// Set the camera to a preset's temperature (not snapped to the step).
    pub fn select_white_balance_preset(&mut self, preset: &Preset) {
        self.white_balance_kelvin = preset.kelvin;
    }

    fn snap(&self, what: &str, kelvin: f64) -> f64 {
        let snapped = self.range.snap(kelvin);
        if snapped != kelvin {
            log::debug!("{} {}K adjusted to {}K", what, kelvin, snapped);
        }
        snapped
    }

    /// Color of the scene light (sun swatch and glow).
    pub fn scene_light_color(&mut self) -> Rgb {
        let scene = self.scene_kelvin;
        self.light_color
            .get_or_compute(key(scene), || kelvin_to_rgb(scene))
    }

    /// Color cast filter for the current pair of inputs.
    pub fn filter(&mut self) -> FilterDescription {
        let (wb, scene) = (self.white_balance_kelvin, self.scene_kelvin);
        self.filter
            .get_or_compute((key(wb), key(scene)), || white_balance_filter(wb, scene))
    }

    /// Preset closest to the white balance setting.
    pub fn closest_preset(&mut self) -> &'static Preset {
        let wb = self.white_balance_kelvin;
        self.closest.get_or_compute(key(wb), || nearest_preset(wb))
    }

    pub fn cast(&self) -> ColorCast {
        ColorCast::classify(self.white_balance_kelvin, self.scene_kelvin)
    }

    /// Scene light presets to highlight.
    pub fn active_scene_presets(&self) -> Vec<&'static Preset> {
        presets_at(self.scene_kelvin).collect()
    }

    /// White balance presets to highlight.
    pub fn active_white_balance_presets(&self) -> Vec<&'static Preset> {
        presets_at(self.white_balance_kelvin).collect()
    }

    /// The illustrated scene as the camera would record it.
    pub fn tinted_scene(&mut self) -> TintedScene {
        TintedScene::from_parts(self.scene_light_color(), self.filter())
    }

    pub fn snapshot(&mut self) -> WidgetSnapshot {
        let light_color = self.scene_light_color();
        let filter = self.filter();
        let closest_preset = *self.closest_preset();
        let cast = self.cast();

        WidgetSnapshot {
            scene_kelvin: self.scene_kelvin,
            white_balance_kelvin: self.white_balance_kelvin,
            light_color,
            light_css: light_color.to_string(),
            filter_css: filter.to_string(),
            filter,
            closest_preset,
            cast,
            headline: cast.headline(),
            explanation: cast.explanation(),
        }
    }
}
