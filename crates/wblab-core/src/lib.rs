//! wblab Core Library
//!
//! Color temperature conversion, white-balance color cast filters and the
//! preset catalog behind the white balance explorer.

pub mod color;
pub mod config;
pub mod filter;
pub mod presets;
pub mod scale;
pub mod scene;
pub mod verdict;
pub mod widget;

// Re-export commonly used types
pub use color::{kelvin_to_rgb, Rgb};
pub use filter::{white_balance_filter, FilterDescription, FilterEffect};
pub use presets::{nearest_preset, Preset, WB_PRESETS};
pub use verdict::ColorCast;
pub use widget::{WhiteBalanceWidget, WidgetSnapshot};
