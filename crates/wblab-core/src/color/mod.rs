//! Color values and temperature conversion
//!
//! Provides the 8-bit `Rgb` type shared across the crate and the
//! Kelvin to RGB approximation used for light swatches and legends.

mod kelvin;
mod rgb;

#[cfg(test)]
mod tests;

pub use kelvin::kelvin_to_rgb;
pub use rgb::Rgb;
