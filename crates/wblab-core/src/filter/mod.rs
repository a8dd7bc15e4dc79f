//! White-balance color cast filters
//!
//! Converts the mismatch between a camera white-balance setting and the
//! actual scene light into an ordered list of CSS-style filter effects.
//!
//! # Modules
//! - `compose`: Builds the effect list from the two temperatures
//! - `apply`: Evaluates an effect list against a single color

mod apply;
mod compose;
mod effect;


pub use compose::{
    white_balance_filter, MAX_EFFECT_DIFF_KELVIN, NEUTRAL_THRESHOLD_KELVIN,
};
pub use effect::{FilterDescription, FilterEffect};
