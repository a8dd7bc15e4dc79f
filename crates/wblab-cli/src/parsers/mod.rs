//! Parsing functions for CLI arguments.

mod temperature;

pub use temperature::{parse_kelvin, parse_temperature};
