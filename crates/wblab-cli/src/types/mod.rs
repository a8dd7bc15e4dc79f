//! Type definitions for CLI.

mod temperature;

pub use temperature::Temperature;
