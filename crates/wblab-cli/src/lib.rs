//! Shared pieces of the wblab CLI
//!
//! Argument types, parsers, terminal rendering and the command
//! implementations used by the `wblab` binary.

pub mod commands;
pub mod parsers;
pub mod render;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{parse_kelvin, parse_temperature};
pub use render::Painter;
pub use types::Temperature;
