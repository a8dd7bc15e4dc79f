//! Command implementations for the wblab CLI.

mod convert;
mod filter;
mod init;
mod preset;
mod scale;
mod show;

// Re-export all command functions
pub use convert::cmd_rgb;
pub use filter::cmd_filter;
pub use init::cmd_init;
pub use preset::{cmd_nearest, cmd_presets};
pub use scale::cmd_scale;
pub use show::{build_widget, cmd_show, ShowOptions};
