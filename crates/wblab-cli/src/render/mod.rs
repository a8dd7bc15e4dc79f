//! Terminal rendering of the white balance explorer.
//!
//! Every function returns a `String` so the commands decide where output
//! goes. Colors use 24-bit ANSI escapes; with color disabled the same
//! layout falls back to plain characters and hex codes.

mod painter;
mod report;
mod widgets;

pub use painter::Painter;
pub use report::render_report;
pub use widgets::{
    render_preset_row, render_scale, render_scene, render_slider, SLIDER_WIDTH,
};
