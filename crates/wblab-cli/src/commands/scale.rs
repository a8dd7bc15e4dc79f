use crate::render::{render_scale, render_slider, Painter};
use wblab_core::config::KelvinRange;
use wblab_core::scale::Layout;

/// Print the color temperature legend and the slider marks.
pub fn cmd_scale(range: &KelvinRange, layout: Layout, color: bool) -> Result<(), String> {
    let painter = Painter::new(color);

    println!("Color temperature scale");
    print!("{}", render_scale(layout, &painter));
    println!();
    println!("Slider ({}K - {}K, step {}K)", range.min, range.max, range.step);
    print!("{}", render_slider(range.min, range, layout, &painter));
    Ok(())
}
