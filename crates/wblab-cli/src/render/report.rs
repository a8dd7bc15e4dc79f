//! Full explorer view

use super::{render_preset_row, render_scale, render_scene, render_slider, Painter};
use wblab_core::scale::Layout;
use wblab_core::verdict::ColorCast;
use wblab_core::widget::WhiteBalanceWidget;

/// Closing explainer shown under the legend.
const UNDERSTANDING: [&str; 3] = [
    "White balance corrects the color cast caused by different light sources, \
     so that white objects look white in the photo.",
    "Color temperature is measured in Kelvin (K): from warm orange light \
     (about 2000K) to cool blue light (about 10000K).",
    "Tip: shooting RAW lets you change white balance losslessly in \
     post-processing. In JPEG it is baked in at capture.",
];

/// Render the preview, both controls, the verdict, the legend and the
/// explainer.
pub fn render_report(widget: &mut WhiteBalanceWidget, layout: Layout, painter: &Painter) -> String {
    let range = widget.range();
    let scene_kelvin = widget.scene_kelvin();
    let wb_kelvin = widget.white_balance_kelvin();
    let light = widget.scene_light_color();
    let filter = widget.filter();
    let closest = widget.closest_preset();
    let cast = widget.cast();

    let mut out = String::new();

    out.push_str("Preview\n");
    out.push_str(&render_scene(&widget.tinted_scene(), painter));
    out.push_str(&format!(
        "Light: {}K {} {}\n",
        scene_kelvin,
        painter.swatch(light, 2),
        light
    ));
    out.push_str(&format!("Filter: {}\n\n", filter));

    out.push_str(&format!("Scene light (actual conditions): {}K\n", scene_kelvin));
    out.push_str(&render_preset_row(&widget.active_scene_presets(), layout));
    out.push_str(&render_slider(scene_kelvin, &range, layout, painter));
    out.push('\n');

    out.push_str(&format!(
        "White balance (camera setting): {}K  closest: {} {}\n",
        wb_kelvin, closest.icon, closest.name
    ));
    out.push_str(&render_slider(wb_kelvin, &range, layout, painter));
    out.push_str(&render_preset_row(
        &widget.active_white_balance_presets(),
        layout,
    ));
    out.push('\n');

    out.push_str("Result\n");
    out.push_str(&format!(
        "{} {}: {}\n\n",
        cast.icon(),
        cast.headline(),
        cast.explanation()
    ));

    out.push_str("Color temperature scale\n");
    out.push_str(&render_scale(layout, painter));
    out.push('\n');

    out.push_str("Understanding white balance\n");
    for paragraph in UNDERSTANDING {
        out.push_str(paragraph);
        out.push('\n');
    }

    if cast != ColorCast::Neutral && filter.is_no_effect() {
        log::debug!(
            "{}K vs {}K is inside the neutral band; preview is untinted",
            wb_kelvin,
            scene_kelvin
        );
    }

    out
}
