//! Scene, slider, preset and scale rendering

use super::Painter;
use wblab_core::config::KelvinRange;
use wblab_core::presets::{Preset, WB_PRESETS};
use wblab_core::scale::{
    sample_gradient, slider_marks, Layout, LEGEND_GRADIENT, SLIDER_GRADIENT, TEMPERATURE_SCALE,
};
use wblab_core::scene::{TintedScene, SCENE_LAYOUT};

/// Width of slider and legend bars in cells.
pub const SLIDER_WIDTH: usize = 48;

/// Draw the tinted scene.
///
/// With color, two layout rows share one line through half blocks. Without
/// color the raw layout characters are printed.
pub fn render_scene(scene: &TintedScene, painter: &Painter) -> String {
    let mut out = String::new();

    if !painter.color_enabled() {
        for line in SCENE_LAYOUT {
            out.push_str(line);
            out.push('\n');
        }
        return out;
    }

    for pair in scene.rows().chunks(2) {
        let top = &pair[0];
        let bottom = pair.get(1).unwrap_or(top);
        for (t, b) in top.iter().zip(bottom) {
            out.push_str(&painter.half_block(*t, *b));
        }
        out.push_str(painter.reset());
        out.push('\n');
    }
    out
}

/// Cell index of `kelvin` on a bar `width` cells wide.
fn position(kelvin: f64, range: &KelvinRange, width: usize) -> usize {
    let span = (range.max - range.min).max(f64::EPSILON);
    let t = ((kelvin - range.min) / span).clamp(0.0, 1.0);
    (t * (width - 1) as f64).round() as usize
}

/// Place labels on a line, skipping any that would overlap the previous one.
fn label_line(labels: &[(usize, String)], width: usize) -> String {
    let mut line = vec![' '; width];
    let mut next_free = 0;

    for (pos, label) in labels {
        let len = label.chars().count();
        let start = pos.saturating_sub(len / 2).min(width.saturating_sub(len));
        if start < next_free {
            continue;
        }
        for (i, c) in label.chars().enumerate() {
            if let Some(slot) = line.get_mut(start + i) {
                *slot = c;
            }
        }
        next_free = start + len + 1;
    }

    line.into_iter().collect::<String>().trim_end().to_string()
}

/// Draw a slider with its gradient track, thumb and marks.
pub fn render_slider(kelvin: f64, range: &KelvinRange, layout: Layout, painter: &Painter) -> String {
    let width = SLIDER_WIDTH;
    let thumb = position(kelvin, range, width);

    let mut track = String::new();
    for i in 0..width {
        let color = sample_gradient(&SLIDER_GRADIENT, i as f64 / (width - 1) as f64);
        let cell = if i == thumb { "●" } else { "─" };
        track.push_str(&painter.on(color, cell));
    }

    let marks: Vec<(usize, String)> = slider_marks(layout)
        .iter()
        .map(|&m| (position(m as f64, range, width), m.to_string()))
        .collect();

    format!("{}\n{}\n", track, label_line(&marks, width))
}

/// One row of preset buttons; active presets are bracketed.
pub fn render_preset_row(active: &[&Preset], layout: Layout) -> String {
    let per_line = match layout {
        Layout::Compact => 3,
        Layout::Wide => 6,
    };

    WB_PRESETS
        .chunks(per_line)
        .map(|chunk| {
            chunk
                .iter()
                .map(|preset| {
                    let label = format!("{} {}", preset.icon, preset.name);
                    if active.iter().any(|a| a.name == preset.name) {
                        format!("[{}]", label)
                    } else {
                        format!(" {} ", label)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

/// Draw the color temperature legend.
pub fn render_scale(layout: Layout, painter: &Painter) -> String {
    let width = SLIDER_WIDTH;
    let mut out = String::new();

    for i in 0..width {
        let color = sample_gradient(&LEGEND_GRADIENT, i as f64 / (width - 1) as f64);
        out.push_str(&painter.on(color, if painter.color_enabled() { " " } else { "=" }));
    }
    out.push('\n');

    let stops: Vec<_> = match layout {
        Layout::Compact => vec![
            TEMPERATURE_SCALE[0],
            TEMPERATURE_SCALE[2],
            TEMPERATURE_SCALE[4],
        ],
        Layout::Wide => TEMPERATURE_SCALE.to_vec(),
    };

    // Stops are spread evenly like the legend, not placed proportionally
    let labels: Vec<(usize, String)> = stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            let pos = i * (width - 1) / (stops.len() - 1).max(1);
            (pos, format!("{}K", stop.kelvin))
        })
        .collect();
    out.push_str(&label_line(&labels, width));
    out.push('\n');

    for stop in &stops {
        out.push_str(&format!(
            "  {} {:>6}K  {}\n",
            painter.swatch(stop.swatch(), 2),
            stop.kelvin,
            stop.label
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wblab_core::presets::presets_at;

    #[test]
    fn test_position_ends() {
        let range = KelvinRange::default();
        assert_eq!(position(2000.0, &range, 48), 0);
        assert_eq!(position(10000.0, &range, 48), 47);
        assert_eq!(position(1000.0, &range, 48), 0);
        assert_eq!(position(6000.0, &range, 48), 24);
    }

    #[test]
    fn test_label_line_skips_overlaps() {
        let labels = vec![(0, "2500".to_string()), (2, "4000".to_string()), (20, "5500".to_string())];
        let line = label_line(&labels, 30);
        assert!(line.starts_with("2500"));
        assert!(!line.contains("4000"));
        assert!(line.contains("5500"));
    }

    #[test]
    fn test_plain_slider_shows_marks() {
        let painter = Painter::new(false);
        let out = render_slider(5500.0, &KelvinRange::default(), Layout::Compact, &painter);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().filter(|c| *c == '●').count(), 1);
        assert!(lines[1].contains("2500"));
        assert!(lines[1].contains("5500"));
        assert!(lines[1].contains("10000"));
    }

    #[test]
    fn test_preset_row_brackets_active() {
        let active: Vec<_> = presets_at(5500.0).collect();
        let row = render_preset_row(&active, Layout::Wide);
        assert_eq!(row.lines().count(), 1);
        assert!(row.contains("[☀️ Daylight]"));
        assert!(row.contains("[⚡ Flash]"));
        assert!(!row.contains("[💡 Tungsten]"));

        assert_eq!(render_preset_row(&[], Layout::Compact).lines().count(), 2);
    }

    #[test]
    fn test_plain_scene_is_layout() {
        let scene = TintedScene::render(5500.0, 5500.0);
        let out = render_scene(&scene, &Painter::new(false));
        assert_eq!(out.lines().count(), SCENE_LAYOUT.len());
    }

    #[test]
    fn test_color_scene_halves_rows() {
        let scene = TintedScene::render(3200.0, 6500.0);
        let out = render_scene(&scene, &Painter::new(true));
        assert_eq!(out.lines().count(), SCENE_LAYOUT.len() / 2);
    }

    #[test]
    fn test_scale_lists_stops() {
        let out = render_scale(Layout::Wide, &Painter::new(false));
        for label in ["Candle", "Tungsten", "Sunlight", "Overcast", "Blue sky"] {
            assert!(out.contains(label), "missing {}", label);
        }
        let compact = render_scale(Layout::Compact, &Painter::new(false));
        assert!(!compact.contains("Overcast"));
    }
}
