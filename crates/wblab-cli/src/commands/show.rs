use crate::render::{render_report, Painter};
use crate::types::Temperature;
use wblab_core::config::WidgetConfig;
use wblab_core::scale::Layout;
use wblab_core::widget::WhiteBalanceWidget;

/// Options for the `show` command.
#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub scene: Option<Temperature>,
    pub white_balance: Option<Temperature>,
    pub layout: Layout,
    pub color: bool,
    pub json: bool,
}

/// Build the widget state for the given inputs (config defaults otherwise).
pub fn build_widget(config: &WidgetConfig, options: &ShowOptions) -> WhiteBalanceWidget {
    let mut widget = WhiteBalanceWidget::new(&config.defaults);

    if let Some(scene) = &options.scene {
        scene.apply_to_scene(&mut widget);
        if scene.kelvin() != widget.scene_kelvin() {
            log::warn!(
                "scene light {} adjusted to {}K",
                scene,
                widget.scene_kelvin()
            );
        }
    }

    if let Some(wb) = &options.white_balance {
        wb.apply_to_white_balance(&mut widget);
        if wb.kelvin() != widget.white_balance_kelvin() {
            log::warn!(
                "white balance {} adjusted to {}K",
                wb,
                widget.white_balance_kelvin()
            );
        }
    }

    widget
}

/// Render the full explorer for one pair of inputs.
pub fn cmd_show(config: &WidgetConfig, options: ShowOptions) -> Result<(), String> {
    let mut widget = build_widget(config, &options);

    if options.json {
        let json = serde_json::to_string_pretty(&widget.snapshot())
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    let painter = Painter::new(options.color);
    print!("{}", render_report(&mut widget, options.layout, &painter));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wblab_core::presets::find_preset;

    fn options(scene: Option<Temperature>, wb: Option<Temperature>) -> ShowOptions {
        ShowOptions {
            scene,
            white_balance: wb,
            layout: Layout::Wide,
            color: false,
            json: false,
        }
    }

    #[test]
    fn test_defaults_from_config() {
        let config = WidgetConfig::from_yaml_str("defaults:\n  scene_kelvin: 3200\n").unwrap();
        let widget = build_widget(&config, &options(None, None));
        assert_eq!(widget.scene_kelvin(), 3200.0);
        assert_eq!(widget.white_balance_kelvin(), 5500.0);
    }

    #[test]
    fn test_numbers_snap_presets_do_not() {
        let config = WidgetConfig::default();
        let tungsten = find_preset("tungsten").unwrap();
        let widget = build_widget(
            &config,
            &options(
                Some(Temperature::Kelvin(1234.0)),
                Some(Temperature::Preset(tungsten)),
            ),
        );
        assert_eq!(widget.scene_kelvin(), 2000.0);
        assert_eq!(widget.white_balance_kelvin(), 2850.0);
    }
}
