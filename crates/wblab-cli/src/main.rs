use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wblab_cli::commands::{
    cmd_filter, cmd_init, cmd_nearest, cmd_presets, cmd_rgb, cmd_scale, cmd_show, ShowOptions,
};
use wblab_cli::{parse_kelvin, parse_temperature, Temperature};
use wblab_core::config::{config_handle, log_config_usage};
use wblab_core::scale::Layout;

#[derive(Parser)]
#[command(name = "wblab")]
#[command(version, about = "Explore how camera white balance tints a scene", long_about = None)]
struct Cli {
    /// Config file (defaults to wblab.yml in the usual places)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable 24-bit terminal colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Print debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the scene, controls and explanation for one setting
    Show {
        /// Scene light in Kelvin or a preset name
        #[arg(short, long, value_name = "KELVIN|PRESET", value_parser = parse_temperature)]
        scene: Option<Temperature>,

        /// Camera white balance in Kelvin or a preset name
        #[arg(short, long, value_name = "KELVIN|PRESET", value_parser = parse_temperature)]
        wb: Option<Temperature>,

        /// Narrow layout (fewer marks, three presets per row)
        #[arg(long)]
        compact: bool,

        /// Print the computed values as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert color temperatures to approximate RGB
    Rgb {
        /// Temperatures in Kelvin
        #[arg(value_name = "KELVIN", required = true, value_parser = parse_kelvin)]
        kelvin: Vec<f64>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the CSS filter for a white balance under a scene light
    Filter {
        /// Camera white balance in Kelvin
        #[arg(short, long, value_name = "KELVIN", value_parser = parse_kelvin)]
        wb: f64,

        /// Scene light in Kelvin
        #[arg(short, long, value_name = "KELVIN", value_parser = parse_kelvin)]
        scene: f64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the preset closest to a temperature
    Nearest {
        /// Temperature in Kelvin
        #[arg(value_name = "KELVIN", value_parser = parse_kelvin)]
        kelvin: f64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List white balance presets
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the color temperature legend and slider marks
    Scale {
        /// Narrow layout
        #[arg(long)]
        compact: bool,
    },

    /// Write a default config file
    Init {
        /// Output file (defaults to ~/wblab/wblab.yml)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let handle = config_handle(cli.config.as_deref());
    log_config_usage(handle);
    let defaults = &handle.config.defaults;
    let color = defaults.color && !cli.no_color;
    let layout_for = |compact: bool| {
        if compact {
            Layout::Compact
        } else {
            defaults.layout
        }
    };

    let result = match cli.command {
        Commands::Show {
            scene,
            wb,
            compact,
            json,
        } => cmd_show(
            &handle.config,
            ShowOptions {
                scene,
                white_balance: wb,
                layout: layout_for(compact),
                color,
                json,
            },
        ),

        Commands::Rgb { kelvin, json } => cmd_rgb(kelvin, color, json),

        Commands::Filter { wb, scene, json } => cmd_filter(wb, scene, json),

        Commands::Nearest { kelvin, json } => cmd_nearest(kelvin, json),

        Commands::Presets { json } => cmd_presets(json),

        Commands::Scale { compact } => cmd_scale(&defaults.range, layout_for(compact), color),

        Commands::Init { output, force } => cmd_init(output, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
