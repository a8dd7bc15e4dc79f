//! Widget configuration management.
//!
//! Loads `wblab.yml` from the usual locations and keeps the result for the
//! rest of the process. Loading never fails: unreadable or malformed files
//! turn into warnings and the built-in defaults are used instead.

mod defaults;


pub use defaults::{KelvinRange, WidgetDefaults};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Once, OnceLock};

use serde::{Deserialize, Serialize};

/// Environment variable pointing at a config file.
pub const CONFIG_ENV_VAR: &str = "WBLAB_CONFIG";

/// Candidate config file names searched for on disk.
const CONFIG_FILENAMES: &[&str] = &["wblab.yml", "wblab.yaml"];

/// Loaded configuration together with its source path and warnings.
pub struct ConfigHandle {
    pub config: WidgetConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ConfigHandle {
    fn with_config(config: WidgetConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WidgetConfig {
    pub defaults: WidgetDefaults,
}

impl WidgetConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }

    /// Parse a YAML document and sanitize the values.
    pub fn from_yaml_str(contents: &str) -> Result<Self, String> {
        serde_yaml::from_str::<WidgetConfig>(contents)
            .map(WidgetConfig::sanitize)
            .map_err(|e| format!("Failed to parse config YAML: {}", e))
    }

    /// Serialize to YAML (used to write a starter config file).
    pub fn to_yaml_string(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}

/// Load configuration from disk, optionally trying a specific path first.
///
/// A `custom_path` that does not point at a file is reported in the
/// handle's warnings ahead of any others.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let mut handle = load_config_from(get_config_candidates(custom_path));
    if let Some(path) = custom_path {
        if !path.is_file() {
            handle
                .warnings
                .insert(0, format!("Config file {} not found", path.display()));
        }
    }
    handle
}

/// Try each candidate in order and keep the first file that parses.
///
/// Only unreadable or malformed files produce warnings; finding no file at
/// all is the normal case and leaves `warnings` empty.
pub fn load_config_from(candidates: Vec<PathBuf>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match WidgetConfig::from_yaml_str(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    log::debug!("loaded config from {}", source.display());
                    return ConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!("{} ({})", err, candidate.display())),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    log::debug!("no config found; using built-in defaults");
    ConfigHandle::with_config(WidgetConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
pub fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(dir) = user_config_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(dir.join(name));
        }
    }

    candidates
}

/// Per-user config directory (`~/wblab`).
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("wblab"))
}

static CONFIG_HANDLE: OnceLock<ConfigHandle> = OnceLock::new();
static LOG_CONFIG_ONCE: Once = Once::new();

/// Access the global configuration, loading it on first use.
///
/// The first caller's `custom_path` wins; later calls get the cached handle.
pub fn config_handle(custom_path: Option<&Path>) -> &'static ConfigHandle {
    CONFIG_HANDLE.get_or_init(|| load_config(custom_path))
}

/// Log the config source and warnings the first time it is requested.
pub fn log_config_usage(handle: &ConfigHandle) {
    LOG_CONFIG_ONCE.call_once(|| {
        match &handle.source {
            Some(source) => log::info!("loaded config from {}", source.display()),
            None => log::info!("using built-in defaults"),
        }

        for warning in &handle.warnings {
            log::warn!("config: {}", warning);
        }
    });
}
