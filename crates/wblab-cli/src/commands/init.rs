use std::path::PathBuf;
use wblab_core::config::{user_config_dir, WidgetConfig};

/// Write a starter config file with the built-in defaults.
///
/// Writes to `~/wblab/wblab.yml` unless `output` is given. Existing files
/// are left alone unless `force` is true.
pub fn cmd_init(output: Option<PathBuf>, force: bool) -> Result<(), String> {
    let path = match output {
        Some(path) => path,
        None => user_config_dir()
            .ok_or_else(|| "Could not determine home directory".to_string())?
            .join("wblab.yml"),
    };

    if path.exists() && !force {
        println!(
            "Skipped: {} (already exists, use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
    }

    let yaml = WidgetConfig::default().to_yaml_string()?;
    std::fs::write(&path, yaml).map_err(|e| format!("Failed to write config file: {}", e))?;

    println!("Config created: {}", path.display());
    println!("You can now edit this file to change the startup temperatures.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("wblab.yml");

        cmd_init(Some(path.clone()), false).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let config = WidgetConfig::from_yaml_str(&contents).unwrap();
        assert_eq!(config.defaults.scene_kelvin, 5500.0);
    }

    #[test]
    fn test_init_keeps_existing_file_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wblab.yml");
        std::fs::write(&path, "defaults:\n  scene_kelvin: 3200\n").unwrap();

        cmd_init(Some(path.clone()), false).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("3200"));

        cmd_init(Some(path.clone()), true).unwrap();
        assert!(!std::fs::read_to_string(&path).unwrap().contains("3200"));
    }
}
