//! Subcommand handlers for list-cameras, keymap and config actions.

use std::path::Path;

use super::args::{ConfigAction, KeymapAction};
use crate::camera;
use crate::config::{self, Config};
use crate::error::AppError;
use crate::keys::KeyMap;

/// List available cameras and print them to stdout.
pub fn list_cameras() -> Result<(), AppError> {
    let devices = camera::list_devices()?;
    if devices.is_empty() {
        println!("No cameras found.");
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
    } else {
        println!("Available cameras:");
        for device in devices {
            println!("  {}", device);
        }
        println!();
        println!("Use --camera <index> to select a camera.");
    }
    Ok(())
}

/// Default table with overrides from `path` applied.
///
/// A missing file means no overrides. An unreadable file falls back to the
/// default table. Skipped lines are logged.
pub fn load_keymap(path: &Path) -> KeyMap {
    if !path.exists() {
        log::debug!("no key map at {}, using defaults", path.display());
        return KeyMap::default();
    }

    match KeyMap::load(path) {
        Ok((map, issues)) => {
            for issue in &issues {
                log::warn!("{}: {}", path.display(), issue);
            }
            log::info!("loaded key map from {}", path.display());
            map
        }
        Err(e) => {
            log::warn!("{}; using default key map", e);
            KeyMap::default()
        }
    }
}

/// Handle keymap subcommand actions.
pub fn handle_keymap_action(action: KeymapAction, config: &Config) {
    match action {
        KeymapAction::Show => {
            let path = config.keymap_path();
            let map = load_keymap(&path);
            println!("Region keys:");
            for line in map.describe().lines() {
                println!("  {}", line);
            }
            println!();
            if path.exists() {
                println!("Key map file: {} (exists)", path.display());
            } else {
                println!("Key map file: {} (not found, using defaults)", path.display());
            }
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    path: Option<&Path>,
) -> Result<(), AppError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!();
            print!("{}", config.to_toml()?);
            println!();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Write a default settings file to `path`. Refuses to overwrite.
pub fn init_config(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        return Err(AppError::ConfigExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| AppError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let body = format!("# motion-keys configuration\n\n{}", Config::default().to_toml()?);
    std::fs::write(path, body).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{Key, Slot};
    use crate::motion::Region;
    use tempfile::TempDir;

    #[test]
    fn test_init_config_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_config(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[motion]\nthreshold = 7\n").unwrap();

        let err = init_config(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigExists(_)));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[motion]\nthreshold = 7\n"
        );
    }

    #[test]
    fn test_load_keymap_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let map = load_keymap(&dir.path().join("absent.cfg"));
        assert_eq!(map, KeyMap::default());
    }

    #[test]
    fn test_load_keymap_applies_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keymap.cfg");
        std::fs::write(&path, "# arrows\n1 up\n7 down\nbogus line\n").unwrap();

        let map = load_keymap(&path);
        let up = Key::parse("up").unwrap();
        assert_eq!(map.slot(Region::new(1).unwrap()), Slot::Key(up));
        assert_eq!(
            map.slot(Region::new(0).unwrap()),
            Slot::Key(Key::parse("a").unwrap())
        );
    }
}
