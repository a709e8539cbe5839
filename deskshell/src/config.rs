//! Deskshell general configuration.
use anyhow::{Context, Result};
use deskshell_core::{AppKind, Config, DeviceClass, Size, Viewport};
use ron::extensions::Extensions;
use ron::ser::PrettyConfig;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::prelude::Write;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// The shell configuration as read from `config.ron`. Every field has a
/// default, so a partial (or missing) file is fine.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ShellConfig {
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Status bar height; no window's top edge goes above this.
    pub reserved_top: i32,
    pub device_class: DeviceClass,
    pub min_window_width: i32,
    pub min_window_height: i32,
    /// Per-app default size overrides, keyed by dock id. Apps not listed
    /// here fall back to the built-in per-device table.
    pub app_sizes: HashMap<String, Size>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1920,
            viewport_height: 1080,
            reserved_top: 40,
            device_class: DeviceClass::Desktop,
            min_window_width: 400,
            min_window_height: 300,
            app_sizes: HashMap::new(),
        }
    }
}

impl Config for ShellConfig {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height, self.reserved_top)
    }

    fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    fn min_window_size(&self) -> Size {
        Size::new(self.min_window_width, self.min_window_height)
    }

    fn app_size(&self, app: &AppKind) -> Size {
        match self.app_sizes.get(app.id()) {
            Some(size) => *size,
            None => app.default_size(self.device_class),
        }
    }
}

/// Path of the config file inside the XDG config directory, created on
/// demand.
///
/// # Errors
///
/// Errors if the XDG directories are unusable.
pub fn default_config_path() -> Result<PathBuf> {
    let base = BaseDirectories::with_prefix("deskshell")?;
    base.place_config_file("config.ron")
        .context("ERROR: couldn't create the config directory")
}

/// Load the config from the default location, writing a commented default
/// file on first run.
///
/// # Errors
///
/// Errors if the file exists but cannot be read or parsed.
pub fn load() -> Result<ShellConfig> {
    let path = default_config_path()?;
    if Path::new(&path).exists() {
        load_from_file(&path)
    } else {
        let config = ShellConfig::default();
        write_to_file(&path, &config)?;
        Ok(config)
    }
}

/// Load the config from an explicit file.
///
/// # Errors
///
/// Errors if the file cannot be read or parsed as RON.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ShellConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("ERROR: couldn't read {}", path.display()))?;
    let options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    options
        .from_str(&contents)
        .with_context(|| format!("ERROR: couldn't parse {}", path.display()))
}

/// Write a config out as pretty RON.
///
/// # Errors
///
/// Errors if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, config: &ShellConfig) -> Result<()> {
    let ron_pretty = PrettyConfig::new().depth_limit(2);
    let text = ron::ser::to_string_pretty(config, ron_pretty)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_should_round_trip_through_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");

        let mut app_sizes = HashMap::new();
        app_sizes.insert("notes".to_string(), Size::new(640, 480));
        let config = ShellConfig {
            reserved_top: 64,
            app_sizes,
            ..Default::default()
        };
        write_to_file(&path, &config).unwrap();

        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded.reserved_top, 64);
        assert_eq!(loaded.app_size(&AppKind::Notes), Size::new(640, 480));
        // Apps without an override keep the built-in table.
        assert_eq!(loaded.app_size(&AppKind::Games), Size::new(900, 700));
    }

    #[test]
    fn a_partial_config_file_should_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(reserved_top: 32)").unwrap();

        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded.reserved_top, 32);
        assert_eq!(loaded.viewport_width, 1920);
        assert_eq!(loaded.min_window_size(), Size::new(400, 300));
    }

    #[test]
    fn a_bad_config_file_should_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(reserved_top: \"very\")").unwrap();
        assert!(load_from_file(&path).is_err());
    }
}
