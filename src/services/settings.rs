use crate::cli::GeneratorKind;
use crate::domain::catalog::ModeCatalog;
use crate::domain::errors::ConfigError;
use crate::domain::models::ModeEntry;
use crate::services::paths::settings_path;
use serde::Deserialize;
use std::path::Path;

fn default_raster_generators() -> Vec<GeneratorKind> {
    vec![GeneratorKind::Png, GeneratorKind::Splashscreen]
}

fn default_root_markers() -> Vec<String> {
    [
        "quasar.config.js",
        "quasar.config.ts",
        "quasar.conf.js",
        "package.json",
    ]
    .iter()
    .map(|m| m.to_string())
    .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Generator kinds whose files get a pixel-size check.
    #[serde(default = "default_raster_generators")]
    pub raster_generators: Vec<GeneratorKind>,
    #[serde(default = "default_root_markers")]
    pub root_markers: Vec<String>,
    /// Extra modes; a same-named entry replaces the built-in one.
    #[serde(default)]
    pub modes: Vec<ModeEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            raster_generators: default_raster_generators(),
            root_markers: default_root_markers(),
            modes: Vec::new(),
        }
    }
}

impl Settings {
    pub fn catalog(&self) -> ModeCatalog {
        let mut catalog = ModeCatalog::builtin();
        for m in &self.modes {
            catalog.insert(m.clone());
        }
        catalog
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let Ok(path) = settings_path() else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    Ok(read_settings(&path)?)
}

pub fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Settings {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    toml::from_str(&raw).map_err(|e| ConfigError::Settings {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
