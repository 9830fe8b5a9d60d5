use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Config, ConfigError};

const APP_DIR: &str = "tally";
const CONFIG_FILE: &str = "config.json";

/// Reads and writes [`Config`] as pretty JSON at a single path.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager rooted at `<base>/config.json`, creating `base` when missing.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    /// `<platform config dir>/tally/config.json`, falling back to the home
    /// directory and then the working directory.
    pub fn default_location() -> Self {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Stored preferences, or the defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&self.config_path)?;
        let config: Config =
            serde_json::from_str(&raw).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Writes to a sibling temp file first so a crash never leaves a torn config.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let staging = staging_path(&self.config_path);
        let mut file = File::create(&staging)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&staging, &self.config_path)?;
        debug!(path = %self.config_path.display(), "config saved");
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| CONFIG_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
