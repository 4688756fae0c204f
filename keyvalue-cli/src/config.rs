// Config file handling

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use xmldsig_keyvalue::CodecConfig;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub codec: CodecConfig,
    pub output_format: Option<String>,
}

impl Config {
    /// Defaults, then the config file, then `KEYVALUE_*` variables.
    ///
    /// Nested keys use a double underscore: `KEYVALUE_CODEC__MAX_VALUE_LEN`.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&path))
            .merge(Env::prefixed("KEYVALUE_").split("__"))
            .extract()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// The config file alone, without environment overrides. Used for edits.
    pub fn load_file() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        // Uses platform-specific config directories:
        //   macOS:   ~/Library/Application Support/org.xmldsig.keyvalue/
        //   Linux:   ~/.config/keyvalue/
        //   Windows: C:\Users\<user>\AppData\Roaming\xmldsig\keyvalue\
        let dirs = ProjectDirs::from("org", "xmldsig", "keyvalue")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}
