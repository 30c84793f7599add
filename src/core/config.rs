//! Decorator configuration.
//!
//! Read from `config.json` in the git-decorator config directory (see
//! [`crate::core::dirs::get_config_directory`]) or from an explicit path. Every field is
//! optional; a missing file means defaults.

use crate::core::decoration::Glyphs;
use crate::core::dirs::get_config_directory;
use crate::core::error::{DecoratorError, Result};
use crate::core::resource::DEFAULT_SCHEME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Scheme of the virtual resources this decorator answers for
    pub scheme: String,
    pub glyphs: Glyphs,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            glyphs: Glyphs::default(),
        }
    }
}

impl DecoratorConfig {
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join("config.json"))
    }

    /// Load from the default location, falling back to defaults when there is no file
    pub fn load() -> Result<Self> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                log::debug!("No config directory ({e}), using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| DecoratorError::config_read_failed(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| DecoratorError::config_parse_failed(path, e))?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DecoratorError::config_write_failed(path, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| DecoratorError::config_write_failed(path, e))?;

        Ok(())
    }
}
