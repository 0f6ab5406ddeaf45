use crate::errors::{AppError, AppResult};
use crate::ui::labels::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Divisor for the day count, `H:MM:SS`.
    #[serde(default = "default_primary_norm")]
    pub daily_norm: String,
    /// The two norms the quick-toggle alternates between.
    #[serde(default = "default_primary_norm")]
    pub primary_norm: String,
    #[serde(default = "default_alternate_norm")]
    pub alternate_norm: String,
    #[serde(default)]
    pub language: Language,
}

fn default_primary_norm() -> String {
    "08:00:00".to_string()
}
fn default_alternate_norm() -> String {
    "07:35:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_norm: default_primary_norm(),
            primary_norm: default_primary_norm(),
            alternate_norm: default_alternate_norm(),
            language: Language::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("godzinator")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("godzinator.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        if !crate::core::calculator::vacation::is_valid_daily_norm(&cfg.daily_norm) {
            tracing::warn!(daily_norm = %cfg.daily_norm, "configured daily norm is not a usable clock");
        }
        Ok(cfg)
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Write a default configuration file, keeping an existing one untouched
    /// unless `force` is set. Returns whether a file was written.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }
}
