use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// One class slot counts as this many attendance hours. KL University
    /// tracks attendance per hour with 2-hour slots, hence the default.
    #[serde(default = "default_hours_per_class")]
    pub hours_per_class: i64,
    /// web3forms access key for the feedback form. Empty disables submission.
    #[serde(default)]
    pub feedback_access_key: String,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_hours_per_class() -> i64 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            hours_per_class: default_hours_per_class(),
            feedback_access_key: String::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("attendr")
            .join("config.toml")
    }

    /// Clamp nonsense values from a hand-edited config file.
    pub fn normalize(&mut self) {
        if self.hours_per_class < 1 {
            self.hours_per_class = default_hours_per_class();
        }
    }
}
