use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{Endpoints, DEFAULT_FACT_URL, DEFAULT_GENDERIZE_URL, DEFAULT_MESSAGES_URL};

/// How the gender lookup result is phrased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenderFormat {
    /// "The gender of alice is female with 96% certainty."
    #[default]
    Sentence,
    /// "Result : alice is 96% female"
    Compact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_fact_url")]
    pub fact_url: String,
    #[serde(default = "default_genderize_url")]
    pub genderize_url: String,
    #[serde(default = "default_messages_url")]
    pub messages_url: String,
    #[serde(default)]
    pub gender_format: GenderFormat,
    #[serde(default = "default_true")]
    pub clear_input_on_success: bool,
    #[serde(default = "default_true")]
    pub load_messages_on_start: bool,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fact_url: default_fact_url(),
            genderize_url: default_genderize_url(),
            messages_url: default_messages_url(),
            gender_format: GenderFormat::default(),
            clear_input_on_success: true,
            load_messages_on_start: true,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            fact_url: self.fact_url.clone(),
            genderize_url: self.genderize_url.clone(),
            messages_url: self.messages_url.clone(),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

fn default_fact_url() -> String {
    DEFAULT_FACT_URL.to_string()
}

fn default_genderize_url() -> String {
    DEFAULT_GENDERIZE_URL.to_string()
}

fn default_messages_url() -> String {
    DEFAULT_MESSAGES_URL.to_string()
}

fn default_true() -> bool {
    true
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no file exists anywhere; the built-in defaults
/// cover every endpoint, so a config file is optional.
pub fn find_config_path(cli_path: Option<&str>) -> anyhow::Result<Option<PathBuf>> {
    // An explicit path must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/fetchdeck/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("fetchdeck").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
