use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::registry::{AnyHasher, SUPPORTED_IDS};
use crate::errors::ConfigError;

fn default_hash() -> String {
    "blake3".to_owned()
}

/// Hashing session configuration, usually read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_hash")]
    pub hash: String, // e.g., "blake3"
    #[serde(default)]
    pub label: Option<String>, // domain separator fed before any value
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash: default_hash(),
            label: None,
        }
    }
}

impl Config {
    pub fn new<S: Into<String>>(hash: S, label: Option<String>) -> Self {
        Self {
            hash: hash.into(),
            label,
        }
    }

    /// Parse only; call [`validate`](Config::validate) once overrides are applied.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("loading config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if AnyHasher::by_id(&self.hash).is_none() {
            log::debug!(
                "unsupported hash '{}'; expected one of {:?}",
                self.hash,
                SUPPORTED_IDS
            );
            return Err(ConfigError::UnknownHash(self.hash.clone()));
        }
        Ok(())
    }

    /// Fresh hasher for this configuration, with the label already absorbed.
    pub fn hasher(&self) -> Result<AnyHasher, ConfigError> {
        let mut hasher = AnyHasher::by_id(&self.hash)
            .ok_or_else(|| ConfigError::UnknownHash(self.hash.clone()))?;
        if let Some(label) = &self.label {
            hasher.update(label.as_bytes());
        }
        Ok(hasher)
    }
}
