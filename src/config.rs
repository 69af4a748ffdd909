//! UI configuration supplied by the hosting application.
//!
//! Loaded once from JSON (all fields optional) and validated before mount,
//! so components can rely on a usable explorer URL.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::util::address::{DEFAULT_PREFIX_LEN, DEFAULT_SUFFIX_LEN};
use crate::util::explorer::{Explorer, LinkError, SEPOLIA_EXPLORER_URL};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ui config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Explorer(#[from] LinkError),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Block explorer base URL; account and transaction pages hang off it.
    pub explorer_base_url: String,
    /// Name shown in "Check out your transaction on ..." links.
    pub explorer_name: String,
    pub address_prefix_len: usize,
    pub address_suffix_len: usize,
    /// Page title and logo alt text.
    pub brand_name: String,
    /// Logo image shown on the left of the navbar; text brand when absent.
    pub logo_src: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            explorer_base_url: SEPOLIA_EXPLORER_URL.to_owned(),
            explorer_name: "Etherscan".to_owned(),
            address_prefix_len: DEFAULT_PREFIX_LEN,
            address_suffix_len: DEFAULT_SUFFIX_LEN,
            brand_name: "Wallet Demo".to_owned(),
            logo_src: None,
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON or an unusable explorer URL.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.explorer()?;
        Ok(config)
    }

    /// Build the explorer link builder for this config.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError`] if `explorer_base_url` is not a usable base URL.
    pub fn explorer(&self) -> Result<Explorer, LinkError> {
        Explorer::new(&self.explorer_base_url)
    }
}
