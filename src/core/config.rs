//! Import configuration with documented defaults
//!
//! The journal format has a handful of places where the importer has to pick
//! a value the event does not carry. Those choices live here.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::error::CatalogError;

/// Number of distinct `_Size<n>` suffixes an internal slot identifier may carry
pub const INTERNAL_SIZE_SUFFIXES: u8 = 9;

/// Configuration for the loadout builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Priority bank given to the cargo hatch when the event has no entry for it
    ///
    /// The journal gives no hint here, so the hatch is parked in the last
    /// bank (0-based 4) and left disabled.
    pub cargo_hatch_default_priority: u8,

    /// Ceiling for internal sequence numbers; only numbers below it are searched
    ///
    /// Internal numbering skips values, so a template position keeps
    /// consuming sequence numbers until one matches or this ceiling is hit.
    pub internal_search_limit: u32,

    /// How many size suffixes (`_Size0` upwards) to try per sequence number
    ///
    /// Must not exceed [`INTERNAL_SIZE_SUFFIXES`].
    pub internal_size_suffixes: u8,

    /// Apply engineering found on the armour entry
    pub engineer_bulkheads: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            cargo_hatch_default_priority: 4,
            internal_search_limit: 99,
            internal_size_suffixes: INTERNAL_SIZE_SUFFIXES,
            engineer_bulkheads: true,
        }
    }
}

impl ImportConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let config: ImportConfig =
            toml::from_str(content).map_err(|e| CatalogError::parse("import config", e))?;
        config
            .validate()
            .map_err(|e| CatalogError::Invalid(vec![e]))?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        // Priority banks are 0-based and the game has five of them
        if self.cargo_hatch_default_priority > 4 {
            return Err(format!(
                "cargo_hatch_default_priority ({}) must be in 0..=4",
                self.cargo_hatch_default_priority
            ));
        }

        if self.internal_size_suffixes == 0 || self.internal_size_suffixes > INTERNAL_SIZE_SUFFIXES {
            return Err(format!(
                "internal_size_suffixes ({}) must be in 1..={}",
                self.internal_size_suffixes, INTERNAL_SIZE_SUFFIXES
            ));
        }

        // Identifiers carry a two-digit sequence number
        if self.internal_search_limit == 0 || self.internal_search_limit > 99 {
            return Err(format!(
                "internal_search_limit ({}) must be in 1..=99",
                self.internal_search_limit
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

static CONFIG: OnceLock<ImportConfig> = OnceLock::new();

/// Get the global import config (initializes with defaults if not set)
pub fn config() -> &'static ImportConfig {
    CONFIG.get_or_init(ImportConfig::default)
}

/// Set the global import config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: ImportConfig) -> Result<(), ImportConfig> {
    CONFIG.set(config)
}
