//! Equipment catalog schema types for TOML deserialization.
//!
//! An equipment template describes one purchasable module. Templates are
//! grouped (`pp`, `fsd`, `pl`, `hr`, ...) and the groups are split into three
//! categories that mirror where a module can be fitted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::ModuleClass;

/// Which top-level part of the catalog a template came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    /// Power plants, thrusters, drives and the other fixed-slot modules
    Standard,
    /// Weapons and utility mounts
    Hardpoint,
    /// Optional internal modules
    Internal,
}

impl ModuleCategory {
    /// Search order used when resolving a symbolic code
    pub const SEARCH_ORDER: [ModuleCategory; 3] = [
        ModuleCategory::Standard,
        ModuleCategory::Hardpoint,
        ModuleCategory::Internal,
    ];
}

/// Static description of one fittable module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentTemplate {
    /// Symbolic code as the journal reports it, compared case-insensitively
    pub symbol: String,
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// Group id; filled from the enclosing group when loaded from a catalog
    #[serde(default)]
    pub group: String,
    /// Module class (size)
    pub class: ModuleClass,
    /// Rating letter, `A` (best) to `I`
    pub rating: String,
    /// Purchase cost in credits
    #[serde(default)]
    pub cost: u64,
    /// Mass in tonnes
    #[serde(default)]
    pub mass: f64,
    /// Power draw in MW
    #[serde(default)]
    pub power: f64,
    /// Any further performance figures (`integrity`, `optmass`, `damage`, ...)
    #[serde(default)]
    pub attributes: BTreeMap<String, f64>,
}

impl EquipmentTemplate {
    /// Look up a performance figure, falling back to the named fields
    pub fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "mass" => Some(self.mass),
            "power" => Some(self.power),
            "cost" => Some(self.cost as f64),
            _ => self.attributes.get(name).copied(),
        }
    }
}

/// Named group of templates
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentGroup {
    pub group: String,
    #[serde(default)]
    pub modules: Vec<EquipmentTemplate>,
}

/// Root structure of a module catalog file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EquipmentCatalogFile {
    #[serde(default)]
    pub standard: Vec<EquipmentGroup>,
    #[serde(default)]
    pub hardpoints: Vec<EquipmentGroup>,
    #[serde(default)]
    pub internal: Vec<EquipmentGroup>,
}
