//! Modification catalog schema types for TOML deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What an action does to the stat it names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionValue {
    /// Weight applied to the computed percentage delta
    Weight(f64),
    /// Literal written as-is, for qualitative stats
    Literal(String),
}

/// Maps one journal modifier label to the stats it touches
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModifierAction {
    /// Label as the journal spells it, e.g. `DamagePerSecond`
    pub label: String,
    /// Stat name -> action
    pub actions: BTreeMap<String, ActionValue>,
}

/// Per-grade feature ranges of a blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintGrade {
    pub grade: u8,
    /// Stat name -> `[worst, best]` fractional change at this grade
    #[serde(default)]
    pub features: BTreeMap<String, [f64; 2]>,
}

/// Named engineering recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintDef {
    /// Name the journal reports in `BlueprintName`
    pub fdname: String,
    #[serde(default)]
    pub name: String,
    /// Module groups this blueprint can be applied to
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub grades: Vec<BlueprintGrade>,
}

impl BlueprintDef {
    pub fn grade(&self, grade: u8) -> Option<&BlueprintGrade> {
        self.grades.iter().find(|g| g.grade == grade)
    }
}

/// Experimental effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialEffect {
    /// Id the journal reports, e.g. `special_thermal_cascade`
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub effects: BTreeMap<String, ActionValue>,
}

/// Root structure of a modifications file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModificationCatalogFile {
    #[serde(default)]
    pub modifier_actions: Vec<ModifierAction>,
    #[serde(default)]
    pub blueprints: Vec<BlueprintDef>,
    #[serde(default)]
    pub specials: Vec<SpecialEffect>,
}
