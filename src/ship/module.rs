//! Runtime module instances.
//!
//! A module instance is an owned copy of an equipment template plus the
//! engineering overlay applied to it. Instances are never shared between
//! slots or between builds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{EquipmentTemplate, ModuleCategory};
use crate::modifications::{BlueprintDef, SpecialEffect};

/// Value of one stat modification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModValue {
    /// Percentage delta, already scaled by the action weight
    Number(f64),
    /// Qualitative flag such as a damage type
    Literal(String),
}

impl ModValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ModValue::Number(n) => Some(*n),
            ModValue::Literal(_) => None,
        }
    }
}

/// A stat modification together with how the journal rated its direction
///
/// `less_is_good` is carried through untouched; the value is never re-signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    pub value: ModValue,
    pub less_is_good: bool,
}

/// Provenance of the engineering on a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintMeta {
    /// Blueprint name as reported by the journal
    pub name: String,
    /// Catalog definition, when the name matched one
    pub definition: Option<BlueprintDef>,
    pub grade: Option<u8>,
    pub special: Option<SpecialEffect>,
}

/// A fitted module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInstance {
    pub template: EquipmentTemplate,
    /// Catalog category, `None` for bulkheads which come from the hull template
    pub category: Option<ModuleCategory>,
    mods: BTreeMap<String, Modification>,
    pub blueprint: Option<BlueprintMeta>,
}

impl ModuleInstance {
    pub fn from_template(template: &EquipmentTemplate, category: Option<ModuleCategory>) -> Self {
        Self {
            template: template.clone(),
            category,
            mods: BTreeMap::new(),
            blueprint: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.template.symbol
    }

    pub fn class(&self) -> u8 {
        self.template.class
    }

    /// Set a modification, replacing any previous value for the same stat
    pub fn set_mod_value(&mut self, name: &str, value: ModValue, less_is_good: bool) {
        self.mods
            .insert(name.to_string(), Modification { value, less_is_good });
    }

    pub fn modification(&self, name: &str) -> Option<&Modification> {
        self.mods.get(name)
    }

    pub fn mod_value(&self, name: &str) -> Option<&ModValue> {
        self.mods.get(name).map(|m| &m.value)
    }

    /// Modifications in stat-name order
    pub fn modifications(&self) -> impl Iterator<Item = (&str, &Modification)> {
        self.mods.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_engineered(&self) -> bool {
        !self.mods.is_empty() || self.blueprint.is_some()
    }
}
