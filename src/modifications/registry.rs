//! Modifier action table, blueprints and special effects

use ahash::AHashMap;
use std::path::Path;

use super::schema::{BlueprintDef, ModificationCatalogFile, ModifierAction, SpecialEffect};
use crate::core::error::CatalogError;

/// Noise the journal mixes into modifier labels
const LABEL_NOISE: [&str; 2] = ["outfittingfieldtype_", "persecond"];

/// Lower-case a journal modifier label and strip the known noise tokens
pub fn normalize_label(label: &str) -> String {
    let mut normalized = label.to_lowercase();
    for token in LABEL_NOISE {
        normalized = normalized.replace(token, "");
    }
    normalized
}

#[derive(Debug, Default)]
pub struct ModificationCatalog {
    /// Declaration order matters: the first containing label wins
    actions: Vec<ModifierAction>,
    action_keys: Vec<String>,
    blueprints: Vec<BlueprintDef>,
    blueprint_by_name: AHashMap<String, usize>,
    specials: AHashMap<String, SpecialEffect>,
}

impl ModificationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(file: ModificationCatalogFile) -> Result<Self, CatalogError> {
        let mut errors = Vec::new();
        let mut catalog = Self::new();

        for action in file.modifier_actions {
            if action.label.trim().is_empty() {
                errors.push("modifier action with empty label".to_string());
                continue;
            }
            catalog.action_keys.push(action.label.to_lowercase());
            catalog.actions.push(action);
        }

        for blueprint in file.blueprints {
            let key = blueprint.fdname.to_lowercase();
            if key.is_empty() {
                errors.push(format!("blueprint '{}' has no fdname", blueprint.name));
                continue;
            }
            catalog
                .blueprint_by_name
                .entry(key)
                .or_insert(catalog.blueprints.len());
            catalog.blueprints.push(blueprint);
        }

        for special in file.specials {
            catalog.specials.insert(special.id.to_lowercase(), special);
        }

        if errors.is_empty() {
            Ok(catalog)
        } else {
            Err(CatalogError::Invalid(errors))
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: ModificationCatalogFile = toml::from_str(content)
            .map_err(|e| CatalogError::parse("modification catalog", e))?;
        Self::from_file(file)
    }

    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let file: ModificationCatalogFile = toml::from_str(&content)
            .map_err(|e| CatalogError::parse(path.display().to_string(), e))?;
        Self::from_file(file)
    }

    /// Find the action-table entry for a journal modifier label
    ///
    /// The label is normalized and matched as a substring of the table labels;
    /// the first table entry containing it wins.
    pub fn find_actions(&self, label: &str) -> Option<&ModifierAction> {
        let needle = normalize_label(label);
        if needle.is_empty() {
            return None;
        }
        self.action_keys
            .iter()
            .position(|key| key.contains(&needle))
            .and_then(|i| self.actions.get(i))
    }

    /// Find a blueprint by journal name, exact first, then by containment
    pub fn blueprint(&self, name: &str) -> Option<&BlueprintDef> {
        let key = name.to_lowercase();
        if key.is_empty() {
            return None;
        }
        if let Some(&i) = self.blueprint_by_name.get(&key) {
            return self.blueprints.get(i);
        }
        self.blueprints
            .iter()
            .find(|b| b.fdname.to_lowercase().contains(&key))
    }

    pub fn special(&self, id: &str) -> Option<&SpecialEffect> {
        self.specials.get(&id.to_lowercase())
    }
}
