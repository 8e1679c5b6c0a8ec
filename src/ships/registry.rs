//! Registry of hull templates

use ahash::AHashMap;
use std::path::Path;

use super::schema::{VehicleCatalogFile, VehicleTemplate};
use crate::core::error::CatalogError;
use crate::core::types::HardpointClass;

/// Hull templates indexed by registry id and by journal type name
#[derive(Debug, Default)]
pub struct VehicleRegistry {
    templates: Vec<VehicleTemplate>,
    by_id: AHashMap<String, usize>,
    by_edid: AHashMap<String, usize>,
}

impl VehicleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template after checking its slot layout
    pub fn register(&mut self, template: VehicleTemplate) -> Result<(), CatalogError> {
        let errors = validate_template(&template);
        if !errors.is_empty() {
            return Err(CatalogError::Invalid(errors));
        }

        let index = self.templates.len();
        self.by_id.insert(template.id.to_lowercase(), index);
        if !template.edid.is_empty() {
            self.by_edid.insert(template.edid.to_lowercase(), index);
        }
        self.templates.push(template);
        Ok(())
    }

    /// Parse a registry from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: VehicleCatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::parse("ship catalog", e))?;
        Self::from_file(file)
    }

    /// Load a registry from a TOML file
    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let file: VehicleCatalogFile = toml::from_str(&content)
            .map_err(|e| CatalogError::parse(path.display().to_string(), e))?;
        Self::from_file(file)
    }

    fn from_file(file: VehicleCatalogFile) -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        for template in file.ships {
            registry.register(template)?;
        }
        Ok(registry)
    }

    /// Find a hull by journal type name or registry id, ignoring case
    pub fn lookup(&self, ship: &str) -> Option<&VehicleTemplate> {
        let key = ship.to_lowercase();
        self.by_edid
            .get(&key)
            .or_else(|| self.by_id.get(&key))
            .and_then(|&i| self.templates.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn validate_template(template: &VehicleTemplate) -> Vec<String> {
    let mut errors = Vec::new();

    if template.id.trim().is_empty() {
        errors.push("ship id must not be empty".to_string());
    }

    for (i, &class) in template.slots.hardpoints.iter().enumerate() {
        if HardpointClass::from_class(class).is_none() {
            errors.push(format!(
                "{}: hardpoint {} has class {} (expected 0..=4)",
                template.id, i, class
            ));
        }
    }

    for (i, slot) in template.slots.internal.iter().enumerate() {
        if slot.class() > 8 {
            errors.push(format!(
                "{}: internal {} has class {} (expected 0..=8)",
                template.id,
                i,
                slot.class()
            ));
        }
    }

    if !template.bulkheads.is_empty() && template.bulkheads.len() != 5 {
        errors.push(format!(
            "{}: expected 5 bulkheads, found {}",
            template.id,
            template.bulkheads.len()
        ));
    }

    errors
}
