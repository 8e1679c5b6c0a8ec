//! Equipment catalog and symbolic-code resolution.
//!
//! The catalog is built once, never mutated, and shared by every build.
//! Resolving a code hands out a fresh `ModuleInstance`, so the catalog's
//! templates are never aliased into a ship.

use ahash::AHashMap;
use std::path::Path;

use super::schema::{EquipmentCatalogFile, EquipmentGroup, EquipmentTemplate, ModuleCategory};
use crate::core::error::CatalogError;
use crate::ship::ModuleInstance;

/// Position of a template inside the catalog
#[derive(Debug, Clone, Copy)]
struct TemplateRef {
    category: ModuleCategory,
    group: usize,
    module: usize,
}

/// Registry of every fittable module, keyed by lower-cased symbolic code
#[derive(Debug, Default)]
pub struct EquipmentCatalog {
    standard: Vec<EquipmentGroup>,
    hardpoints: Vec<EquipmentGroup>,
    internal: Vec<EquipmentGroup>,
    /// Lower-cased symbol -> first template in search order
    by_symbol: AHashMap<String, TemplateRef>,
}

impl EquipmentCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-parsed groups
    pub fn from_file(file: EquipmentCatalogFile) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            standard: file.standard,
            hardpoints: file.hardpoints,
            internal: file.internal,
            by_symbol: AHashMap::new(),
        };
        catalog.reindex()?;
        Ok(catalog)
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: EquipmentCatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::parse("module catalog", e))?;
        Self::from_file(file)
    }

    /// Load a catalog from a TOML file
    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let file: EquipmentCatalogFile = toml::from_str(&content)
            .map_err(|e| CatalogError::parse(path.display().to_string(), e))?;
        Self::from_file(file)
    }

    /// Add a group to a category and reindex
    pub fn add_group(
        &mut self,
        category: ModuleCategory,
        group: EquipmentGroup,
    ) -> Result<(), CatalogError> {
        match category {
            ModuleCategory::Standard => self.standard.push(group),
            ModuleCategory::Hardpoint => self.hardpoints.push(group),
            ModuleCategory::Internal => self.internal.push(group),
        }
        self.reindex()
    }

    fn groups(&self, category: ModuleCategory) -> &[EquipmentGroup] {
        match category {
            ModuleCategory::Standard => &self.standard,
            ModuleCategory::Hardpoint => &self.hardpoints,
            ModuleCategory::Internal => &self.internal,
        }
    }

    fn reindex(&mut self) -> Result<(), CatalogError> {
        let mut errors = Vec::new();

        // Stamp group ids onto their templates
        for groups in [&mut self.standard, &mut self.hardpoints, &mut self.internal] {
            for group in groups.iter_mut() {
                for template in group.modules.iter_mut() {
                    if template.group.is_empty() {
                        template.group = group.group.clone();
                    }
                }
            }
        }

        let mut by_symbol = AHashMap::new();
        for category in ModuleCategory::SEARCH_ORDER {
            for (g, group) in self.groups(category).iter().enumerate() {
                for (m, template) in group.modules.iter().enumerate() {
                    if template.symbol.trim().is_empty() {
                        errors.push(format!(
                            "{:?} group '{}' entry {} has an empty symbol",
                            category, group.group, m
                        ));
                        continue;
                    }
                    let key = template.symbol.to_lowercase();
                    if by_symbol.contains_key(&key) {
                        tracing::debug!(symbol = %template.symbol, "duplicate symbol shadowed by earlier entry");
                        continue;
                    }
                    by_symbol.insert(
                        key,
                        TemplateRef {
                            category,
                            group: g,
                            module: m,
                        },
                    );
                }
            }
        }

        if errors.is_empty() {
            self.by_symbol = by_symbol;
            Ok(())
        } else {
            Err(CatalogError::Invalid(errors))
        }
    }

    fn lookup(&self, code: &str) -> Option<(ModuleCategory, &EquipmentTemplate)> {
        if code.is_empty() {
            return None;
        }
        let r = self.by_symbol.get(&code.to_lowercase())?;
        let template = self.groups(r.category).get(r.group)?.modules.get(r.module)?;
        Some((r.category, template))
    }

    /// Resolve a symbolic code to a fresh module instance
    ///
    /// Standard modules are searched first, then hardpoints, then internals;
    /// the first case-insensitive match wins. Empty or unknown codes give `None`.
    pub fn resolve(&self, code: &str) -> Option<ModuleInstance> {
        self.lookup(code)
            .map(|(category, template)| ModuleInstance::from_template(template, Some(category)))
    }

    /// Borrow the shared template for a code
    pub fn template(&self, code: &str) -> Option<&EquipmentTemplate> {
        self.lookup(code).map(|(_, t)| t)
    }

    /// Category a code resolves into
    pub fn category_of(&self, code: &str) -> Option<ModuleCategory> {
        self.lookup(code).map(|(c, _)| c)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
[[standard]]
group = "pp"

[[standard.modules]]
symbol = "Int_Powerplant_Size2_Class1"
name = "Power Plant"
class = 2
rating = "E"
cost = 1978
mass = 1.3
attributes = { pgen = 6.4 }

[[hardpoints]]
group = "pl"

[[hardpoints.modules]]
symbol = "Hpt_PulseLaser_Fixed_Small"
class = 1
rating = "F"
power = 0.39

[[internal]]
group = "cr"

[[internal.modules]]
symbol = "Int_CargoRack_Size2_Class1"
class = 2
rating = "E"
attributes = { cargo = 4.0 }

[[internal.modules]]
symbol = "int_powerplant_size2_class1"
class = 2
rating = "X"
"#;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = EquipmentCatalog::from_toml_str(CATALOG).unwrap();
        let module = catalog.resolve("INT_POWERPLANT_SIZE2_CLASS1").unwrap();
        assert_eq!(module.symbol(), "Int_Powerplant_Size2_Class1");
        assert_eq!(module.template.group, "pp");
        assert_eq!(module.category, Some(ModuleCategory::Standard));
    }

    #[test]
    fn test_first_match_in_search_order_wins() {
        let catalog = EquipmentCatalog::from_toml_str(CATALOG).unwrap();
        // The internal duplicate is shadowed by the standard entry
        assert_eq!(catalog.template("int_powerplant_size2_class1").unwrap().rating, "E");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_categories() {
        let catalog = EquipmentCatalog::from_toml_str(CATALOG).unwrap();
        assert_eq!(
            catalog.category_of("hpt_pulselaser_fixed_small"),
            Some(ModuleCategory::Hardpoint)
        );
        assert_eq!(
            catalog.category_of("Int_CargoRack_Size2_Class1"),
            Some(ModuleCategory::Internal)
        );
    }

    #[test]
    fn test_unknown_and_empty_codes() {
        let catalog = EquipmentCatalog::from_toml_str(CATALOG).unwrap();
        assert!(catalog.resolve("").is_none());
        assert!(catalog.resolve("hpt_nonexistent").is_none());
    }

    #[test]
    fn test_resolve_returns_fresh_instances() {
        let catalog = EquipmentCatalog::from_toml_str(CATALOG).unwrap();
        let mut first = catalog.resolve("Int_CargoRack_Size2_Class1").unwrap();
        first.template.attributes.insert("cargo".into(), 64.0);
        let second = catalog.resolve("Int_CargoRack_Size2_Class1").unwrap();
        assert_eq!(second.template.attributes["cargo"], 4.0);
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let toml = r#"
[[internal]]
group = "cr"
[[internal.modules]]
symbol = ""
class = 1
rating = "E"
"#;
        let err = EquipmentCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(ref errors) if errors.len() == 1));
    }
}
