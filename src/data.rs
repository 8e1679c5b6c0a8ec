//! Bundled catalogs loaded from a data directory
//!
//! A data directory holds `ships.toml`, `modules.toml` and
//! `modifications.toml`. The crate ships one under `data/`.

use std::path::Path;

use crate::catalog::EquipmentCatalog;
use crate::core::error::CatalogError;
use crate::journal::LoadoutBuilder;
use crate::modifications::ModificationCatalog;
use crate::ships::VehicleRegistry;

pub const SHIPS_FILE: &str = "ships.toml";
pub const MODULES_FILE: &str = "modules.toml";
pub const MODIFICATIONS_FILE: &str = "modifications.toml";

/// The three static catalogs a build reads from
#[derive(Debug, Default)]
pub struct Catalogs {
    pub ships: VehicleRegistry,
    pub equipment: EquipmentCatalog,
    pub modifications: ModificationCatalog,
}

impl Catalogs {
    /// Load all three catalogs from a directory
    pub fn load_directory(dir: &Path) -> Result<Self, CatalogError> {
        let catalogs = Self {
            ships: VehicleRegistry::load_file(&dir.join(SHIPS_FILE))?,
            equipment: EquipmentCatalog::load_file(&dir.join(MODULES_FILE))?,
            modifications: ModificationCatalog::load_file(&dir.join(MODIFICATIONS_FILE))?,
        };
        tracing::info!(
            ships = catalogs.ships.len(),
            modules = catalogs.equipment.len(),
            "catalogs loaded from {}",
            dir.display()
        );
        Ok(catalogs)
    }

    /// Builder borrowing these catalogs, using the global import config
    pub fn builder(&self) -> LoadoutBuilder<'_> {
        LoadoutBuilder::new(&self.ships, &self.equipment, &self.modifications)
    }
}
