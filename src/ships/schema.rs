//! Vehicle template schema types for TOML deserialization.

use serde::{Deserialize, Serialize};

use crate::catalog::EquipmentTemplate;
use crate::core::types::ModuleClass;

/// Base hull properties
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleProperties {
    pub name: String,
    pub manufacturer: String,
    /// Landing pad size, 1 (small) to 3 (large)
    pub class: u8,
    pub hull_cost: u64,
    pub hull_mass: f64,
    pub speed: f64,
    pub boost: f64,
    pub base_armour: f64,
    pub base_shield_strength: f64,
    pub hardness: f64,
    pub heat_capacity: f64,
    pub masslock: u8,
}

/// One internal compartment as the hull template declares it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InternalSlotDescriptor {
    /// General-purpose compartment of the given class
    Class(ModuleClass),
    /// Restricted compartment, e.g. `{ class = 5, name = "Military" }`
    Restricted { class: ModuleClass, name: String },
}

impl InternalSlotDescriptor {
    pub fn class(&self) -> ModuleClass {
        match self {
            InternalSlotDescriptor::Class(class) => *class,
            InternalSlotDescriptor::Restricted { class, .. } => *class,
        }
    }

    /// Military compartments are named `Military<NN>` in the journal
    pub fn is_military(&self) -> bool {
        matches!(self, InternalSlotDescriptor::Restricted { .. })
    }
}

/// Slot layout of a hull
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    /// Classes of power plant, thrusters, FSD, life support, distributor,
    /// sensors and fuel tank, in that order
    pub standard: [ModuleClass; 7],
    /// Hardpoint classes in template order, 0 = utility
    #[serde(default)]
    pub hardpoints: Vec<ModuleClass>,
    #[serde(default)]
    pub internal: Vec<InternalSlotDescriptor>,
}

/// Complete hull definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleTemplate {
    /// Registry id, e.g. `cobra_mk_iii`
    pub id: String,
    /// Type name the simulation reports in the `Ship` field, e.g. `CobraMkIII`
    #[serde(default)]
    pub edid: String,
    #[serde(default)]
    pub properties: VehicleProperties,
    pub slots: SlotLayout,
    /// Grade 1, grade 2, grade 3, mirrored, reactive
    #[serde(default)]
    pub bulkheads: Vec<EquipmentTemplate>,
}

/// Root structure of a ships file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleCatalogFile {
    #[serde(default)]
    pub ships: Vec<VehicleTemplate>,
}
