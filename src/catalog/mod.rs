//! Equipment catalog
//!
//! Static registry of fittable modules and the resolver that turns a
//! journal item code into a module instance.

pub mod registry;
pub mod schema;

pub use registry::EquipmentCatalog;
pub use schema::{EquipmentCatalogFile, EquipmentGroup, EquipmentTemplate, ModuleCategory};
