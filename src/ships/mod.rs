//! Hull templates loaded from TOML

pub mod registry;
pub mod schema;

pub use registry::VehicleRegistry;
pub use schema::{
    InternalSlotDescriptor, SlotLayout, VehicleCatalogFile, VehicleProperties, VehicleTemplate,
};
