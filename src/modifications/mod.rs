//! Engineering: modifier action table, blueprints, special effects, and the
//! applicator that writes them onto module instances.

pub mod applicator;
pub mod registry;
pub mod schema;

pub use applicator::{percentage_delta, ModificationApplicator};
pub use registry::{normalize_label, ModificationCatalog};
pub use schema::{
    ActionValue, BlueprintDef, BlueprintGrade, ModificationCatalogFile, ModifierAction,
    SpecialEffect,
};
