//! Journal `Loadout` import
//!
//! Event types, the slot identifier grammar, and the builder that turns an
//! event into a `VehicleModel`.

pub mod builder;
pub mod event;
pub mod slot_name;

pub use builder::LoadoutBuilder;
pub use event::{Engineering, EngineeringModifier, LoadoutEvent, ModuleEntry, SpecialEffectPayload};
pub use slot_name::{parse_slot_name, SlotName};
