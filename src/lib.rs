//! Ship Loadout - journal `Loadout` events to resolved ship models

pub mod catalog;
pub mod core;
pub mod data;
pub mod journal;
pub mod modifications;
pub mod ship;
pub mod ships;

pub use crate::core::error::{CatalogError, LoadoutError, Result};
pub use crate::data::Catalogs;
pub use crate::journal::{LoadoutBuilder, LoadoutEvent};
pub use crate::ship::VehicleModel;
