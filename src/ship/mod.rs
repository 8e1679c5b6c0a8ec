//! Resolved vehicle model
//!
//! Built empty from a hull template, filled by the loadout builder, then
//! finalized with its summary codes.

pub mod codes;
pub mod module;
pub mod slot;

pub use codes::SummaryCodes;
pub use module::{BlueprintMeta, ModValue, Modification, ModuleInstance};
pub use slot::{CargoHatch, Slot};

use serde::{Deserialize, Serialize};

use crate::catalog::EquipmentTemplate;
use crate::core::types::{BulkheadGrade, StandardSlot};
use crate::ships::{VehicleProperties, VehicleTemplate};

/// A hull with its fitted modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleModel {
    /// Registry id of the hull template
    pub ship_id: String,
    pub properties: VehicleProperties,
    /// Player-given name and ident, when the event carries them
    pub name: Option<String>,
    pub ident: Option<String>,
    pub cargo_hatch: CargoHatch,
    bulkheads: Slot,
    bulkhead_grade: Option<BulkheadGrade>,
    standard: Vec<Slot>,
    hardpoints: Vec<Slot>,
    internal: Vec<Slot>,
    codes: SummaryCodes,
}

impl VehicleModel {
    /// Empty model shaped by the template
    pub fn new(template: &VehicleTemplate) -> Self {
        Self {
            ship_id: template.id.clone(),
            properties: template.properties.clone(),
            name: None,
            ident: None,
            cargo_hatch: CargoHatch::default(),
            bulkheads: Slot::new(1),
            bulkhead_grade: None,
            standard: template.slots.standard.iter().map(|&c| Slot::new(c)).collect(),
            hardpoints: template
                .slots
                .hardpoints
                .iter()
                .map(|&c| Slot::new(c))
                .collect(),
            internal: template
                .slots
                .internal
                .iter()
                .map(|d| Slot::new(d.class()))
                .collect(),
            codes: SummaryCodes::default(),
        }
    }

    /// Fit a fresh bulkhead instance of the given grade
    pub fn use_bulkhead(&mut self, grade: BulkheadGrade, template: &EquipmentTemplate) {
        self.bulkheads
            .install(ModuleInstance::from_template(template, None));
        self.bulkhead_grade = Some(grade);
    }

    pub fn bulkheads(&self) -> &Slot {
        &self.bulkheads
    }

    pub fn bulkheads_mut(&mut self) -> &mut Slot {
        &mut self.bulkheads
    }

    /// Index of the selected bulkheads (0 = grade 1 .. 4 = reactive)
    pub fn bulkhead_index(&self) -> Option<usize> {
        self.bulkhead_grade.map(|g| g.index())
    }

    pub fn bulkhead_grade(&self) -> Option<BulkheadGrade> {
        self.bulkhead_grade
    }

    pub fn standard(&self) -> &[Slot] {
        &self.standard
    }

    pub fn standard_slot(&self, slot: StandardSlot) -> &Slot {
        &self.standard[slot.index()]
    }

    pub fn standard_slot_mut(&mut self, slot: StandardSlot) -> &mut Slot {
        &mut self.standard[slot.index()]
    }

    pub fn hardpoints(&self) -> &[Slot] {
        &self.hardpoints
    }

    pub fn hardpoint_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.hardpoints.get_mut(index)
    }

    pub fn internal(&self) -> &[Slot] {
        &self.internal
    }

    pub fn internal_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.internal.get_mut(index)
    }

    pub fn codes(&self) -> &SummaryCodes {
        &self.codes
    }

    /// Recompute the power-priority code
    pub fn update_power_priorities(&mut self) -> &mut Self {
        self.codes.power_priorities = codes::power_priorities(self);
        self
    }

    /// Recompute the power-enabled code
    pub fn update_power_enabled(&mut self) -> &mut Self {
        self.codes.power_enabled = codes::power_enabled(self);
        self
    }

    /// Recompute the modifications code
    pub fn update_modifications(&mut self) -> &mut Self {
        self.codes.modifications = codes::modifications(self);
        self
    }

    /// Every fitted module, bulkheads first
    pub fn modules(&self) -> impl Iterator<Item = &ModuleInstance> {
        std::iter::once(&self.bulkheads)
            .chain(&self.standard)
            .chain(&self.hardpoints)
            .chain(&self.internal)
            .filter_map(|s| s.module.as_ref())
    }
}
