//! Build a vehicle model from a journal `Loadout` event.
//!
//! Slots are matched positionally: the hull template's descriptor lists are
//! walked in order and the identifier each position should carry is rendered
//! and looked up in the event. The numbering embedded in the event's
//! identifiers is never trusted to say where a module goes.
//!
//! Engineering on standard, hardpoint and internal modules is queued while
//! slots are filled and applied once every module is installed.

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;

use super::event::{LoadoutEvent, ModuleEntry};
use super::slot_name::{
    hardpoint_name, internal_name, military_name, parse_slot_name, SlotName,
};
use crate::catalog::EquipmentCatalog;
use crate::core::config::{self, ImportConfig};
use crate::core::error::{CatalogError, LoadoutError, Result};
use crate::core::types::{BulkheadGrade, HardpointClass, StandardSlot};
use crate::modifications::{ModificationApplicator, ModificationCatalog};
use crate::ship::{ModuleInstance, Slot, VehicleModel};
use crate::ships::{VehicleRegistry, VehicleTemplate};

/// Where a queued module lives in the model
#[derive(Debug, Clone, Copy)]
enum SlotRef {
    Standard(StandardSlot),
    Hardpoint(usize),
    Internal(usize),
}

/// Event entries keyed by slot identifier
struct EntryIndex<'e> {
    by_slot: AHashMap<&'e str, &'e ModuleEntry>,
    claimed: AHashSet<&'e str>,
}

impl<'e> EntryIndex<'e> {
    fn new(event: &'e LoadoutEvent) -> Self {
        let mut by_slot = AHashMap::with_capacity(event.modules.len());
        for entry in &event.modules {
            if by_slot.contains_key(entry.slot.as_str()) {
                // First entry wins, so with duplicates the result depends on list order
                tracing::debug!(slot = %entry.slot, "duplicate slot entry ignored");
                continue;
            }
            by_slot.insert(entry.slot.as_str(), entry);
        }
        Self {
            by_slot,
            claimed: AHashSet::new(),
        }
    }

    /// Look up an identifier and mark it as consumed
    fn take(&mut self, slot: &str) -> Option<&'e ModuleEntry> {
        let (&key, &entry) = self.by_slot.get_key_value(slot)?;
        self.claimed.insert(key);
        Some(entry)
    }

    fn contains(&self, slot: &str) -> bool {
        self.by_slot.contains_key(slot)
    }
}

/// Turns loadout events into vehicle models against shared catalogs
#[derive(Debug, Clone)]
pub struct LoadoutBuilder<'a> {
    ships: &'a VehicleRegistry,
    equipment: &'a EquipmentCatalog,
    applicator: ModificationApplicator<'a>,
    config: ImportConfig,
}

impl<'a> LoadoutBuilder<'a> {
    /// Create a builder using the global import config
    pub fn new(
        ships: &'a VehicleRegistry,
        equipment: &'a EquipmentCatalog,
        modifications: &'a ModificationCatalog,
    ) -> Self {
        Self {
            ships,
            equipment,
            applicator: ModificationApplicator::new(modifications),
            config: config::config().clone(),
        }
    }

    /// Replace the import config, rejecting one that fails validation
    pub fn with_config(mut self, config: ImportConfig) -> std::result::Result<Self, CatalogError> {
        config
            .validate()
            .map_err(|e| CatalogError::Invalid(vec![e]))?;
        self.config = config;
        Ok(self)
    }

    /// Parse an event from JSON and build it
    pub fn build_from_json(&self, json: &str) -> Result<VehicleModel> {
        let event: LoadoutEvent = serde_json::from_str(json)?;
        self.build(&event)
    }

    /// Build many independent events in parallel
    pub fn build_many(&self, events: &[LoadoutEvent]) -> Vec<Result<VehicleModel>> {
        events.par_iter().map(|event| self.build(event)).collect()
    }

    /// Build a fully populated model from one event
    pub fn build(&self, event: &LoadoutEvent) -> Result<VehicleModel> {
        let template = self
            .ships
            .lookup(&event.ship)
            .ok_or_else(|| LoadoutError::UnknownVehicleType(event.ship.clone()))?;

        let mut model = VehicleModel::new(template);
        model.name = event.ship_name.clone().filter(|s| !s.is_empty());
        model.ident = event.ship_ident.clone().filter(|s| !s.is_empty());

        check_slot_names(event);

        let mut entries = EntryIndex::new(event);
        let mut deferred: Vec<(SlotRef, &ModuleEntry)> = Vec::new();

        self.fill_cargo_hatch(&mut model, &mut entries);
        self.fill_bulkheads(&mut model, template, &mut entries)?;
        self.fill_standard(&mut model, &mut entries, &mut deferred)?;
        self.fill_hardpoints(&mut model, template, &mut entries, &mut deferred)?;
        self.fill_internals(&mut model, template, &mut entries, &mut deferred)?;

        report_unclaimed(event, &entries);

        for (slot, entry) in deferred {
            let module = match slot {
                SlotRef::Standard(s) => model.standard_slot_mut(s).module_mut(),
                SlotRef::Hardpoint(i) => model.hardpoint_mut(i).and_then(Slot::module_mut),
                SlotRef::Internal(i) => model.internal_mut(i).and_then(Slot::module_mut),
            };
            if let Some(module) = module {
                self.engineer(module, entry);
            }
        }

        model
            .update_power_priorities()
            .update_power_enabled()
            .update_modifications();

        tracing::debug!(
            ship = %model.ship_id,
            modules = model.modules().count(),
            "loadout built"
        );
        Ok(model)
    }

    fn fill_cargo_hatch(&self, model: &mut VehicleModel, entries: &mut EntryIndex<'_>) {
        match entries.take("CargoHatch") {
            Some(entry) => {
                model.cargo_hatch.enabled = entry.on;
                model.cargo_hatch.priority = entry.priority;
            }
            None => {
                // Nothing to go on: disabled, in the configured bank
                model.cargo_hatch.enabled = false;
                model.cargo_hatch.priority = self.config.cargo_hatch_default_priority;
            }
        }
    }

    fn fill_bulkheads(
        &self,
        model: &mut VehicleModel,
        template: &VehicleTemplate,
        entries: &mut EntryIndex<'_>,
    ) -> Result<()> {
        let Some(entry) = entries.take("Armour") else {
            return Ok(());
        };

        let unknown = || LoadoutError::UnknownEquipment {
            slot: entry.slot.clone(),
            code: entry.item.clone(),
        };
        let grade = BulkheadGrade::from_item_code(&entry.item).ok_or_else(unknown)?;
        let bulkhead = template.bulkheads.get(grade.index()).ok_or_else(unknown)?;

        model.use_bulkhead(grade, bulkhead);
        let slot = model.bulkheads_mut();
        slot.enabled = true;
        slot.priority = entry.priority;

        // Bulkheads are not queued; their engineering goes on immediately
        if self.config.engineer_bulkheads {
            if let Some(module) = slot.module_mut() {
                self.engineer(module, entry);
            }
        }
        Ok(())
    }

    fn fill_standard<'e>(
        &self,
        model: &mut VehicleModel,
        entries: &mut EntryIndex<'e>,
        deferred: &mut Vec<(SlotRef, &'e ModuleEntry)>,
    ) -> Result<()> {
        for standard in StandardSlot::ALL {
            let Some(entry) = entries.take(standard.journal_name()) else {
                continue;
            };
            let Some(module) = self.resolve(entry)? else {
                continue;
            };

            let slot = model.standard_slot_mut(standard);
            slot.install(module);
            if standard == StandardSlot::FuelTank {
                // The event carries no usable power state for the fuel tank
                slot.enabled = true;
                slot.priority = 0;
            } else {
                slot.enabled = entry.on;
                slot.priority = entry.priority;
            }
            queue(deferred, SlotRef::Standard(standard), entry);
        }
        Ok(())
    }

    fn fill_hardpoints<'e>(
        &self,
        model: &mut VehicleModel,
        template: &VehicleTemplate,
        entries: &mut EntryIndex<'e>,
        deferred: &mut Vec<(SlotRef, &'e ModuleEntry)>,
    ) -> Result<()> {
        // 1-based position within each class, counted over the whole list
        let mut seen = [0u32; HardpointClass::ALL.len()];

        for (position, &class) in template.slots.hardpoints.iter().enumerate() {
            let Some(hardpoint_class) = HardpointClass::from_class(class) else {
                tracing::warn!(ship = %template.id, position, class, "hardpoint class out of range");
                continue;
            };
            let counter = &mut seen[hardpoint_class.class() as usize];
            *counter += 1;

            let name = hardpoint_name(hardpoint_class, *counter);
            let Some(entry) = entries.take(&name) else {
                // Older events omit hardpoints added to the hull later
                tracing::trace!(slot = %name, "hardpoint absent");
                continue;
            };
            let Some(module) = self.resolve(entry)? else {
                continue;
            };
            if let Some(slot) = model.hardpoint_mut(position) {
                slot.install(module);
                slot.enabled = entry.on;
                slot.priority = entry.priority;
                queue(deferred, SlotRef::Hardpoint(position), entry);
            }
        }
        Ok(())
    }

    fn fill_internals<'e>(
        &self,
        model: &mut VehicleModel,
        template: &VehicleTemplate,
        entries: &mut EntryIndex<'e>,
        deferred: &mut Vec<(SlotRef, &'e ModuleEntry)>,
    ) -> Result<()> {
        let mut sequence = 1u32;
        let mut military = 1u32;

        for (position, descriptor) in template.slots.internal.iter().enumerate() {
            let found = if descriptor.is_military() {
                let name = military_name(military);
                military += 1;
                entries.take(&name)
            } else {
                let mut found = None;
                // Sequence numbers skip, so keep going until one matches
                while found.is_none() && sequence < self.config.internal_search_limit {
                    if let Some(name) = self.find_sized_entry(entries, sequence) {
                        found = entries.take(&name);
                    }
                    sequence += 1;
                }
                found
            };

            let Some(entry) = found else {
                tracing::trace!(ship = %template.id, position, "internal compartment absent");
                continue;
            };
            let Some(module) = self.resolve(entry)? else {
                continue;
            };
            if let Some(slot) = model.internal_mut(position) {
                slot.install(module);
                slot.enabled = entry.on;
                slot.priority = entry.priority;
                queue(deferred, SlotRef::Internal(position), entry);
            }
        }
        Ok(())
    }

    /// First `SlotNN_SizeS` identifier present for a sequence number, by ascending size
    fn find_sized_entry(&self, entries: &EntryIndex<'_>, sequence: u32) -> Option<String> {
        (0..self.config.internal_size_suffixes)
            .map(|size| internal_name(sequence, size))
            .find(|name| entries.contains(name))
    }

    /// Resolve an occupied entry; an empty item code means nothing is fitted
    fn resolve(&self, entry: &ModuleEntry) -> Result<Option<ModuleInstance>> {
        if entry.item.trim().is_empty() {
            tracing::debug!(slot = %entry.slot, "slot listed without an item");
            return Ok(None);
        }
        self.equipment
            .resolve(&entry.item)
            .map(Some)
            .ok_or_else(|| LoadoutError::UnknownEquipment {
                slot: entry.slot.clone(),
                code: entry.item.clone(),
            })
    }

    fn engineer(&self, module: &mut ModuleInstance, entry: &ModuleEntry) {
        let Some(engineering) = &entry.engineering else {
            return;
        };
        self.applicator.apply(
            module,
            &engineering.modifiers,
            engineering.blueprint_name.as_deref(),
            engineering.level,
            engineering
                .experimental_effect
                .as_ref()
                .and_then(|e| e.effect_id()),
        );
    }
}

fn queue<'e>(deferred: &mut Vec<(SlotRef, &'e ModuleEntry)>, slot: SlotRef, entry: &'e ModuleEntry) {
    if entry.engineering.is_some() {
        deferred.push((slot, entry));
    }
}

/// Log identifiers that fit no known scheme; they are skipped
fn check_slot_names(event: &LoadoutEvent) {
    for entry in &event.modules {
        match parse_slot_name(&entry.slot) {
            Ok(SlotName::Ignored) => {
                tracing::trace!(slot = %entry.slot, item = %entry.item, "cosmetic slot ignored");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(item = %entry.item, "{}", e),
        }
    }
}

/// Log well-formed module slots no template position asked for
fn report_unclaimed(event: &LoadoutEvent, entries: &EntryIndex<'_>) {
    for entry in &event.modules {
        let module_slot = matches!(
            parse_slot_name(&entry.slot),
            Ok(SlotName::Hardpoint { .. } | SlotName::Internal { .. } | SlotName::Military { .. })
        );
        if module_slot && !entries.claimed.contains(entry.slot.as_str()) {
            tracing::debug!(slot = %entry.slot, item = %entry.item, "slot not on this hull, skipped");
        }
    }
}
