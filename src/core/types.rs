//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Module class (size), 0 for utility mounts up to 8 for the largest internals
pub type ModuleClass = u8;

/// 0-based power priority bank
pub type Priority = u8;

/// Size class of a hardpoint mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HardpointClass {
    /// Utility mount
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

impl HardpointClass {
    pub const ALL: [HardpointClass; 5] = [
        HardpointClass::Tiny,
        HardpointClass::Small,
        HardpointClass::Medium,
        HardpointClass::Large,
        HardpointClass::Huge,
    ];

    pub fn from_class(class: ModuleClass) -> Option<Self> {
        Self::ALL.get(class as usize).copied()
    }

    pub fn class(&self) -> ModuleClass {
        *self as ModuleClass
    }

    /// Prefix used in journal slot identifiers, e.g. `Medium` in `MediumHardpoint2`
    pub fn slot_prefix(&self) -> &'static str {
        match self {
            HardpointClass::Tiny => "Tiny",
            HardpointClass::Small => "Small",
            HardpointClass::Medium => "Medium",
            HardpointClass::Large => "Large",
            HardpointClass::Huge => "Huge",
        }
    }
}

/// The seven fixed standard slots, in model order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardSlot {
    PowerPlant,
    Thrusters,
    FrameShiftDrive,
    LifeSupport,
    PowerDistributor,
    Sensors,
    FuelTank,
}

impl StandardSlot {
    pub const ALL: [StandardSlot; 7] = [
        StandardSlot::PowerPlant,
        StandardSlot::Thrusters,
        StandardSlot::FrameShiftDrive,
        StandardSlot::LifeSupport,
        StandardSlot::PowerDistributor,
        StandardSlot::Sensors,
        StandardSlot::FuelTank,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Reserved journal slot identifier
    pub fn journal_name(&self) -> &'static str {
        match self {
            StandardSlot::PowerPlant => "PowerPlant",
            StandardSlot::Thrusters => "MainEngines",
            StandardSlot::FrameShiftDrive => "FrameShiftDrive",
            StandardSlot::LifeSupport => "LifeSupport",
            StandardSlot::PowerDistributor => "PowerDistributor",
            StandardSlot::Sensors => "Radar",
            StandardSlot::FuelTank => "FuelTank",
        }
    }

    pub fn from_journal_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.journal_name() == name)
    }
}

/// The five bulkhead grades every hull offers, in template order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulkheadGrade {
    Grade1,
    Grade2,
    Grade3,
    Mirrored,
    Reactive,
}

impl BulkheadGrade {
    pub const ALL: [BulkheadGrade; 5] = [
        BulkheadGrade::Grade1,
        BulkheadGrade::Grade2,
        BulkheadGrade::Grade3,
        BulkheadGrade::Mirrored,
        BulkheadGrade::Reactive,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    fn code_suffix(&self) -> &'static str {
        match self {
            BulkheadGrade::Grade1 => "_armour_grade1",
            BulkheadGrade::Grade2 => "_armour_grade2",
            BulkheadGrade::Grade3 => "_armour_grade3",
            BulkheadGrade::Mirrored => "_armour_mirrored",
            BulkheadGrade::Reactive => "_armour_reactive",
        }
    }

    /// Pick the grade from an armour item code like `SideWinder_Armour_Reactive`
    pub fn from_item_code(code: &str) -> Option<Self> {
        let code = code.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|grade| code.ends_with(grade.code_suffix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardpoint_class_round_trip() {
        assert_eq!(HardpointClass::from_class(0), Some(HardpointClass::Tiny));
        assert_eq!(HardpointClass::from_class(4), Some(HardpointClass::Huge));
        assert_eq!(HardpointClass::from_class(5), None);
        assert_eq!(HardpointClass::Large.class(), 3);
    }

    #[test]
    fn test_standard_slot_names() {
        assert_eq!(StandardSlot::from_journal_name("Radar"), Some(StandardSlot::Sensors));
        assert_eq!(StandardSlot::from_journal_name("MainEngines"), Some(StandardSlot::Thrusters));
        assert_eq!(StandardSlot::FuelTank.index(), 6);
        assert_eq!(StandardSlot::from_journal_name("radar"), None);
    }

    #[test]
    fn test_bulkhead_suffix() {
        assert_eq!(
            BulkheadGrade::from_item_code("SideWinder_Armour_Reactive"),
            Some(BulkheadGrade::Reactive)
        );
        assert_eq!(
            BulkheadGrade::from_item_code("cobramkiii_armour_grade3"),
            Some(BulkheadGrade::Grade3)
        );
        assert_eq!(BulkheadGrade::from_item_code("SideWinder_Armour_Grade4"), None);
        assert_eq!(BulkheadGrade::Reactive.index(), 4);
    }
}
