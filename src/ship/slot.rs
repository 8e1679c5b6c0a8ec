use serde::{Deserialize, Serialize};

use super::module::ModuleInstance;
use crate::core::types::{ModuleClass, Priority};

/// One fixed position on the hull
///
/// The class is set by the hull template; only the contents change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    class: ModuleClass,
    pub module: Option<ModuleInstance>,
    pub enabled: bool,
    pub priority: Priority,
}

impl Slot {
    pub fn new(class: ModuleClass) -> Self {
        Self {
            class,
            module: None,
            enabled: false,
            priority: 0,
        }
    }

    pub fn class(&self) -> ModuleClass {
        self.class
    }

    pub fn is_empty(&self) -> bool {
        self.module.is_none()
    }

    /// Put a module in the slot, returning whatever was there
    pub fn install(&mut self, module: ModuleInstance) -> Option<ModuleInstance> {
        if module.class() > self.class {
            tracing::debug!(
                symbol = module.symbol(),
                module_class = module.class(),
                slot_class = self.class,
                "module larger than its slot"
            );
        }
        self.module.replace(module)
    }

    pub fn module_mut(&mut self) -> Option<&mut ModuleInstance> {
        self.module.as_mut()
    }
}

/// Built-in cargo hatch; not an installable module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CargoHatch {
    pub enabled: bool,
    pub priority: Priority,
}
