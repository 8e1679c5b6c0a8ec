//! Derived summary codes
//!
//! Each code is a pure function of the current slot state. Priorities and
//! enabled flags cover the cargo hatch, then standard slots, hardpoints and
//! internals. The modifications code covers bulkheads, standard slots,
//! hardpoints and internals.

use super::module::{ModValue, ModuleInstance};
use super::slot::Slot;
use super::VehicleModel;

/// All three codes for a model
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct SummaryCodes {
    pub power_priorities: String,
    pub power_enabled: String,
    pub modifications: String,
}

fn powered_slots(model: &VehicleModel) -> impl Iterator<Item = &Slot> {
    model
        .standard()
        .iter()
        .chain(model.hardpoints())
        .chain(model.internal())
}

/// One digit per slot, capped at 9
pub fn power_priorities(model: &VehicleModel) -> String {
    std::iter::once(model.cargo_hatch.priority)
        .chain(powered_slots(model).map(|s| s.priority))
        .map(|p| char::from_digit(u32::from(p.min(9)), 10).unwrap_or('9'))
        .collect()
}

/// `1` for enabled, `0` for disabled
pub fn power_enabled(model: &VehicleModel) -> String {
    std::iter::once(model.cargo_hatch.enabled)
        .chain(powered_slots(model).map(|s| s.enabled))
        .map(|on| if on { '1' } else { '0' })
        .collect()
}

fn module_code(module: &ModuleInstance) -> String {
    let mut out = String::new();
    for (i, (name, m)) in module.modifications().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match &m.value {
            ModValue::Number(n) => {
                out.push_str(&format!("{}={:.4}", name, n));
            }
            ModValue::Literal(s) => {
                out.push_str(&format!("{}={}", name, s));
            }
        }
    }
    if let Some(bp) = &module.blueprint {
        out.push_str(&format!("@{}/{}", bp.name, bp.grade.unwrap_or(0)));
        if let Some(special) = &bp.special {
            out.push_str(&format!("+{}", special.id));
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

/// Per-slot modifications joined by `;`, `-` for empty or stock slots
pub fn modifications(model: &VehicleModel) -> String {
    std::iter::once(model.bulkheads())
        .chain(model.standard())
        .chain(model.hardpoints())
        .chain(model.internal())
        .map(|slot| match &slot.module {
            Some(module) => module_code(module),
            None => "-".to_string(),
        })
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquipmentTemplate;
    use crate::modifications::SpecialEffect;
    use crate::ship::BlueprintMeta;
    use std::collections::BTreeMap;

    fn laser() -> ModuleInstance {
        let template = EquipmentTemplate {
            symbol: "Hpt_PulseLaser_Fixed_Small".into(),
            name: "Pulse Laser".into(),
            group: "pl".into(),
            class: 1,
            rating: "F".into(),
            cost: 2200,
            mass: 2.0,
            power: 0.39,
            attributes: BTreeMap::new(),
        };
        ModuleInstance::from_template(&template, None)
    }

    #[test]
    fn test_stock_module_code() {
        assert_eq!(module_code(&laser()), "-");
    }

    #[test]
    fn test_module_code_with_blueprint_and_special() {
        let mut module = laser();
        module.set_mod_value("thermload", ModValue::Number(-60.0), true);
        module.set_mod_value("damagedist", ModValue::Literal("T".into()), false);
        module.blueprint = Some(BlueprintMeta {
            name: "Weapon_Efficient".into(),
            definition: None,
            grade: Some(5),
            special: Some(SpecialEffect {
                id: "special_thermal_cascade".into(),
                name: "Thermal Cascade".into(),
                effects: BTreeMap::new(),
            }),
        });
        assert_eq!(
            module_code(&module),
            "damagedist=T,thermload=-60.0000@Weapon_Efficient/5+special_thermal_cascade"
        );
    }
}
