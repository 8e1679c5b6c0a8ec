//! Apply journal engineering to a module instance.

use super::registry::ModificationCatalog;
use super::schema::ActionValue;
use crate::journal::EngineeringModifier;
use crate::ship::{BlueprintMeta, ModValue, ModuleInstance};

/// Percentage change of a reported value over its original
///
/// `None` when the result would not be finite (zero original).
pub fn percentage_delta(value: f64, original: f64) -> Option<f64> {
    let delta = value / original * 100.0 - 100.0;
    delta.is_finite().then_some(delta)
}

/// Writes modifier deltas and blueprint provenance onto modules
#[derive(Debug, Clone, Copy)]
pub struct ModificationApplicator<'a> {
    catalog: &'a ModificationCatalog,
}

impl<'a> ModificationApplicator<'a> {
    pub fn new(catalog: &'a ModificationCatalog) -> Self {
        Self { catalog }
    }

    /// Apply modifiers and attach blueprint metadata
    ///
    /// Does nothing when `modifiers` is empty. Only the stats the modifiers
    /// touch are written; existing modifications are otherwise kept.
    pub fn apply(
        &self,
        module: &mut ModuleInstance,
        modifiers: &[EngineeringModifier],
        blueprint: Option<&str>,
        grade: Option<u8>,
        special: Option<&str>,
    ) {
        if modifiers.is_empty() {
            return;
        }

        for modifier in modifiers {
            self.apply_modifier(module, modifier);
        }

        let Some(name) = blueprint.filter(|b| !b.is_empty()) else {
            return;
        };

        let definition = self.catalog.blueprint(name).cloned();
        if definition.is_none() {
            tracing::debug!(blueprint = name, symbol = module.symbol(), "blueprint not in catalog");
        }
        let meta = module.blueprint.get_or_insert_with(|| BlueprintMeta {
            name: name.to_string(),
            definition: None,
            grade: None,
            special: None,
        });
        meta.name = name.to_string();
        meta.definition = definition;
        if let Some(grade) = grade {
            meta.grade = Some(grade);
        }
        if let Some(id) = special {
            match self.catalog.special(id) {
                Some(effect) => meta.special = Some(effect.clone()),
                None => tracing::debug!(special = id, "special effect not in catalog"),
            }
        }
    }

    fn apply_modifier(&self, module: &mut ModuleInstance, modifier: &EngineeringModifier) {
        let Some(entry) = self.catalog.find_actions(&modifier.label) else {
            tracing::debug!(label = %modifier.label, "no action for modifier label");
            return;
        };

        // Literal actions do not need the numbers, numeric ones do
        let delta = match (modifier.value, modifier.original_value) {
            (Some(value), Some(original)) => percentage_delta(value, original),
            _ => None,
        };

        for (stat, action) in &entry.actions {
            match action {
                ActionValue::Literal(literal) => {
                    module.set_mod_value(
                        stat,
                        ModValue::Literal(literal.clone()),
                        modifier.less_is_good,
                    );
                }
                ActionValue::Weight(weight) => match delta {
                    Some(delta) => {
                        module.set_mod_value(
                            stat,
                            ModValue::Number(weight * delta),
                            modifier.less_is_good,
                        );
                    }
                    None => {
                        tracing::warn!(
                            label = %modifier.label,
                            value = ?modifier.value,
                            original = ?modifier.original_value,
                            "modifier has no usable value, skipped"
                        );
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquipmentTemplate;
    use std::collections::BTreeMap;

    const MODS: &str = r#"
[[modifier_actions]]
label = "Mass"
actions = { mass = 1 }

[[modifier_actions]]
label = "DamagePerSecond"
actions = { damage = 1 }

[[modifier_actions]]
label = "WeaponMode"
actions = { mode = "burst" }

[[modifier_actions]]
label = "ShieldBoost"
actions = { shieldboost = 0.5 }

[[blueprints]]
fdname = "Weapon_Overcharged"
name = "Overcharged"

[[blueprints.grades]]
grade = 5
features = { damage = [0.3, 0.6] }

[[specials]]
id = "special_thermal_cascade"
name = "Thermal Cascade"
"#;

    fn catalog() -> ModificationCatalog {
        ModificationCatalog::from_toml_str(MODS).unwrap()
    }

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
    fn test_percentage_delta() {
        let delta = percentage_delta(110.0, 100.0).unwrap();
        assert!((delta - 10.0).abs() < 1e-9);
        let delta = percentage_delta(0.65, 1.3).unwrap();
        assert!((delta + 50.0).abs() < 1e-9);
        assert!(percentage_delta(1.0, 0.0).is_none());
    }

    #[test]
    fn test_numeric_action_scaled_by_weight() {
        let catalog = catalog();
        let applicator = ModificationApplicator::new(&catalog);
        let mut module = laser();
        applicator.apply(
            &mut module,
            &[
                EngineeringModifier::new("DamagePerSecond", 110.0, 100.0),
                EngineeringModifier::new("ShieldBoost", 120.0, 100.0),
            ],
            None,
            None,
            None,
        );
        let damage = module.mod_value("damage").unwrap().as_number().unwrap();
        assert!((damage - 10.0).abs() < 1e-9);
        let boost = module.mod_value("shieldboost").unwrap().as_number().unwrap();
        assert!((boost - 10.0).abs() < 1e-9);
        assert!(module.blueprint.is_none());
    }

    #[test]
    fn test_literal_action() {
        let catalog = catalog();
        let applicator = ModificationApplicator::new(&catalog);
        let mut module = laser();
        let modifier = EngineeringModifier {
            label: "WeaponMode".into(),
            value: None,
            original_value: None,
            less_is_good: false,
            value_str: Some("Burst".into()),
        };
        applicator.apply(&mut module, &[modifier], None, None, None);
        assert_eq!(module.mod_value("mode"), Some(&ModValue::Literal("burst".into())));
    }

    #[test]
    fn test_less_is_good_is_recorded_not_resigned() {
        let catalog = catalog();
        let applicator = ModificationApplicator::new(&catalog);
        let mut module = laser();
        let mut modifier = EngineeringModifier::new("Mass", 1.0, 2.0);
        modifier.less_is_good = true;
        applicator.apply(&mut module, &[modifier], None, None, None);
        let m = module.modification("mass").unwrap();
        assert!(m.less_is_good);
        assert!((m.value.as_number().unwrap() + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_blueprint_grade_and_special() {
        let catalog = catalog();
        let applicator = ModificationApplicator::new(&catalog);
        let mut module = laser();
        applicator.apply(
            &mut module,
            &[EngineeringModifier::new("DamagePerSecond", 150.0, 100.0)],
            Some("Weapon_Overcharged"),
            Some(5),
            Some("special_thermal_cascade"),
        );
        let bp = module.blueprint.as_ref().unwrap();
        assert_eq!(bp.name, "Weapon_Overcharged");
        assert_eq!(bp.grade, Some(5));
        assert_eq!(bp.definition.as_ref().unwrap().name, "Overcharged");
        assert!(bp.definition.as_ref().unwrap().grade(5).is_some());
        assert_eq!(bp.special.as_ref().unwrap().name, "Thermal Cascade");
    }

    #[test]
    fn test_unknown_blueprint_keeps_name() {
        let catalog = catalog();
        let applicator = ModificationApplicator::new(&catalog);
        let mut module = laser();
        applicator.apply(
            &mut module,
            &[EngineeringModifier::new("Mass", 1.0, 2.0)],
            Some("Weapon_Mystery"),
            Some(2),
            None,
        );
        let bp = module.blueprint.as_ref().unwrap();
        assert_eq!(bp.name, "Weapon_Mystery");
        assert!(bp.definition.is_none());
        assert_eq!(bp.grade, Some(2));
    }

    #[test]
    fn test_empty_modifiers_is_noop() {
        let catalog = catalog();
        let applicator = ModificationApplicator::new(&catalog);
        let mut module = laser();
        applicator.apply(&mut module, &[], Some("Weapon_Overcharged"), Some(5), None);
        assert!(!module.is_engineered());
    }

    #[test]
    fn test_reapplication_is_idempotent() {
        let catalog = catalog();
        let applicator = ModificationApplicator::new(&catalog);
        let modifiers = [
            EngineeringModifier::new("DamagePerSecond", 130.0, 100.0),
            EngineeringModifier::new("Mass", 1.5, 2.0),
        ];
        let mut once = laser();
        applicator.apply(&mut once, &modifiers, Some("Weapon_Overcharged"), Some(3), None);
        let mut twice = once.clone();
        applicator.apply(&mut twice, &modifiers, Some("Weapon_Overcharged"), Some(3), None);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_bad_numbers_are_skipped() {
        let catalog = catalog();
        let applicator = ModificationApplicator::new(&catalog);
        let mut module = laser();
        applicator.apply(
            &mut module,
            &[EngineeringModifier::new("Mass", 1.0, 0.0)],
            None,
            None,
            None,
        );
        assert!(module.mod_value("mass").is_none());
    }
}
