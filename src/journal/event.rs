//! Journal `Loadout` event types
//!
//! The event is loosely typed: numbers sometimes arrive as strings, flags as
//! `0`/`1`, and most fields may be missing on older records. The lenient
//! deserializers below accept all of those shapes.

use serde::{Deserialize, Serialize};

/// Root of a `Loadout` event
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadoutEvent {
    #[serde(default, rename = "timestamp")]
    pub timestamp: Option<String>,
    #[serde(default, rename = "event")]
    pub event: Option<String>,
    /// Hull type as the simulation names it, e.g. `SideWinder`
    pub ship: String,
    #[serde(default, rename = "ShipID", deserialize_with = "lenient::opt_u64")]
    pub ship_id: Option<u64>,
    #[serde(default)]
    pub ship_name: Option<String>,
    #[serde(default)]
    pub ship_ident: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub hull_value: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub modules_value: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub hull_health: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub unladen_mass: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub rebuy: Option<u64>,
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
}

/// One fitted module as the event reports it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleEntry {
    pub slot: String,
    #[serde(default)]
    pub item: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub on: bool,
    #[serde(default, deserialize_with = "lenient::priority")]
    pub priority: u8,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub health: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub value: Option<u64>,
    #[serde(default)]
    pub engineering: Option<Engineering>,
}

impl ModuleEntry {
    pub fn new(slot: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            item: item.into(),
            on: true,
            priority: 0,
            health: None,
            value: None,
            engineering: None,
        }
    }
}

/// Engineering applied to a module
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Engineering {
    #[serde(default)]
    pub engineer: Option<String>,
    #[serde(default, rename = "EngineerID", deserialize_with = "lenient::opt_u64")]
    pub engineer_id: Option<u64>,
    #[serde(default, rename = "BlueprintID", deserialize_with = "lenient::opt_u64")]
    pub blueprint_id: Option<u64>,
    #[serde(default)]
    pub blueprint_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_grade")]
    pub level: Option<u8>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub quality: Option<f64>,
    #[serde(default)]
    pub experimental_effect: Option<SpecialEffectPayload>,
    #[serde(default)]
    pub modifiers: Vec<EngineeringModifier>,
}

/// Experimental effect, either a bare id or an object keyed by the id
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SpecialEffectPayload {
    Id(String),
    Keyed(serde_json::Map<String, serde_json::Value>),
}

impl SpecialEffectPayload {
    /// The effect id: the string itself, or the first key of the object
    pub fn effect_id(&self) -> Option<&str> {
        match self {
            SpecialEffectPayload::Id(id) if !id.is_empty() => Some(id),
            SpecialEffectPayload::Id(_) => None,
            SpecialEffectPayload::Keyed(map) => map.keys().next().map(String::as_str),
        }
    }
}

/// One stat change reported by the journal
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineeringModifier {
    pub label: String,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub original_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub less_is_good: bool,
    #[serde(default)]
    pub value_str: Option<String>,
}

impl EngineeringModifier {
    pub fn new(label: impl Into<String>, value: f64, original_value: f64) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
            original_value: Some(original_value),
            less_is_good: false,
            value_str: None,
        }
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(number).filter(|n| n.is_finite()))
    }

    pub fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_f64(deserializer)?
            .filter(|n| *n >= 0.0)
            .map(|n| n.round() as u64))
    }

    pub fn opt_grade<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_f64(deserializer)?
            .filter(|n| *n >= 0.0)
            .map(|n| n.round().min(f64::from(u8::MAX)) as u8))
    }

    pub fn priority<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_f64(deserializer)?
            .map(|n| n.round().clamp(0.0, f64::from(u8::MAX)) as u8)
            .unwrap_or(0))
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => {
                let s = s.trim();
                s.eq_ignore_ascii_case("true") || s == "1"
            }
            Some(other) => number(&other).is_some_and(|n| n != 0.0),
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loadout_event() {
        let json = r#"{
            "timestamp": "2018-03-01T12:00:00Z",
            "event": "Loadout",
            "Ship": "SideWinder",
            "ShipID": 3,
            "ShipName": "Pathfinder",
            "ShipIdent": "PF-01",
            "Modules": [
                { "Slot": "PowerPlant", "Item": "int_powerplant_size2_class1", "On": true, "Priority": 1, "Health": 1.0 },
                { "Slot": "FuelTank", "Item": "int_fueltank_size1_class3" }
            ]
        }"#;
        let event: LoadoutEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.ship, "SideWinder");
        assert_eq!(event.ship_id, Some(3));
        assert_eq!(event.ship_name.as_deref(), Some("Pathfinder"));
        assert_eq!(event.modules.len(), 2);
        assert!(event.modules[0].on);
        assert_eq!(event.modules[0].priority, 1);
        assert!(!event.modules[1].on);
        assert_eq!(event.modules[1].priority, 0);
    }

    #[test]
    fn test_loose_numbers_and_flags() {
        let json = r#"{
            "Slot": "Slot01_Size2", "Item": "int_cargorack_size2_class1",
            "On": 1, "Priority": "2",
            "Engineering": {
                "BlueprintName": "Misc_LightWeight", "Level": "3", "Quality": 0.5,
                "Modifiers": [
                    { "Label": "Mass", "Value": "0.65", "OriginalValue": 1.3, "LessIsGood": 1 }
                ]
            }
        }"#;
        let entry: ModuleEntry = serde_json::from_str(json).unwrap();
        assert!(entry.on);
        assert_eq!(entry.priority, 2);
        let eng = entry.engineering.unwrap();
        assert_eq!(eng.level, Some(3));
        let m = &eng.modifiers[0];
        assert_eq!(m.value, Some(0.65));
        assert!(m.less_is_good);
    }

    #[test]
    fn test_experimental_effect_shapes() {
        let as_id: Engineering =
            serde_json::from_str(r#"{ "ExperimentalEffect": "special_thermal_cascade" }"#)
                .unwrap();
        assert_eq!(
            as_id.experimental_effect.unwrap().effect_id(),
            Some("special_thermal_cascade")
        );

        let keyed: Engineering = serde_json::from_str(
            r#"{ "ExperimentalEffect": { "special_incendiary_rounds": {}, "special_other": {} } }"#,
        )
        .unwrap();
        assert_eq!(
            keyed.experimental_effect.unwrap().effect_id(),
            Some("special_incendiary_rounds")
        );
    }

    #[test]
    fn test_value_str_modifier_has_no_numbers() {
        let m: EngineeringModifier = serde_json::from_str(
            r#"{ "Label": "DamageType", "ValueStr": "$Thermic;", "ValueStr_Localised": "Thermal" }"#,
        )
        .unwrap();
        assert!(m.value.is_none());
        assert_eq!(m.value_str.as_deref(), Some("$Thermic;"));
    }
}
