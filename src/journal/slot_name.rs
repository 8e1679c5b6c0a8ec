//! Journal slot identifier grammar
//!
//! Slot identifiers follow several unrelated schemes:
//!
//!   PowerPlant, MainEngines, ...     reserved standard slots
//!   Armour, CargoHatch               reserved built-ins
//!   MediumHardpoint2                 hardpoint class + 1-based index within the class
//!   Slot03_Size5                     internal sequence number + size suffix
//!   Military01                       military compartment sequence number
//!
//! The size suffix of an internal identifier does not have to match the
//! compartment's real class, and internal sequence numbers may skip.
//!
//! This parser uses nom version 8.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::digit1,
    combinator::{all_consuming, map_res, value},
    IResult, Parser,
};

use crate::core::error::LoadoutError;
use crate::core::types::{HardpointClass, StandardSlot};

/// Cosmetic and built-in slots that never hold a catalog module
const IGNORED_PREFIXES: [&str; 16] = [
    "PaintJob",
    "Decal",
    "ShipName",
    "ShipID",
    "ShipKit",
    "WeaponColour",
    "EngineColour",
    "VesselVoice",
    "Bobble",
    "StringLights",
    "ShipCockpit",
    "CargoBayDoor",
    "PlanetaryApproachSuite",
    "DataLinkScanner",
    "CodexScanner",
    "DiscoveryScanner",
];

/// A classified slot identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotName {
    CargoHatch,
    Armour,
    Standard(StandardSlot),
    Hardpoint { class: HardpointClass, index: u32 },
    Internal { sequence: u32, size: u8 },
    Military { sequence: u32 },
    /// Paint jobs, decals, name plates, built-in scanners and the like
    Ignored,
}

/// Classify a journal slot identifier
pub fn parse_slot_name(name: &str) -> Result<SlotName, LoadoutError> {
    match name {
        "CargoHatch" => return Ok(SlotName::CargoHatch),
        "Armour" => return Ok(SlotName::Armour),
        _ => {}
    }
    if let Some(slot) = StandardSlot::from_journal_name(name) {
        return Ok(SlotName::Standard(slot));
    }
    if IGNORED_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return Ok(SlotName::Ignored);
    }

    match all_consuming(alt((hardpoint, internal, military))).parse(name) {
        Ok((_, slot)) => Ok(slot),
        Err(_) => Err(LoadoutError::MalformedSlotIdentifier(name.to_string())),
    }
}

/// Expected identifier of the `index`-th (1-based) hardpoint of a class
pub fn hardpoint_name(class: HardpointClass, index: u32) -> String {
    format!("{}Hardpoint{}", class.slot_prefix(), index)
}

/// Internal identifier for a sequence number and size suffix
pub fn internal_name(sequence: u32, size: u8) -> String {
    format!("Slot{:02}_Size{}", sequence, size)
}

/// Military compartment identifier
pub fn military_name(sequence: u32) -> String {
    // Always two digits: 10 renders as Military10, never Military010
    format!("Military{:02}", sequence)
}

fn hardpoint_class(input: &str) -> IResult<&str, HardpointClass> {
    alt((
        value(HardpointClass::Tiny, tag("Tiny")),
        value(HardpointClass::Small, tag("Small")),
        value(HardpointClass::Medium, tag("Medium")),
        value(HardpointClass::Large, tag("Large")),
        value(HardpointClass::Huge, tag("Huge")),
    ))
    .parse(input)
}

fn two_digits(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u32>(),
    )
    .parse(input)
}

fn hardpoint(input: &str) -> IResult<&str, SlotName> {
    (
        hardpoint_class,
        tag("Hardpoint"),
        map_res(digit1, |s: &str| s.parse::<u32>()),
    )
        .map(|(class, _, index)| SlotName::Hardpoint { class, index })
        .parse(input)
}

fn internal(input: &str) -> IResult<&str, SlotName> {
    (
        tag("Slot"),
        two_digits,
        tag("_Size"),
        map_res(
            take_while_m_n(1, 1, |c: char| c.is_ascii_digit()),
            |s: &str| s.parse::<u8>(),
        ),
    )
        .map(|(_, sequence, _, size)| SlotName::Internal { sequence, size })
        .parse(input)
}

fn military(input: &str) -> IResult<&str, SlotName> {
    (tag("Military"), two_digits)
        .map(|(_, sequence)| SlotName::Military { sequence })
        .parse(input)
}
