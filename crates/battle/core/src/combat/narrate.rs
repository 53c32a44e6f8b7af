//! Deterministic narration for the battle log.
//!
//! Strings are assembled from the outcome alone, so a replayed battle
//! produces a byte-identical log.

use crate::combat::advantage::Advantage;
use crate::state::PartSlot;

/// Human-readable slot label (the `Display` impl is wire-format flavored).
fn slot_label(slot: PartSlot) -> &'static str {
    match slot {
        PartSlot::Head => "head",
        PartSlot::RightArm => "right arm",
        PartSlot::LeftArm => "left arm",
        PartSlot::Legs => "legs",
    }
}

pub fn defend(attacker: &str) -> String {
    format!("{attacker} braces for impact.")
}

pub fn miss(attacker: &str, weapon: &str, target: &str) -> String {
    format!("{attacker}'s {weapon} misses {target}.")
}

pub fn support(attacker: &str, weapon: &str, target: &str, heal: u32) -> String {
    format!("{attacker}'s {weapon} restores {heal} durability to {target}.")
}

pub fn strike(
    attacker: &str,
    weapon: &str,
    target: &str,
    slot: PartSlot,
    damage: u32,
    critical: bool,
    advantage: Advantage,
    part_destroyed: bool,
    target_knocked_out: bool,
) -> String {
    let slot = slot_label(slot);
    let mut text = format!("{attacker}'s {weapon} hits {target}'s {slot} for {damage} damage");

    if critical {
        text.push_str(" (critical!)");
    }
    match advantage {
        Advantage::Favorable => text.push_str(" (effective)"),
        Advantage::Unfavorable => text.push_str(" (resisted)"),
        Advantage::Neutral => {}
    }
    text.push('.');

    if part_destroyed {
        text.push_str(&format!(" The {slot} is destroyed!"));
    }
    if target_knocked_out {
        text.push_str(&format!(" {target} is out of the fight!"));
    }

    text
}
