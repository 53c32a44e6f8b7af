//! Equippable parts and the four-slot loadout.

use super::common::ResourceMeter;

/// The four equipment slots every combatant carries.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PartSlot {
    #[default]
    Head,
    RightArm,
    LeftArm,
    Legs,
}

impl PartSlot {
    pub const COUNT: usize = 4;

    /// All slots in canonical order (head, right arm, left arm, legs).
    pub const ALL: [PartSlot; Self::COUNT] = [
        PartSlot::Head,
        PartSlot::RightArm,
        PartSlot::LeftArm,
        PartSlot::Legs,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PartSlot::Head => 0,
            PartSlot::RightArm => 1,
            PartSlot::LeftArm => 2,
            PartSlot::Legs => 3,
        }
    }
}

/// Action kind a part performs when selected as the attacking part.
///
/// Closed set: the resolver matches exhaustively on this, so adding a kind
/// forces every resolution path to handle it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PartKind {
    /// Projectile attack (shooting arms, head cannons).
    Ranged,
    /// Close-quarters attack (striking arms).
    Melee,
    /// Repairs durability on an allied combatant.
    Support,
    /// No usable action (most legs, armor heads).
    #[default]
    Inert,
}

impl PartKind {
    /// Whether this kind can be declared as an attack against an opponent.
    #[inline]
    pub const fn is_offensive(self) -> bool {
        matches!(self, PartKind::Ranged | PartKind::Melee)
    }
}

/// An equipped component occupying exactly one slot.
///
/// Durability is clamped at zero; a part at zero durability is destroyed,
/// contributes nothing to derived stats, and can no longer be selected as
/// the attacking part. It may still be named as a target, which is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    pub slot: PartSlot,
    pub kind: PartKind,
    pub name: String,
    /// Base damage (offensive kinds) or repair amount (support).
    pub power: u32,
    /// Accuracy modifier applied against the target's evasion.
    pub accuracy: i32,
    /// Contribution to the owner's effective speed and evasion.
    pub speed: i32,
    pub durability: ResourceMeter,
    /// Remaining activations for limited-use parts. `None` = unlimited.
    pub uses: Option<u8>,
    /// Destroying a vital part knocks the owner out regardless of the
    /// other slots. Heads carry this by default.
    pub vital: bool,
}

impl Part {
    #[inline]
    pub const fn is_destroyed(&self) -> bool {
        self.durability.is_empty()
    }

    /// Whether this part can currently be declared as the acting part.
    pub fn is_usable(&self) -> bool {
        !self.is_destroyed() && self.kind != PartKind::Inert && self.uses.is_none_or(|n| n > 0)
    }

    /// Reduces durability, clamped at zero. Returns `true` only when this
    /// application destroyed the part; repeat applications on a destroyed
    /// part report `false` again.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if self.is_destroyed() {
            return false;
        }
        self.durability.current = self.durability.current.saturating_sub(amount);
        self.is_destroyed()
    }

    /// Restores durability up to the maximum. Returns the amount actually
    /// repaired. Destroyed parts stay destroyed.
    pub fn repair(&mut self, amount: u32) -> u32 {
        if self.is_destroyed() {
            return 0;
        }
        let healed = amount.min(self.durability.deficit());
        self.durability.current += healed;
        healed
    }

    /// Consumes one activation of a limited-use part.
    pub fn spend_use(&mut self) {
        if let Some(uses) = self.uses.as_mut() {
            *uses = uses.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rifle() -> Part {
        Part {
            slot: PartSlot::RightArm,
            kind: PartKind::Ranged,
            name: "Rifle".into(),
            power: 30,
            accuracy: 10,
            speed: 5,
            durability: ResourceMeter::at_max(40),
            uses: None,
            vital: false,
        }
    }

    #[test]
    fn damage_clamps_and_reports_destruction_once() {
        let mut part = rifle();
        assert!(!part.take_damage(39));
        assert!(part.take_damage(5));
        assert!(part.is_destroyed());
        // Second application on a destroyed part is a silent no-op.
        assert!(!part.take_damage(100));
        assert_eq!(part.durability.current, 0);
    }

    #[test]
    fn destroyed_parts_cannot_repair_or_act() {
        let mut part = rifle();
        part.take_damage(40);
        assert_eq!(part.repair(10), 0);
        assert!(!part.is_usable());
    }

    #[test]
    fn limited_uses_gate_usability() {
        let mut part = rifle();
        part.uses = Some(1);
        assert!(part.is_usable());
        part.spend_use();
        assert!(!part.is_usable());
        part.spend_use();
        assert_eq!(part.uses, Some(0));
    }
}
