//! Combatant state and its mutation primitives.

use bitflags::bitflags;

use super::common::{CombatantId, Gauge, Side};
use super::medal::Medal;
use super::part::{Part, PartSlot};
use crate::stats::StatsSnapshot;

bitflags! {
    /// Transient per-battle status bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CombatantFlags: u8 {
        /// Halves the next incoming damage resolution.
        const DEFENDING   = 1 << 0;
        /// Terminal: never scheduled or targeted again this battle.
        const KNOCKED_OUT = 1 << 1;
    }
}

/// A fighting unit: four-slot loadout, medal, and charge gauge.
///
/// Battle-scoped: created from the roster when a session starts, mutated in
/// place by resolutions, and summarized back to the roster when it ends.
/// Only the engine mutates a combatant once the battle is running.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub id: CombatantId,
    pub name: String,
    pub side: Side,
    /// Slot-indexed loadout. `None` means the slot was empty from the start.
    pub parts: [Option<Part>; PartSlot::COUNT],
    pub medal: Medal,
    pub gauge: Gauge,
    pub flags: CombatantFlags,
}

impl CombatantState {
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        side: Side,
        parts: [Option<Part>; PartSlot::COUNT],
        medal: Medal,
    ) -> Self {
        let mut combatant = Self {
            id,
            name: name.into(),
            side,
            parts,
            medal,
            gauge: Gauge::EMPTY,
            flags: CombatantFlags::empty(),
        };
        combatant.refresh_knockout();
        combatant
    }

    pub fn part(&self, slot: PartSlot) -> Option<&Part> {
        self.parts[slot.index()].as_ref()
    }

    pub fn part_mut(&mut self, slot: PartSlot) -> Option<&mut Part> {
        self.parts[slot.index()].as_mut()
    }

    /// Iterates the parts actually equipped, destroyed or not.
    pub fn equipped_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter().flatten()
    }

    /// Derived stats over the current loadout.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot::compute(self.equipped_parts())
    }

    #[inline]
    pub fn is_knocked_out(&self) -> bool {
        self.flags.contains(CombatantFlags::KNOCKED_OUT)
    }

    #[inline]
    pub fn is_defending(&self) -> bool {
        self.flags.contains(CombatantFlags::DEFENDING)
    }

    /// Sum of remaining durability across all parts. The AI's finish-off
    /// heuristic ranks targets by this.
    pub fn aggregate_durability(&self) -> u32 {
        self.equipped_parts()
            .map(|part| part.durability.current)
            .sum()
    }

    /// Applies damage to one slot's durability.
    ///
    /// Returns `true` only when this application destroyed the part.
    /// Targeting an empty or already-destroyed slot is a silent no-op that
    /// reports `false`; it never errors.
    pub fn apply_damage(&mut self, slot: PartSlot, amount: u32) -> bool {
        match self.part_mut(slot) {
            Some(part) => part.take_damage(amount),
            None => false,
        }
    }

    /// Repairs the most damaged surviving part. Returns the amount healed.
    pub fn apply_heal(&mut self, amount: u32) -> u32 {
        let target = self
            .parts
            .iter_mut()
            .flatten()
            .filter(|part| !part.is_destroyed())
            .max_by_key(|part| part.durability.deficit());

        match target {
            Some(part) => part.repair(amount),
            None => 0,
        }
    }

    /// Restores `numerator/denominator` of every surviving part's missing
    /// durability. Used when battle results are folded back into the roster.
    pub fn restore(&mut self, numerator: u32, denominator: u32) {
        debug_assert!(denominator > 0);
        for part in self.parts.iter_mut().flatten() {
            if !part.is_destroyed() {
                let amount = part.durability.deficit() * numerator / denominator;
                part.repair(amount);
            }
        }
    }

    pub fn reset_gauge(&mut self) {
        self.gauge.reset();
    }

    pub fn set_defending(&mut self, defending: bool) {
        self.flags.set(CombatantFlags::DEFENDING, defending);
    }

    /// Re-evaluates the knockout invariant: every slot destroyed or absent,
    /// or any destroyed part carrying the vital designation.
    ///
    /// Returns `true` when this call newly knocked the combatant out.
    /// Knockout is terminal; the flag is never cleared mid-battle.
    pub fn refresh_knockout(&mut self) -> bool {
        if self.is_knocked_out() {
            return false;
        }

        let vital_destroyed = self
            .equipped_parts()
            .any(|part| part.vital && part.is_destroyed());
        let all_gone = self.equipped_parts().all(|part| part.is_destroyed());

        if vital_destroyed || all_gone {
            self.flags.insert(CombatantFlags::KNOCKED_OUT);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MedalAffinity, PartKind, ResourceMeter};

    fn basic_part(slot: PartSlot, vital: bool) -> Part {
        Part {
            slot,
            kind: PartKind::Melee,
            name: format!("{slot}"),
            power: 20,
            accuracy: 5,
            speed: 3,
            durability: ResourceMeter::at_max(30),
            uses: None,
            vital,
        }
    }

    fn combatant() -> CombatantState {
        CombatantState::new(
            CombatantId(0),
            "Testbot",
            Side::Ally,
            [
                Some(basic_part(PartSlot::Head, true)),
                Some(basic_part(PartSlot::RightArm, false)),
                Some(basic_part(PartSlot::LeftArm, false)),
                Some(basic_part(PartSlot::Legs, false)),
            ],
            Medal {
                name: "Beetle".into(),
                affinity: MedalAffinity::Melee,
                exp: 0,
                level: 1,
                force: Gauge::EMPTY,
                techniques: Default::default(),
            },
        )
    }

    #[test]
    fn vital_head_destruction_is_a_knockout() {
        let mut unit = combatant();
        assert!(unit.apply_damage(PartSlot::Head, 30));
        assert!(unit.refresh_knockout());
        assert!(unit.is_knocked_out());
        // Re-checking does not report a second knockout.
        assert!(!unit.refresh_knockout());
    }

    #[test]
    fn damage_on_destroyed_slot_reports_false_again() {
        let mut unit = combatant();
        assert!(unit.apply_damage(PartSlot::RightArm, 30));
        assert!(!unit.apply_damage(PartSlot::RightArm, 30));
        assert!(!unit.refresh_knockout());
    }

    #[test]
    fn all_parts_destroyed_is_a_knockout() {
        let mut unit = combatant();
        for slot in [PartSlot::RightArm, PartSlot::LeftArm, PartSlot::Legs] {
            unit.apply_damage(slot, 30);
            assert!(!unit.refresh_knockout());
        }
        unit.apply_damage(PartSlot::Head, 30);
        assert!(unit.refresh_knockout());
    }

    #[test]
    fn heal_picks_the_most_damaged_surviving_part() {
        let mut unit = combatant();
        unit.apply_damage(PartSlot::LeftArm, 12);
        unit.apply_damage(PartSlot::Legs, 25);
        assert_eq!(unit.apply_heal(10), 10);
        assert_eq!(
            unit.part(PartSlot::Legs).unwrap().durability.current,
            15,
            "legs were the most damaged pool"
        );
    }

    #[test]
    fn restore_skips_destroyed_parts() {
        let mut unit = combatant();
        unit.apply_damage(PartSlot::RightArm, 30);
        unit.apply_damage(PartSlot::Legs, 20);
        unit.restore(1, 2);
        assert_eq!(unit.part(PartSlot::RightArm).unwrap().durability.current, 0);
        assert_eq!(unit.part(PartSlot::Legs).unwrap().durability.current, 20);
    }
}
