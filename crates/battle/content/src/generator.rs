//! Opponent squad generation.
//!
//! The battle engine never generates its own opposition; it receives a
//! materialized squad at session start. This generator is that external
//! collaborator: given a floor index and a seed, it assembles an enemy
//! squad from template bands and scales it to the floor's difficulty.
//! Generation is deterministic: the same floor and seed always produce
//! the same squad, which keeps whole runs replayable.

use battle_core::{CombatantState, PcgRng, RngOracle, compute_seed};

use crate::specs::CombatantSpec;

/// Templates eligible from a given floor onward.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorBand {
    /// First floor (inclusive) this band applies to.
    pub min_floor: u32,
    pub templates: Vec<CombatantSpec>,
}

/// Deterministic enemy-squad generator.
#[derive(Clone, Debug)]
pub struct OpponentGenerator {
    bands: Vec<FloorBand>,
}

impl OpponentGenerator {
    /// Builds a generator from template bands. Bands are sorted by
    /// `min_floor` so lookup takes the deepest band that applies.
    pub fn new(mut bands: Vec<FloorBand>) -> Self {
        bands.sort_by_key(|band| band.min_floor);
        Self { bands }
    }

    /// Squad size grows with depth: one opponent on the first floors, the
    /// full squad of three from floor 6.
    fn squad_size(floor: u32) -> usize {
        (1 + floor / 3).min(battle_core::BattleConfig::MAX_SQUAD as u32) as usize
    }

    /// Generates the opposing squad for `floor`.
    ///
    /// Returns an empty vec only when the generator has no band covering
    /// the floor, which means the catalog itself is broken; callers treat
    /// that as a content error.
    pub fn generate(&self, floor: u32, seed: u64) -> Vec<CombatantState> {
        let Some(band) = self
            .bands
            .iter()
            .rev()
            .find(|band| band.min_floor <= floor)
        else {
            return Vec::new();
        };
        if band.templates.is_empty() {
            return Vec::new();
        }

        let rng = PcgRng;
        (0..Self::squad_size(floor))
            .map(|slot| {
                let pick_seed = compute_seed(seed, floor as u64, slot as u32, 0);
                let template = &band.templates[rng.pick_index(pick_seed, band.templates.len())];
                let mut combatant = template.materialize();
                scale_to_floor(&mut combatant, floor);
                combatant
            })
            .collect()
    }
}

/// Deep floors field tougher copies of the same templates: +8% durability
/// and +5% power per floor past the band's baseline, integer-rounded.
fn scale_to_floor(combatant: &mut CombatantState, floor: u32) {
    if floor == 0 {
        return;
    }
    for part in combatant.parts.iter_mut().flatten() {
        let durability = part.durability.maximum * (100 + 8 * floor) / 100;
        part.durability = battle_core::ResourceMeter::at_max(durability);
        part.power = part.power * (100 + 5 * floor) / 100;
    }
    combatant.medal.level = combatant.medal.level.saturating_add((floor / 2) as u8);
}
