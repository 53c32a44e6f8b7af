//! Aggregate state for both squads.
//!
//! Combatants are id-addressed entries owned by the session; everything else
//! (engine, AI, resolver) works through lookups here rather than holding
//! references, which keeps simultaneous synthesis and resolution free of
//! aliasing.

use bounded_vector::BoundedVec;

use super::combatant::CombatantState;
use super::common::{CombatantId, Side};
use crate::config::BattleConfig;

/// The two squads of a battle session.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterState {
    pub allies: BoundedVec<CombatantState, 0, { BattleConfig::MAX_SQUAD }>,
    pub enemies: BoundedVec<CombatantState, 0, { BattleConfig::MAX_SQUAD }>,
}

impl RosterState {
    /// Returns a reference to a combatant by ID, either squad.
    pub fn combatant(&self, id: CombatantId) -> Option<&CombatantState> {
        self.all().find(|c| c.id == id)
    }

    /// Returns a mutable reference to a combatant by ID, either squad.
    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut CombatantState> {
        self.allies
            .iter_mut()
            .chain(self.enemies.iter_mut())
            .find(|c| c.id == id)
    }

    /// Iterates every combatant, allies first.
    pub fn all(&self) -> impl Iterator<Item = &CombatantState> {
        self.allies.iter().chain(self.enemies.iter())
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut CombatantState> {
        self.allies.iter_mut().chain(self.enemies.iter_mut())
    }

    /// Iterates the combatants on one side that are still standing.
    pub fn living(&self, side: Side) -> impl Iterator<Item = &CombatantState> {
        self.side(side).iter().filter(|c| !c.is_knocked_out())
    }

    pub fn side(&self, side: Side) -> &BoundedVec<CombatantState, 0, { BattleConfig::MAX_SQUAD }> {
        match side {
            Side::Ally => &self.allies,
            Side::Enemy => &self.enemies,
        }
    }

    /// True when every combatant on `side` is knocked out.
    pub fn is_wiped(&self, side: Side) -> bool {
        self.living(side).next().is_none()
    }
}
