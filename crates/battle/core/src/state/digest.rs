//! Replay digest over the canonical battle state.
//!
//! Two sessions driven by the same seed and the same command stream must
//! reach byte-identical digests; integration tests and the runtime use this
//! to assert determinism without comparing whole state trees.

use sha2::{Digest, Sha256};

use super::BattleState;
use crate::state::types::{BattlePhase, CombatantState, PendingSource};

/// 32-byte commitment to a battle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateDigest(pub [u8; 32]);

impl StateDigest {
    pub fn to_hex(self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl BattleState {
    /// Computes the digest by feeding every replay-relevant field to the
    /// hasher in a fixed order. Field order here is part of the format:
    /// changing it invalidates recorded digests.
    pub fn digest(&self) -> StateDigest {
        let mut hasher = Sha256::new();

        hasher.update(self.battle_seed.to_le_bytes());
        hasher.update(self.nonce.to_le_bytes());
        hasher.update(self.clock_ms.to_le_bytes());
        hasher.update(self.turn_count.to_le_bytes());
        hash_phase(&mut hasher, &self.phase);

        for combatant in self.roster.all() {
            hash_combatant(&mut hasher, combatant);
        }

        if let Some(pending) = &self.pending {
            hasher.update([1u8]);
            hasher.update(pending.combatant.0.to_le_bytes());
            match pending.source {
                None => hasher.update([0u8]),
                Some(PendingSource::Part(slot)) => {
                    hasher.update([1u8, slot.index() as u8]);
                }
                Some(PendingSource::Force(index)) => {
                    hasher.update([2u8, index as u8]);
                }
            }
            hasher.update((pending.target_index as u32).to_le_bytes());
            hasher.update([pending.target_slot.index() as u8]);
        } else {
            hasher.update([0u8]);
        }

        for entry in self.log.entries() {
            hasher.update(entry.turn.to_le_bytes());
            hasher.update((entry.text.len() as u32).to_le_bytes());
            hasher.update(entry.text.as_bytes());
        }

        StateDigest(hasher.finalize().into())
    }
}

fn hash_phase(hasher: &mut Sha256, phase: &BattlePhase) {
    match phase {
        BattlePhase::Charging => hasher.update([0u8]),
        BattlePhase::ActionMenu => hasher.update([1u8]),
        BattlePhase::PartSelect => hasher.update([2u8]),
        BattlePhase::TargetSelect => hasher.update([3u8]),
        BattlePhase::Executing { lock_ms } => {
            hasher.update([4u8]);
            hasher.update(lock_ms.to_le_bytes());
        }
        BattlePhase::BattleOver { outcome } => {
            hasher.update([5u8, *outcome as u8]);
        }
    }
}

fn hash_combatant(hasher: &mut Sha256, combatant: &CombatantState) {
    hasher.update(combatant.id.0.to_le_bytes());
    hasher.update(combatant.gauge.0.to_le_bytes());
    hasher.update([combatant.flags.bits()]);
    hasher.update(combatant.medal.exp.to_le_bytes());
    hasher.update([combatant.medal.level]);
    hasher.update(combatant.medal.force.0.to_le_bytes());

    for slot in combatant.parts.iter() {
        match slot {
            Some(part) => {
                hasher.update([1u8]);
                hasher.update(part.durability.current.to_le_bytes());
                hasher.update(part.durability.maximum.to_le_bytes());
                hasher.update([part.uses.unwrap_or(u8::MAX)]);
            }
            None => hasher.update([0u8]),
        }
    }
}
