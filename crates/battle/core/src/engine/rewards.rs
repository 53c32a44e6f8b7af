//! End-of-battle reward summary.

use crate::env::{BattleEnv, compute_seed, draw};
use crate::state::{BattleOutcome, BattleState, Side};

/// Summary produced when a session reaches `BattleOver`.
///
/// Carried on the battle-ended event; the roster write-back applies the
/// medal experience, the rest is the caller's business (shop currency,
/// salvage inventory).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleRewards {
    /// Experience granted to every ally medal.
    pub medal_exp: u32,
    /// Scrap currency earned.
    pub scrap: u32,
    /// Name of one salvaged enemy part, when anything was destroyed.
    pub salvage: Option<String>,
}

/// Computes the reward summary for a finished battle.
///
/// Victory pays per defeated enemy plus a pace bonus for quick fights;
/// defeat pays a flat consolation so a lost run still grows the medals.
pub(super) fn compute(
    state: &BattleState,
    outcome: BattleOutcome,
    env: &BattleEnv<'_>,
) -> BattleRewards {
    match outcome {
        BattleOutcome::Defeat => BattleRewards {
            medal_exp: 10,
            scrap: 0,
            salvage: None,
        },
        BattleOutcome::Victory => {
            let enemies = state.roster.side(Side::Enemy);
            let level_sum: u32 = enemies.iter().map(|c| c.medal.level as u32).sum();

            let pace_bonus = if state.turn_count < 12 { 20 } else { 0 };
            let medal_exp = 40 * enemies.len() as u32 + 10 * level_sum + pace_bonus;
            let scrap = 120 * level_sum;

            BattleRewards {
                medal_exp,
                scrap,
                salvage: pick_salvage(state, env),
            }
        }
    }
}

/// Seeded pick among the destroyed enemy parts.
fn pick_salvage(state: &BattleState, env: &BattleEnv<'_>) -> Option<String> {
    let wrecked: Vec<&str> = state
        .roster
        .side(Side::Enemy)
        .iter()
        .flat_map(|c| c.equipped_parts())
        .filter(|part| part.is_destroyed())
        .map(|part| part.name.as_str())
        .collect();

    if wrecked.is_empty() {
        return None;
    }

    let seed = compute_seed(state.battle_seed, state.nonce, 0, draw::LOOT);
    let index = env.rng().pick_index(seed, wrecked.len());
    wrecked.get(index).map(|name| (*name).to_string())
}
