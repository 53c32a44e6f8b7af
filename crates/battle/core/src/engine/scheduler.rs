//! Charge gauge scheduling.

use crate::env::BattleEnv;
use crate::state::{CombatantId, Side};

use super::BattleEngine;

impl<'a> BattleEngine<'a> {
    /// Advances every living combatant's gauge for one tick.
    ///
    /// Gain is `max(1, effective_speed) × rate_num × delta_ms / rate_den`
    /// gauge points, saturating at full. Knocked-out combatants never
    /// charge; filled gauges hold at full until dispatch resets them.
    pub(super) fn advance_gauges(&mut self, delta_ms: u32, env: &BattleEnv<'_>) {
        let rate = env.tables().gauge;

        for combatant in self.state.roster.all_mut() {
            if combatant.is_knocked_out() {
                continue;
            }
            let speed = combatant.snapshot().effective_speed() as u64;
            let gain = speed * u64::from(rate.rate_num) * u64::from(delta_ms)
                / u64::from(rate.rate_den);
            combatant.gauge.charge(gain.min(u64::from(u32::MAX)) as u32);
        }
    }

    /// Picks the single combatant to dispatch this pass, if any gauge is
    /// full.
    ///
    /// Ranking among the ready set: effective speed descending, opponents
    /// before allies on exact speed ties, then id ascending so the order is
    /// a strict total order. Everyone not picked stays at full and is
    /// re-evaluated on the next charging pass.
    pub(super) fn select_ready(&self) -> Option<CombatantId> {
        self.state
            .roster
            .all()
            .filter(|c| !c.is_knocked_out() && c.gauge.is_full())
            .max_by_key(|c| {
                (
                    c.snapshot().effective_speed(),
                    c.side == Side::Enemy,
                    std::cmp::Reverse(c.id),
                )
            })
            .map(|c| c.id)
    }
}
