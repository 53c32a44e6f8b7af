//! Player command surface.
//!
//! Each command is only meaningful in its matching selection phase; calls
//! arriving in any other phase are silent no-ops, because the UI is
//! expected to present only valid choices and stale input must never wedge
//! the battle. Selection indices are re-clamped against the live candidate
//! list on every use.

use crate::action::{ActionSource, DeclaredAction};
use crate::env::BattleEnv;
use crate::state::{BattlePhase, CombatantId, PartKind, PartSlot, PendingSource};

use super::BattleEngine;

impl<'a> BattleEngine<'a> {
    /// Picks the acting part. Valid in `ActionMenu` and `PartSelect`;
    /// destroyed, spent, and inert parts are refused silently.
    pub fn select_offensive_part(&mut self, slot: PartSlot) {
        if !matches!(
            self.state.phase,
            BattlePhase::ActionMenu | BattlePhase::PartSelect
        ) {
            return;
        }
        let Some(combatant) = self.state.awaiting() else {
            return;
        };
        let usable = self
            .state
            .roster
            .combatant(combatant)
            .and_then(|c| c.part(slot))
            .is_some_and(|part| part.is_usable());
        if !usable {
            return;
        }

        if let Some(pending) = self.state.pending.as_mut() {
            pending.source = Some(PendingSource::Part(slot));
            pending.target_index = 0;
        }
        self.set_phase(BattlePhase::TargetSelect);
    }

    /// Declares the medaforce technique instead of a part. Valid in
    /// `ActionMenu` while the medal's gauge is full.
    pub fn confirm_force(&mut self) {
        if self.state.phase != BattlePhase::ActionMenu {
            return;
        }
        let Some(combatant) = self.state.awaiting() else {
            return;
        };
        let technique = self
            .state
            .roster
            .combatant(combatant)
            .and_then(|c| c.medal.ready_technique().map(|(index, _)| index));
        let Some(index) = technique else {
            return;
        };

        if let Some(pending) = self.state.pending.as_mut() {
            pending.source = Some(PendingSource::Force(index));
            pending.target_index = 0;
        }
        self.set_phase(BattlePhase::TargetSelect);
    }

    /// Picks the target combatant by index into the current candidate
    /// list. Valid in `TargetSelect`; out-of-range indices clamp.
    pub fn select_target_combatant(&mut self, index: usize) {
        if self.state.phase != BattlePhase::TargetSelect {
            return;
        }
        let len = self.candidate_targets().len();
        if let Some(pending) = self.state.pending.as_mut() {
            pending.target_index = if len == 0 { 0 } else { index.min(len - 1) };
        }
    }

    /// Picks the targeted part slot. Valid in `TargetSelect`. A destroyed
    /// slot is a legal (no-op) target, so any slot is accepted.
    pub fn select_target_part(&mut self, slot: PartSlot) {
        if self.state.phase != BattlePhase::TargetSelect {
            return;
        }
        if let Some(pending) = self.state.pending.as_mut() {
            pending.target_slot = slot;
        }
    }

    /// Steps back one selection phase: `TargetSelect → PartSelect →
    /// ActionMenu`. The top level has nowhere further back to go.
    pub fn cancel_selection(&mut self) {
        match self.state.phase {
            BattlePhase::TargetSelect => self.set_phase(BattlePhase::PartSelect),
            BattlePhase::PartSelect => {
                if let Some(pending) = self.state.pending.as_mut() {
                    pending.source = None;
                }
                self.set_phase(BattlePhase::ActionMenu);
            }
            _ => {}
        }
    }

    /// Commits the assembled declaration. Valid in `TargetSelect` with a
    /// source picked; dispatches through the same pipeline as AI turns.
    pub fn confirm_action(&mut self, env: &BattleEnv<'_>) {
        if self.state.phase != BattlePhase::TargetSelect {
            return;
        }
        let Some(action) = self.build_declaration(env) else {
            return;
        };
        self.state.pending = None;
        self.execute(action, env);
    }

    /// Declares defend from the action menu, skipping targeting entirely.
    pub fn confirm_defend(&mut self, env: &BattleEnv<'_>) {
        if !matches!(
            self.state.phase,
            BattlePhase::ActionMenu | BattlePhase::PartSelect
        ) {
            return;
        }
        let Some(pending) = self.state.pending.take() else {
            return;
        };
        let priority = self
            .state
            .roster
            .combatant(pending.combatant)
            .map(|c| c.snapshot().effective_speed())
            .unwrap_or(1);
        self.execute(DeclaredAction::defend(pending.combatant, priority), env);
    }

    /// Candidate targets for the pending selection: living allies for a
    /// support part, living opponents otherwise. Order is roster order, so
    /// indices shown by the UI stay stable while the list is unchanged.
    pub fn candidate_targets(&self) -> Vec<CombatantId> {
        let Some(pending) = self.state.pending.as_ref() else {
            return Vec::new();
        };
        let Some(attacker) = self.state.roster.combatant(pending.combatant) else {
            return Vec::new();
        };

        let support = matches!(
            pending.source,
            Some(PendingSource::Part(slot))
                if attacker.part(slot).is_some_and(|p| p.kind == PartKind::Support)
        );
        let side = if support {
            attacker.side
        } else {
            attacker.side.opponent()
        };

        self.state.roster.living(side).map(|c| c.id).collect()
    }

    /// Builds the declaration from the pending scratchpad, re-validating
    /// every reference against the live roster. Returns `None` when the
    /// selection is incomplete or no longer legal.
    fn build_declaration(&self, env: &BattleEnv<'_>) -> Option<DeclaredAction> {
        let pending = self.state.pending.as_ref()?;
        let source = pending.source?;
        let attacker = self.state.roster.combatant(pending.combatant)?;

        let candidates = self.candidate_targets();
        let target = *candidates
            .get(pending.target_index.min(candidates.len().saturating_sub(1)))?;

        let speed = attacker.snapshot().effective_speed();
        let (source, priority) = match source {
            PendingSource::Part(slot) => {
                attacker.part(slot).filter(|p| p.is_usable())?;
                (ActionSource::Part(slot), speed)
            }
            PendingSource::Force(index) => {
                let (ready, _) = attacker.medal.ready_technique()?;
                if ready != index {
                    return None;
                }
                (
                    ActionSource::Force(index),
                    speed + env.tables().force.priority_bonus,
                )
            }
        };

        Some(DeclaredAction {
            attacker: pending.combatant,
            source,
            target,
            target_slot: pending.target_slot,
            priority,
        })
    }
}
