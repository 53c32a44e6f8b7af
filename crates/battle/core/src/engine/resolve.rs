//! The resolution pipeline: declared action in, resolved outcome out.

use crate::action::{ActionSource, DeclaredAction};
use crate::combat::{
    Advantage, ResolvedAction, ResolvedKind, advantage, calculate_damage, calculate_heal,
    check_crit, check_hit, narrate,
};
use crate::env::{BattleEnv, compute_seed, draw};
use crate::state::{BattleOutcome, BattlePhase, CombatantId, PartKind, Side};

use super::{BattleEngine, BattleEvent, rewards};

/// Everything the offensive path needs to know about the acting source,
/// captured before any mutation so the whole resolution sees one snapshot.
struct AttackProfile {
    weapon: String,
    kind: PartKind,
    power: u32,
    accuracy: i32,
    is_force: bool,
    /// False when the acting part is destroyed or spent; resolves as an
    /// automatic miss rather than an error.
    usable: bool,
}

impl<'a> BattleEngine<'a> {
    /// Synthesizes and executes a machine combatant's turn inline.
    pub(super) fn run_machine_turn(&mut self, actor: CombatantId, env: &BattleEnv<'_>) {
        let action = crate::ai::synthesize(self.state, actor, env);
        self.execute(action, env);
    }

    /// Dispatches one declared action: gauge reset, resolution, log, event,
    /// battle-end check, and the presentation lock.
    ///
    /// The gauge resets here and only here; a filled gauge that was not
    /// dispatched keeps its charge for the next pass.
    pub(super) fn execute(&mut self, action: DeclaredAction, env: &BattleEnv<'_>) {
        if let Some(attacker) = self.state.roster.combatant_mut(action.attacker) {
            attacker.reset_gauge();
            attacker.set_defending(false);
        }
        self.state.nonce += 1;
        self.state.turn_count += 1;

        let outcome = self.resolve(&action, env);

        self.state
            .log
            .append(self.state.turn_count, outcome.narration.clone());
        self.events.push(BattleEvent::ActionResolved(outcome.clone()));

        // End check outranks resuming the scheduler.
        if self.state.roster.is_wiped(Side::Enemy) {
            self.finish(BattleOutcome::Victory, env);
        } else if self.state.roster.is_wiped(Side::Ally) {
            self.finish(BattleOutcome::Defeat, env);
        } else {
            let lock_ms = lock_duration(&outcome, env);
            self.set_phase(BattlePhase::Executing { lock_ms });
        }
    }

    /// Resolves a declaration against the current roster.
    ///
    /// The caller guarantees a living attacker and (for offensive actions)
    /// a living target; the one contract violation tolerated here is a
    /// destroyed acting part, which resolves as an automatic miss.
    fn resolve(&mut self, action: &DeclaredAction, env: &BattleEnv<'_>) -> ResolvedAction {
        let attacker_name = self
            .state
            .roster
            .combatant(action.attacker)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        if let ActionSource::Defend = action.source {
            if let Some(attacker) = self.state.roster.combatant_mut(action.attacker) {
                attacker.set_defending(true);
            }
            return ResolvedAction {
                attacker: action.attacker,
                target: action.attacker,
                kind: ResolvedKind::Defend,
                hit: true,
                critical: false,
                damage: 0,
                advantage: Advantage::Neutral,
                part_destroyed: false,
                target_knocked_out: false,
                heal: 0,
                narration: narrate::defend(&attacker_name),
            };
        }

        let profile = self.attack_profile(action);
        self.spend_source(action);

        let (target_name, target_evasion, target_defending, target_affinity) = {
            let target = self.state.roster.combatant(action.target);
            match target {
                Some(t) => (
                    t.name.clone(),
                    t.snapshot().evasion,
                    t.is_defending(),
                    t.medal.affinity,
                ),
                None => (String::new(), 0, false, Default::default()),
            }
        };

        let resolved_kind = match (profile.is_force, profile.kind) {
            (true, _) => ResolvedKind::Force,
            (false, PartKind::Support) => ResolvedKind::Support,
            _ => ResolvedKind::Attack,
        };

        // Support inverts the damage path: no hit test, no durability loss.
        // The outcome reports the computed heal; what lands is clamped by
        // the target's missing durability.
        if resolved_kind == ResolvedKind::Support {
            let heal = calculate_heal(profile.power);
            if let Some(target) = self.state.roster.combatant_mut(action.target) {
                target.apply_heal(heal);
            }
            return ResolvedAction {
                attacker: action.attacker,
                target: action.target,
                kind: ResolvedKind::Support,
                hit: true,
                critical: false,
                damage: 0,
                advantage: Advantage::Neutral,
                part_destroyed: false,
                target_knocked_out: false,
                heal,
                narration: narrate::support(&attacker_name, &profile.weapon, &target_name, heal),
            };
        }

        let hit_seed = compute_seed(
            self.state.battle_seed,
            self.state.nonce,
            action.attacker.0,
            draw::HIT,
        );
        let hit = profile.usable
            && check_hit(
                profile.accuracy,
                target_evasion,
                profile.is_force,
                env.rng().roll_percent(hit_seed),
                &env.tables().hit,
            );

        if !hit {
            return ResolvedAction {
                attacker: action.attacker,
                target: action.target,
                kind: resolved_kind,
                hit: false,
                critical: false,
                damage: 0,
                advantage: Advantage::Neutral,
                part_destroyed: false,
                target_knocked_out: false,
                heal: 0,
                narration: narrate::miss(&attacker_name, &profile.weapon, &target_name),
            };
        }

        let crit_seed = compute_seed(
            self.state.battle_seed,
            self.state.nonce,
            action.attacker.0,
            draw::CRIT,
        );
        let critical = check_crit(env.rng().roll_percent(crit_seed), &env.tables().hit);
        let matchup = advantage::classify(profile.kind, target_affinity);
        let damage = calculate_damage(
            profile.power,
            matchup,
            critical,
            target_defending,
            &env.tables().damage,
        );

        let (part_destroyed, target_knocked_out) = {
            match self.state.roster.combatant_mut(action.target) {
                Some(target) => {
                    let destroyed = target.apply_damage(action.target_slot, damage);
                    if target_defending {
                        // Defending shields exactly one resolution.
                        target.set_defending(false);
                    }
                    (destroyed, target.refresh_knockout())
                }
                None => (false, false),
            }
        };

        self.award_force(action, &profile, damage, env);

        ResolvedAction {
            attacker: action.attacker,
            target: action.target,
            kind: resolved_kind,
            hit: true,
            critical,
            damage,
            advantage: matchup,
            part_destroyed,
            target_knocked_out,
            heal: 0,
            narration: narrate::strike(
                &attacker_name,
                &profile.weapon,
                &target_name,
                action.target_slot,
                damage,
                critical,
                matchup,
                part_destroyed,
                target_knocked_out,
            ),
        }
    }

    /// Captures the acting source before any mutation.
    fn attack_profile(&self, action: &DeclaredAction) -> AttackProfile {
        let attacker = self.state.roster.combatant(action.attacker);

        match action.source {
            // Defend short-circuits before profiling; an inert profile keeps
            // this total without a panic path.
            ActionSource::Defend => AttackProfile {
                weapon: "guard".into(),
                kind: PartKind::Inert,
                power: 0,
                accuracy: 0,
                is_force: false,
                usable: false,
            },
            ActionSource::Part(slot) => {
                let part = attacker.and_then(|c| c.part(slot));
                match part {
                    Some(part) => AttackProfile {
                        weapon: part.name.clone(),
                        kind: part.kind,
                        power: part.power,
                        accuracy: part.accuracy,
                        is_force: false,
                        usable: part.is_usable(),
                    },
                    None => AttackProfile {
                        weapon: format!("{slot}"),
                        kind: PartKind::Inert,
                        power: 0,
                        accuracy: 0,
                        is_force: false,
                        usable: false,
                    },
                }
            }
            ActionSource::Force(index) => {
                let medal = attacker.map(|c| &c.medal);
                let technique = medal.and_then(|m| m.techniques.get(index));
                match technique {
                    Some(technique) => AttackProfile {
                        weapon: technique.name.clone(),
                        kind: technique.kind,
                        power: technique.power,
                        accuracy: 0,
                        is_force: true,
                        usable: medal.is_some_and(|m| m.force.is_full()),
                    },
                    None => AttackProfile {
                        weapon: "medaforce".into(),
                        kind: PartKind::Inert,
                        power: 0,
                        accuracy: 0,
                        is_force: true,
                        usable: false,
                    },
                }
            }
        }
    }

    /// Consumes the acting resource: one use for limited parts, the full
    /// medaforce gauge for techniques.
    fn spend_source(&mut self, action: &DeclaredAction) {
        let Some(attacker) = self.state.roster.combatant_mut(action.attacker) else {
            return;
        };
        match action.source {
            ActionSource::Part(slot) => {
                if let Some(part) = attacker.part_mut(slot) {
                    part.spend_use();
                }
            }
            ActionSource::Force(_) => attacker.medal.spend_force(),
            ActionSource::Defend => {}
        }
    }

    /// Medaforce accrual: part damage charges the attacker, taking damage
    /// charges the target. Technique damage never recharges its own user.
    fn award_force(
        &mut self,
        action: &DeclaredAction,
        profile: &AttackProfile,
        damage: u32,
        env: &BattleEnv<'_>,
    ) {
        if damage == 0 {
            return;
        }
        let force = env.tables().force;

        if !profile.is_force
            && let Some(attacker) = self.state.roster.combatant_mut(action.attacker)
        {
            attacker.medal.gain_force(damage * force.gain_dealt);
        }
        if let Some(target) = self.state.roster.combatant_mut(action.target)
            && !target.is_knocked_out()
        {
            target.medal.gain_force(damage * force.gain_taken);
        }
    }

    /// Enters `BattleOver` exactly once, granting rewards and emitting the
    /// terminal event.
    pub(super) fn finish(&mut self, outcome: BattleOutcome, env: &BattleEnv<'_>) {
        if self.state.phase.is_terminal() {
            return;
        }

        let rewards = rewards::compute(self.state, outcome, env);
        for ally in self.state.roster.allies.iter_mut() {
            ally.medal.gain_exp(rewards.medal_exp);
        }

        self.state.pending = None;
        self.state.log.append(
            self.state.turn_count,
            match outcome {
                BattleOutcome::Victory => "The opposing squad is down. Victory!",
                BattleOutcome::Defeat => "The squad has fallen. Defeat...",
            },
        );
        self.set_phase(BattlePhase::BattleOver { outcome });
        self.events.push(BattleEvent::BattleEnded { outcome, rewards });
    }
}

/// Lock duration by dramatic weight: a knockout holds the stage longer
/// than a whiff.
fn lock_duration(outcome: &ResolvedAction, env: &BattleEnv<'_>) -> u32 {
    let lock = env.tables().lock;
    if outcome.target_knocked_out {
        lock.knockout_ms
    } else if outcome.part_destroyed {
        lock.destroy_ms
    } else if outcome.kind == ResolvedKind::Defend {
        lock.defend_ms
    } else if outcome.hit {
        lock.hit_ms
    } else {
        lock.miss_ms
    }
}
