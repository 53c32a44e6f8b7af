//! Action synthesis for machine-controlled combatants.
//!
//! Pure and deterministic: the same battle state and seed always synthesize
//! the same declaration. Policy, in order of preference:
//!
//! 1. A charged medaforce technique.
//! 2. The usable offensive part with the highest expected damage against
//!    the chosen target.
//! 3. Defend, when no offensive part is legal.
//!
//! Target selection is a finish-off heuristic: the living opponent with the
//! lowest aggregate remaining durability, with exact ties broken by a
//! seeded draw so replays stay stable.

use crate::action::{ActionSource, DeclaredAction};
use crate::combat::{advantage, hit};
use crate::env::{BattleEnv, compute_seed, draw};
use crate::state::{BattleState, CombatantId, CombatantState, Part, PartSlot};

/// Synthesizes a declaration for `actor`.
///
/// Never references a knocked-out target or a destroyed part. Callers must
/// only invoke this while at least one opponent is living; the engine's
/// battle-end check guarantees that.
pub fn synthesize(state: &BattleState, actor: CombatantId, env: &BattleEnv<'_>) -> DeclaredAction {
    let Some(attacker) = state.roster.combatant(actor) else {
        // Unknown actor: structurally unreachable, but a defend declaration
        // keeps the scheduler moving rather than wedging the battle.
        return DeclaredAction::defend(actor, 1);
    };

    let speed = attacker.snapshot().effective_speed();
    let tables = env.tables();

    let Some(target) = select_target(state, attacker, env) else {
        return DeclaredAction::defend(actor, speed);
    };

    // Medaforce first: a charged technique outdamages any part.
    if let Some((index, _)) = attacker.medal.ready_technique() {
        return DeclaredAction {
            attacker: actor,
            source: ActionSource::Force(index),
            target: target.id,
            target_slot: select_target_slot(target),
            priority: speed + tables.force.priority_bonus,
        };
    }

    let evasion = target.snapshot().evasion;
    let best_part = attacker
        .equipped_parts()
        .filter(|part| part.is_usable() && part.kind.is_offensive())
        .max_by_key(|part| (expected_damage(part, target, evasion, env), part.slot.index()));

    match best_part {
        Some(part) => DeclaredAction {
            attacker: actor,
            source: ActionSource::Part(part.slot),
            target: target.id,
            target_slot: select_target_slot(target),
            priority: speed,
        },
        None => DeclaredAction::defend(actor, speed),
    }
}

/// Expected damage of `part` against `target`, in damage points scaled by
/// hit probability. Uses the same hit and advantage math as the resolver so
/// the AI's ranking matches what would actually land.
fn expected_damage(part: &Part, target: &CombatantState, evasion: i32, env: &BattleEnv<'_>) -> u32 {
    let tables = env.tables();
    let chance = hit::hit_chance(part.accuracy, evasion, false, &tables.hit);
    let matchup = advantage::classify(part.kind, target.medal.affinity);
    let scaled = advantage::scale(part.power, matchup, &tables.damage);
    scaled * chance / 100
}

/// Lowest aggregate durability among living opponents; seeded uniform draw
/// among exact ties.
fn select_target<'a>(
    state: &'a BattleState,
    attacker: &CombatantState,
    env: &BattleEnv<'_>,
) -> Option<&'a CombatantState> {
    let opponents: Vec<&CombatantState> = state
        .roster
        .living(attacker.side.opponent())
        .collect();

    let weakest = opponents
        .iter()
        .map(|c| c.aggregate_durability())
        .min()?;

    let tied: Vec<&CombatantState> = opponents
        .into_iter()
        .filter(|c| c.aggregate_durability() == weakest)
        .collect();

    if tied.len() == 1 {
        return tied.into_iter().next();
    }

    let seed = compute_seed(
        state.battle_seed,
        state.nonce,
        attacker.id.0,
        draw::AI_TARGET,
    );
    let index = env.rng().pick_index(seed, tied.len());
    tied.into_iter().nth(index)
}

/// Aim at the target's weakest surviving part to finish it off; destroyed
/// and empty slots are never selected.
fn select_target_slot(target: &CombatantState) -> PartSlot {
    target
        .equipped_parts()
        .filter(|part| !part.is_destroyed())
        .min_by_key(|part| (part.durability.current, part.slot.index()))
        .map(|part| part.slot)
        .unwrap_or(PartSlot::Head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CombatTables, PcgRng};
    use crate::state::types::*;

    fn part(slot: PartSlot, kind: PartKind, power: u32, durability: u32) -> Option<Part> {
        Some(Part {
            slot,
            kind,
            name: format!("{slot}"),
            power,
            accuracy: 10,
            speed: 3,
            durability: ResourceMeter::at_max(durability),
            uses: None,
            vital: slot == PartSlot::Head,
        })
    }

    fn unit(name: &str, arm_power: u32) -> CombatantState {
        CombatantState::new(
            CombatantId(0),
            name,
            Side::Ally,
            [
                part(PartSlot::Head, PartKind::Inert, 0, 30),
                part(PartSlot::RightArm, PartKind::Ranged, arm_power, 30),
                part(PartSlot::LeftArm, PartKind::Melee, arm_power / 2, 30),
                part(PartSlot::Legs, PartKind::Inert, 0, 30),
            ],
            Medal {
                name: "Test".into(),
                affinity: MedalAffinity::Melee,
                exp: 0,
                level: 1,
                force: Gauge::EMPTY,
                techniques: Default::default(),
            },
        )
    }

    fn battle() -> BattleState {
        BattleState::new(
            11,
            vec![unit("ally-a", 30), unit("ally-b", 30)],
            vec![unit("foe", 30)],
        )
        .unwrap()
    }

    #[test]
    fn picks_the_highest_expected_damage_part() {
        let state = battle();
        let tables = CombatTables::default();
        let env = BattleEnv::new(&tables, &PcgRng);

        let action = synthesize(&state, CombatantId(2), &env);
        assert_eq!(action.source, ActionSource::Part(PartSlot::RightArm));
        assert!(!matches!(action.source, ActionSource::Defend));
    }

    #[test]
    fn targets_the_weakest_opponent() {
        let mut state = battle();
        state
            .roster
            .combatant_mut(CombatantId(1))
            .unwrap()
            .apply_damage(PartSlot::Legs, 25);
        let tables = CombatTables::default();
        let env = BattleEnv::new(&tables, &PcgRng);

        let action = synthesize(&state, CombatantId(2), &env);
        assert_eq!(action.target, CombatantId(1));
        // Finish-off aim: the battered legs are the weakest surviving part.
        assert_eq!(action.target_slot, PartSlot::Legs);
    }

    #[test]
    fn defends_when_every_weapon_is_wrecked() {
        let mut state = battle();
        {
            let foe = state.roster.combatant_mut(CombatantId(2)).unwrap();
            foe.apply_damage(PartSlot::RightArm, 30);
            foe.apply_damage(PartSlot::LeftArm, 30);
        }
        let tables = CombatTables::default();
        let env = BattleEnv::new(&tables, &PcgRng);

        let action = synthesize(&state, CombatantId(2), &env);
        assert_eq!(action.source, ActionSource::Defend);
        assert_eq!(action.target, CombatantId(2));
    }

    #[test]
    fn charged_force_takes_precedence() {
        let mut state = battle();
        {
            let foe = state.roster.combatant_mut(CombatantId(2)).unwrap();
            foe.medal.techniques.push(ForceTechnique {
                name: "Overdrive".into(),
                kind: PartKind::Ranged,
                power: 80,
                unlock_level: 1,
            });
            foe.medal.gain_force(Gauge::FULL.0);
        }
        let tables = CombatTables::default();
        let env = BattleEnv::new(&tables, &PcgRng);

        let action = synthesize(&state, CombatantId(2), &env);
        assert_eq!(action.source, ActionSource::Force(0));
        assert_eq!(
            action.priority,
            state
                .roster
                .combatant(CombatantId(2))
                .unwrap()
                .snapshot()
                .effective_speed()
                + tables.force.priority_bonus
        );
    }
}
