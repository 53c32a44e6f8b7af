use battle_core::{
    BattleEngine, BattleEnv, BattleEvent, BattleOutcome, BattlePhase, BattleState, CombatTables,
    CombatantId, CombatantState, Gauge, HitParams, Medal, MedalAffinity, Part, PartKind, PartSlot,
    PcgRng, ResolvedKind, ResourceMeter, Side,
};

fn sure_hit_tables() -> CombatTables {
    CombatTables {
        hit: HitParams {
            base: 100,
            min: 100,
            max: 100,
            force_floor: 100,
            crit_chance: 0,
        },
        ..Default::default()
    }
}

fn sure_miss_tables() -> CombatTables {
    CombatTables {
        hit: HitParams {
            base: -1000,
            min: 0,
            max: 0,
            force_floor: 0,
            crit_chance: 0,
        },
        ..Default::default()
    }
}

fn part(slot: PartSlot, kind: PartKind, power: u32, speed: i32, durability: u32, vital: bool) -> Option<Part> {
    Some(Part {
        slot,
        kind,
        name: format!("{slot}"),
        power,
        accuracy: 0,
        speed,
        durability: ResourceMeter::at_max(durability),
        uses: None,
        vital,
    })
}

/// Ranged-affinity medal against ranged arms keeps every matchup neutral,
/// so damage numbers in these tests are exactly part power.
fn unit(name: &str, speed: i32, power: u32, durability: u32) -> CombatantState {
    CombatantState::new(
        CombatantId(0),
        name,
        Side::Ally,
        [
            part(PartSlot::Head, PartKind::Inert, 0, 0, durability, true),
            part(PartSlot::RightArm, PartKind::Ranged, power, 0, durability, false),
            part(PartSlot::LeftArm, PartKind::Ranged, power / 2, 0, durability, false),
            part(PartSlot::Legs, PartKind::Inert, 0, speed, durability, false),
        ],
        Medal {
            name: "Test".into(),
            affinity: MedalAffinity::Ranged,
            exp: 0,
            level: 1,
            force: Gauge::EMPTY,
            techniques: Default::default(),
        },
    )
}

/// Drives ticks until the ally is parked in the action menu.
fn run_to_menu(engine: &mut BattleEngine<'_>, env: &BattleEnv<'_>) {
    for _ in 0..100_000 {
        match engine.state().phase {
            BattlePhase::ActionMenu => return,
            BattlePhase::BattleOver { .. } => panic!("battle ended before the menu"),
            _ => engine.tick(50, env),
        }
    }
    panic!("ally never became ready");
}

fn resolved_events(events: Vec<BattleEvent>) -> Vec<battle_core::ResolvedAction> {
    events
        .into_iter()
        .filter_map(|event| match event {
            BattleEvent::ActionResolved(outcome) => Some(outcome),
            _ => None,
        })
        .collect()
}

#[test]
fn a_miss_never_mutates_the_target() {
    let tables = sure_miss_tables();
    let env = BattleEnv::new(&tables, &PcgRng);
    // Target head has 1 durability: any applied damage would destroy it.
    let mut state =
        BattleState::new(3, vec![unit("ally", 10, 40, 50)], vec![unit("foe", 1, 10, 1)]).unwrap();
    let mut engine = BattleEngine::new(&mut state);

    run_to_menu(&mut engine, &env);
    engine.select_offensive_part(PartSlot::RightArm);
    engine.select_target_combatant(0);
    engine.select_target_part(PartSlot::Head);
    engine.take_events();
    engine.confirm_action(&env);

    let outcomes = resolved_events(engine.take_events());
    assert_eq!(outcomes.len(), 1, "exactly one resolution per confirm");
    let outcome = &outcomes[0];
    assert!(!outcome.hit);
    assert_eq!(outcome.damage, 0);
    assert!(!outcome.part_destroyed);
    assert!(!outcome.target_knocked_out);

    let foe = engine.state().roster.combatant(CombatantId(1)).unwrap();
    assert!(!foe.is_knocked_out());
    assert_eq!(foe.part(PartSlot::Head).unwrap().durability.current, 1);
}

#[test]
fn destroying_the_last_part_knocks_out_in_the_same_resolution() {
    let tables = sure_hit_tables();
    let env = BattleEnv::new(&tables, &PcgRng);
    let mut state =
        BattleState::new(3, vec![unit("ally", 10, 40, 50)], vec![unit("foe", 1, 10, 30)]).unwrap();
    // Strip the foe down to a lone vital head.
    {
        let foe = state.roster.combatant_mut(CombatantId(1)).unwrap();
        foe.apply_damage(PartSlot::RightArm, 30);
        foe.apply_damage(PartSlot::LeftArm, 30);
        foe.apply_damage(PartSlot::Legs, 30);
    }
    let mut engine = BattleEngine::new(&mut state);

    run_to_menu(&mut engine, &env);
    engine.select_offensive_part(PartSlot::RightArm);
    engine.select_target_combatant(0);
    engine.select_target_part(PartSlot::Head);
    engine.confirm_action(&env);

    let outcomes = resolved_events(engine.take_events());
    let outcome = &outcomes[0];
    assert!(outcome.hit);
    assert!(outcome.part_destroyed);
    assert!(outcome.target_knocked_out);
    assert_eq!(
        engine.state().phase,
        BattlePhase::BattleOver {
            outcome: BattleOutcome::Victory
        }
    );
}

#[test]
fn defend_targets_nobody_and_halves_the_next_hit() {
    let tables = sure_hit_tables();
    let env = BattleEnv::new(&tables, &PcgRng);
    // The foe is slightly slower: the ally defends, then the foe strikes.
    let mut state =
        BattleState::new(3, vec![unit("ally", 10, 40, 50)], vec![unit("foe", 8, 40, 50)]).unwrap();
    let mut engine = BattleEngine::new(&mut state);

    run_to_menu(&mut engine, &env);
    engine.take_events();
    engine.confirm_defend(&env);

    let outcomes = resolved_events(engine.take_events());
    assert_eq!(outcomes.len(), 1);
    let defend = &outcomes[0];
    assert_eq!(defend.kind, ResolvedKind::Defend);
    assert_eq!(defend.target, defend.attacker);
    assert_eq!(defend.damage, 0);
    assert!(engine.state().roster.combatant(CombatantId(0)).unwrap().is_defending());

    // Let the foe's turn come and land.
    let mut foe_outcome = None;
    for _ in 0..10_000 {
        engine.tick(50, &env);
        if let Some(outcome) = resolved_events(engine.take_events()).pop() {
            foe_outcome = Some(outcome);
            break;
        }
    }
    let foe_outcome = foe_outcome.expect("the foe never acted");

    assert_eq!(foe_outcome.attacker, CombatantId(1));
    assert_eq!(foe_outcome.damage, 20, "40 power halved by the guard");
    assert!(
        !engine.state().roster.combatant(CombatantId(0)).unwrap().is_defending(),
        "defending shields exactly one resolution"
    );
}

#[test]
fn support_heals_the_most_damaged_ally_part() {
    let tables = sure_hit_tables();
    let env = BattleEnv::new(&tables, &PcgRng);

    let mut healer = unit("healer", 10, 0, 50);
    healer.parts[PartSlot::RightArm.index()] = part(
        PartSlot::RightArm,
        PartKind::Support,
        15,
        0,
        50,
        false,
    );

    let mut wounded = unit("wounded", 2, 20, 50);
    wounded.apply_damage(PartSlot::LeftArm, 30);

    let mut state =
        BattleState::new(3, vec![healer, wounded], vec![unit("foe", 1, 10, 50)]).unwrap();
    let mut engine = BattleEngine::new(&mut state);

    run_to_menu(&mut engine, &env);
    engine.select_offensive_part(PartSlot::RightArm);
    // Candidates for a support part are the living allies: index 1 is the
    // wounded teammate.
    engine.select_target_combatant(1);
    engine.confirm_action(&env);

    let outcomes = resolved_events(engine.take_events());
    let outcome = &outcomes[0];
    assert_eq!(outcome.kind, ResolvedKind::Support);
    assert!(outcome.hit);
    assert_eq!(outcome.damage, 0);
    assert_eq!(outcome.heal, 15);
    assert_eq!(
        engine
            .state()
            .roster
            .combatant(CombatantId(1))
            .unwrap()
            .part(PartSlot::LeftArm)
            .unwrap()
            .durability
            .current,
        35
    );
}

#[test]
fn battle_over_is_entered_exactly_once_for_a_full_wipe() {
    let tables = sure_hit_tables();
    let env = BattleEnv::new(&tables, &PcgRng);
    // Three one-hit foes, one fast ally. Foes are too slow to ever act.
    let mut state = BattleState::new(
        3,
        vec![unit("ally", 10, 40, 50)],
        vec![
            unit("foe-a", 1, 10, 30),
            unit("foe-b", 1, 10, 30),
            unit("foe-c", 1, 10, 30),
        ],
    )
    .unwrap();
    // Each foe is a bare vital head: one landed hit knocks it out.
    for id in [1, 2, 3] {
        let foe = state.roster.combatant_mut(CombatantId(id)).unwrap();
        foe.apply_damage(PartSlot::RightArm, 30);
        foe.apply_damage(PartSlot::LeftArm, 30);
        foe.apply_damage(PartSlot::Legs, 30);
    }
    let mut engine = BattleEngine::new(&mut state);

    let mut ended = Vec::new();
    for _ in 0..3 {
        run_to_menu(&mut engine, &env);
        engine.select_offensive_part(PartSlot::RightArm);
        engine.select_target_combatant(0);
        engine.select_target_part(PartSlot::Head);
        engine.confirm_action(&env);
        ended.extend(engine.take_events().into_iter().filter(|event| {
            matches!(event, BattleEvent::BattleEnded { .. })
        }));
        if engine.state().phase.is_terminal() {
            break;
        }
        // Drain the presentation lock before the next charge-up.
        engine.tick(5_000, &env);
    }

    assert_eq!(ended.len(), 1);
    let BattleEvent::BattleEnded { outcome, rewards } = &ended[0] else {
        panic!("filtered above");
    };
    assert_eq!(*outcome, BattleOutcome::Victory);
    assert!(rewards.medal_exp > 0);

    // Ticking a finished battle changes nothing and emits nothing.
    engine.tick(5_000, &env);
    assert!(engine.take_events().is_empty());
}

#[test]
fn commands_outside_their_phase_are_silent_noops() {
    let tables = sure_hit_tables();
    let env = BattleEnv::new(&tables, &PcgRng);
    let mut state =
        BattleState::new(3, vec![unit("ally", 10, 40, 50)], vec![unit("foe", 1, 10, 50)]).unwrap();
    let mut engine = BattleEngine::new(&mut state);

    // Still charging: no command applies.
    let before = engine.state().clone();
    engine.select_offensive_part(PartSlot::RightArm);
    engine.select_target_combatant(0);
    engine.confirm_action(&env);
    engine.confirm_defend(&env);
    assert_eq!(engine.state(), &before);

    run_to_menu(&mut engine, &env);
    // Target selection before a part is chosen applies nothing either.
    engine.select_target_combatant(0);
    assert_eq!(engine.state().phase, BattlePhase::ActionMenu);
}

#[test]
fn out_of_range_target_index_clamps_to_the_candidate_list() {
    let tables = sure_hit_tables();
    let env = BattleEnv::new(&tables, &PcgRng);
    let mut state =
        BattleState::new(3, vec![unit("ally", 10, 40, 50)], vec![unit("foe", 1, 10, 50)]).unwrap();
    let mut engine = BattleEngine::new(&mut state);

    run_to_menu(&mut engine, &env);
    engine.select_offensive_part(PartSlot::RightArm);
    engine.select_target_combatant(17);
    engine.confirm_action(&env);

    let outcomes = resolved_events(engine.take_events());
    assert_eq!(outcomes[0].target, CombatantId(1), "clamped to the only foe");
}

#[test]
fn identical_seeds_and_commands_replay_to_identical_digests() {
    let run = || {
        let tables = CombatTables::default();
        let env = BattleEnv::new(&tables, &PcgRng);
        let mut state = BattleState::new(
            1234,
            vec![unit("ally", 10, 40, 50)],
            vec![unit("foe", 9, 35, 50)],
        )
        .unwrap();
        let mut engine = BattleEngine::new(&mut state);

        for _ in 0..2000 {
            match engine.state().phase {
                BattlePhase::ActionMenu => {
                    engine.select_offensive_part(PartSlot::RightArm);
                    engine.select_target_combatant(0);
                    engine.select_target_part(PartSlot::LeftArm);
                    engine.confirm_action(&env);
                }
                BattlePhase::BattleOver { .. } => break,
                _ => engine.tick(50, &env),
            }
        }
        state.digest()
    };

    assert_eq!(run(), run());
}
