//! Built-in content used when no data files are supplied.
//!
//! Keeps demos and tests running without a content directory; production
//! data ships as RON/TOML and takes precedence.

use battle_core::{MedalAffinity, PartKind, PartSlot};

use crate::generator::FloorBand;
use crate::specs::{CombatantSpec, MedalSpec, PartSpec, TechniqueSpec};

fn part(
    slot: PartSlot,
    kind: PartKind,
    name: &str,
    power: u32,
    accuracy: i32,
    speed: i32,
    durability: u32,
) -> PartSpec {
    PartSpec {
        slot,
        kind,
        name: name.into(),
        power,
        accuracy,
        speed,
        durability,
        uses: None,
        vital: None,
    }
}

/// A balanced starter combatant for the ally roster.
pub fn starter_combatant() -> CombatantSpec {
    CombatantSpec {
        name: "Scramble".into(),
        medal: MedalSpec {
            name: "Stag".into(),
            affinity: MedalAffinity::Ranged,
            level: 1,
            exp: 0,
            techniques: vec![TechniqueSpec {
                name: "Beam Volley".into(),
                kind: PartKind::Ranged,
                power: 65,
                unlock_level: 1,
            }],
        },
        parts: vec![
            part(PartSlot::Head, PartKind::Support, "Repair Horn", 14, 0, 2, 45),
            part(PartSlot::RightArm, PartKind::Ranged, "Twin Rifle", 22, 8, 3, 40),
            part(PartSlot::LeftArm, PartKind::Melee, "Breaker Fist", 28, 4, 2, 40),
            part(PartSlot::Legs, PartKind::Inert, "Strider Legs", 0, 0, 7, 50),
        ],
    }
}

/// Opponent template bands for the floor generator.
pub fn default_opponent_bands() -> Vec<FloorBand> {
    vec![
        FloorBand {
            min_floor: 0,
            templates: vec![
                CombatantSpec {
                    name: "Rustclaw".into(),
                    medal: MedalSpec {
                        name: "Crab".into(),
                        affinity: MedalAffinity::Melee,
                        level: 1,
                        exp: 0,
                        techniques: vec![],
                    },
                    parts: vec![
                        part(PartSlot::Head, PartKind::Inert, "Scrap Dome", 0, 0, 1, 35),
                        part(PartSlot::RightArm, PartKind::Melee, "Pincer", 18, 3, 2, 30),
                        part(PartSlot::LeftArm, PartKind::Melee, "Claw", 14, 5, 2, 30),
                        part(PartSlot::Legs, PartKind::Inert, "Crawler", 0, 0, 4, 40),
                    ],
                },
                CombatantSpec {
                    name: "Pewtick".into(),
                    medal: MedalSpec {
                        name: "Mosquito".into(),
                        affinity: MedalAffinity::Ranged,
                        level: 1,
                        exp: 0,
                        techniques: vec![],
                    },
                    parts: vec![
                        part(PartSlot::Head, PartKind::Ranged, "Needle", 10, 9, 2, 28),
                        part(PartSlot::RightArm, PartKind::Ranged, "Dart Gun", 15, 7, 2, 26),
                        part(PartSlot::LeftArm, PartKind::Inert, "Buckler", 0, 0, 1, 34),
                        part(PartSlot::Legs, PartKind::Inert, "Hover Fan", 0, 0, 8, 36),
                    ],
                },
            ],
        },
        FloorBand {
            min_floor: 5,
            templates: vec![CombatantSpec {
                name: "Graviton".into(),
                medal: MedalSpec {
                    name: "Tortoise".into(),
                    affinity: MedalAffinity::Support,
                    level: 3,
                    exp: 0,
                    techniques: vec![TechniqueSpec {
                        name: "Gravity Press".into(),
                        kind: PartKind::Melee,
                        power: 80,
                        unlock_level: 3,
                    }],
                },
                parts: vec![
                    part(PartSlot::Head, PartKind::Support, "Patch Dome", 12, 0, 1, 55),
                    part(PartSlot::RightArm, PartKind::Melee, "Press Arm", 30, 2, 1, 45),
                    part(PartSlot::LeftArm, PartKind::Ranged, "Flak Pod", 20, 5, 1, 45),
                    part(PartSlot::Legs, PartKind::Inert, "Quad Base", 0, 0, 3, 60),
                ],
            }],
        },
    ]
}
