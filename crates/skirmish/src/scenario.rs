//! The fixed encounter the skirmish binary plays out.

use combat_core::{
    BattleId, BattleSetup, EnemySpawn, EntityId, LoadoutEntry, ParticipantSetup, SkillVector,
};

fn gear(equipment: &str, modifier: Option<&str>) -> LoadoutEntry {
    LoadoutEntry {
        equipment: equipment.into(),
        modifier: modifier.map(Into::into),
    }
}

/// Two-person squad against a raider, a gunner and a sniper.
pub fn ambush(seed: u64) -> BattleSetup {
    BattleSetup {
        id: BattleId(1),
        seed,
        participants: vec![
            ParticipantSetup {
                id: EntityId(1),
                name: "Vera".into(),
                hp: 40,
                energy: 3,
                rank: 1,
                skills: SkillVector::new().with("might", 4).with("finesse", 2),
                loadout: vec![
                    gear("maul", Some("weighted")),
                    gear("combat_knife", Some("serrated")),
                    gear("shock_baton", None),
                ],
            },
            ParticipantSetup {
                id: EntityId(2),
                name: "Ike".into(),
                hp: 28,
                energy: 3,
                rank: 3,
                skills: SkillVector::new().with("aim", 3).with("tech", 2),
                loadout: vec![
                    gear("service_pistol", Some("scoped")),
                    gear("long_rifle", None),
                    gear("stim_injector", None),
                ],
            },
        ],
        enemies: vec![
            EnemySpawn {
                id: EntityId(10),
                template: "raider".into(),
                rank: 1,
            },
            EnemySpawn {
                id: EntityId(11),
                template: "gunner".into(),
                rank: 2,
            },
            EnemySpawn {
                id: EntityId(12),
                template: "sniper".into(),
                rank: 4,
            },
        ],
    }
}
