#![allow(dead_code)]

use std::collections::HashMap;

use combat_core::{
    BattleId, BattleSetup, BehaviorNode, CombatEnv, Condition, DamageCategory, Effect, EnemySpawn,
    EntityId, Env, EquipmentDefinition, FixedClock, LoadoutEntry, Modifier, NpcAction,
    NpcTemplate, ParticipantSetup, PcgRng, RankSet, ScalingRules, SkillVector, TemplateOracle,
};

pub const HERO: EntityId = EntityId(1);
pub const RAIDER: EntityId = EntityId(10);

/// In-memory template oracle.
#[derive(Default)]
pub struct Catalog {
    pub equipment: HashMap<String, EquipmentDefinition>,
    pub modifiers: HashMap<String, Modifier>,
    pub npcs: HashMap<String, NpcTemplate>,
    pub behaviors: HashMap<String, BehaviorNode>,
    pub scaling: ScalingRules,
}

impl TemplateOracle for Catalog {
    fn equipment(&self, id: &str) -> Option<&EquipmentDefinition> {
        self.equipment.get(id)
    }

    fn modifier(&self, id: &str) -> Option<&Modifier> {
        self.modifiers.get(id)
    }

    fn npc(&self, id: &str) -> Option<&NpcTemplate> {
        self.npcs.get(id)
    }

    fn behavior(&self, id: &str) -> Option<&BehaviorNode> {
        self.behaviors.get(id)
    }

    fn scaling(&self) -> &ScalingRules {
        &self.scaling
    }
}

pub struct World {
    pub catalog: Catalog,
    pub rng: PcgRng,
    pub clock: FixedClock,
}

impl World {
    pub fn env(&self) -> CombatEnv<'_> {
        Env::with_all(&self.catalog, &self.rng, &self.clock).into_combat_env()
    }

    pub fn add_equipment(&mut self, equipment: EquipmentDefinition) {
        self.catalog
            .equipment
            .insert(equipment.id.clone(), equipment);
    }

    pub fn add_npc(&mut self, template: NpcTemplate, tree: BehaviorNode) {
        self.catalog
            .behaviors
            .insert(template.behavior.clone(), tree);
        self.catalog.npcs.insert(template.id.clone(), template);
    }
}

pub fn weapon(id: &str, damage: u32, ranks: RankSet) -> EquipmentDefinition {
    EquipmentDefinition {
        id: id.into(),
        name: id.into(),
        base_damage: damage,
        category: DamageCategory::Blade,
        valid_ranks: ranks,
        ap_cost: 1,
        stamina_cost: 1,
        effects: Vec::new(),
        condition: 100,
        heat: 0,
        sabotaged: false,
    }
}

pub fn npc(id: &str, hp: u32, ammo: u32) -> NpcTemplate {
    NpcTemplate {
        id: id.into(),
        name: "Raider".into(),
        max_hp: hp,
        stamina: 10,
        morale: 10,
        ammo,
        behavior: format!("{id}-tree"),
    }
}

/// Shoot while there is ammo, otherwise close the distance.
pub fn gunner_tree() -> BehaviorNode {
    BehaviorNode::selector(vec![
        BehaviorNode::sequence(vec![
            BehaviorNode::Condition(Condition::HasAmmo),
            BehaviorNode::Action(NpcAction::RangedAttack {
                damage: 6,
                ammo_cost: 1,
            }),
        ]),
        BehaviorNode::Action(NpcAction::AdvanceTowardTarget),
    ])
}

pub fn brute_tree(damage: u32) -> BehaviorNode {
    BehaviorNode::Action(NpcAction::MeleeAttack { damage })
}

/// One hero with a front-rank knife and a wall-slamming club against one
/// raider.
pub fn skirmish(
    hero_rank: u8,
    raider_hp: u32,
    raider_ammo: u32,
    tree: BehaviorNode,
) -> (World, BattleSetup) {
    let mut world = World {
        catalog: Catalog::default(),
        rng: PcgRng,
        clock: FixedClock(1_000),
    };
    world.add_equipment(weapon("knife", 8, RankSet::FRONT));
    let mut club = weapon("club", 2, RankSet::all());
    club.effects = vec![Effect::Push(2)];
    world.add_equipment(club);
    world.add_npc(npc("raider", raider_hp, raider_ammo), tree);

    let setup = BattleSetup {
        id: BattleId(7),
        seed: 42,
        participants: vec![ParticipantSetup {
            id: HERO,
            name: "Hero".into(),
            hp: 100,
            energy: 3,
            rank: hero_rank,
            skills: SkillVector::new(),
            loadout: vec![
                LoadoutEntry {
                    equipment: "knife".into(),
                    modifier: None,
                },
                LoadoutEntry {
                    equipment: "club".into(),
                    modifier: None,
                },
            ],
        }],
        enemies: vec![EnemySpawn {
            id: RAIDER,
            template: "raider".into(),
            rank: 3,
        }],
    };
    (world, setup)
}
