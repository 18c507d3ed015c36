mod common;

use combat_core::{
    BattleEvent, BattleOutcome, BattleSetup, BattleStatus, BattleView, BehaviorNode, CardId,
    CombatConfig, CombatEngine, CombatError, Effect, EntityId, Env, ErrorKind, FixedClock,
    LoadoutEntry, MoveDirection, NpcAction, OracleError, PassReason, PcgRng, PlayCard, Rank,
    RankSet, ResolveError, SetupError, StatusKind, start_battle,
};

use common::{Catalog, HERO, RAIDER, World, brute_tree, gunner_tree, skirmish, weapon};

fn play(card: &str, target: Option<EntityId>) -> PlayCard {
    PlayCard {
        participant: HERO,
        card: CardId::new(card),
        target,
    }
}

fn events(battle: &combat_core::Battle) -> Vec<&BattleEvent> {
    battle.log.entries().iter().map(|entry| &entry.event).collect()
}

/// Adds a 1 ap card with the given base damage and effects to the hero's
/// loadout.
fn with_gear(
    world: &mut World,
    setup: &mut BattleSetup,
    id: &str,
    damage: u32,
    ranks: RankSet,
    effects: Vec<Effect>,
) {
    let mut gear = weapon(id, damage, ranks);
    gear.effects = effects;
    world.add_equipment(gear);
    setup.participants[0].loadout.push(LoadoutEntry {
        equipment: id.into(),
        modifier: None,
    });
}

#[test]
fn off_rank_card_deals_reduced_damage() {
    let (world, setup) = skirmish(2, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();

    let outcome = CombatEngine::new(&mut battle, &config)
        .play_card(world.env(), &play("knife", None))
        .unwrap();

    assert_eq!(outcome.damage, 4);
    assert!(outcome.off_rank);
    assert_eq!(outcome.target, Some(RAIDER));
    assert_eq!(battle.npc(RAIDER).unwrap().hp, 46);
    assert_eq!(battle.participant(HERO).unwrap().energy, 2);
    assert_eq!(battle.participant(HERO).unwrap().hp, 100);
}

#[test]
fn killing_the_last_hostile_ends_the_battle() {
    let (world, setup) = skirmish(1, 8, 0, brute_tree(1));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let mut engine = CombatEngine::new(&mut battle, &config);

    let outcome = engine.play_card(world.env(), &play("knife", None)).unwrap();
    assert_eq!(outcome.damage, 8);
    assert_eq!(outcome.outcome, BattleOutcome::PlayersWin);

    let err = engine
        .play_card(world.env(), &play("club", None))
        .unwrap_err();
    assert_eq!(err, ResolveError::BattleNotActive);
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        engine.end_turn(world.env(), HERO).unwrap_err(),
        ResolveError::BattleNotActive
    );

    assert_eq!(battle.status(), BattleStatus::Finished);
    assert_eq!(battle.outcome(), BattleOutcome::PlayersWin);
    assert!(matches!(
        events(&battle).last(),
        Some(BattleEvent::BattleEnded {
            outcome: BattleOutcome::PlayersWin
        })
    ));
}

#[test]
fn npc_without_ammo_closes_in() {
    let (world, setup) = skirmish(1, 50, 0, gunner_tree());
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();

    let outcome = CombatEngine::new(&mut battle, &config)
        .end_turn(world.env(), HERO)
        .unwrap();

    assert_eq!(outcome.next_actor, Some(HERO));
    assert_eq!(outcome.npc_turns, 1);
    assert_eq!(outcome.round, 2);
    assert_eq!(battle.rank_of(RAIDER), Rank::new(2));
    assert_eq!(battle.participant(HERO).unwrap().hp, 100);
    assert!(events(&battle).iter().any(|event| matches!(
        event,
        BattleEvent::Moved { entity, .. } if *entity == RAIDER
    )));
    assert!(!events(&battle)
        .iter()
        .any(|event| matches!(event, BattleEvent::NpcAttacked { .. })));
}

#[test]
fn ranged_attacks_spend_ammo_and_read_as_fire() {
    let (world, setup) = skirmish(1, 50, 2, gunner_tree());
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();

    CombatEngine::new(&mut battle, &config)
        .end_turn(world.env(), HERO)
        .unwrap();

    assert_eq!(battle.participant(HERO).unwrap().hp, 94);
    assert_eq!(battle.npc(RAIDER).unwrap().ammo, 1);
    let line = battle
        .log
        .entries()
        .iter()
        .find(|entry| matches!(entry.event, BattleEvent::NpcAttacked { .. }))
        .map(ToString::to_string)
        .unwrap();
    assert_eq!(line, "[r1] #10 Raider fires at #1 for 6 damage");
}

#[test]
fn knockback_past_the_back_wall_slams() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();

    CombatEngine::new(&mut battle, &config)
        .play_card(world.env(), &play("club", Some(RAIDER)))
        .unwrap();

    assert_eq!(battle.rank_of(RAIDER), Some(Rank::BACK));
    assert_eq!(battle.npc(RAIDER).unwrap().hp, 50 - 2 - config.wall_slam_damage);
    assert!(events(&battle).iter().any(|event| matches!(
        event,
        BattleEvent::Knockback {
            wall_slam: true,
            bonus_damage: 5,
            ..
        }
    )));
}

#[test]
fn move_card_steps_the_player() {
    let (world, setup) = skirmish(2, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let mut engine = CombatEngine::new(&mut battle, &config);

    let outcome = engine
        .play_card(world.env(), &play("move:advance", Some(RAIDER)))
        .unwrap();
    assert_eq!(outcome.target, None);
    assert_eq!(outcome.damage, 0);
    assert_eq!(battle.rank_of(HERO), Some(Rank::FRONT));
}

#[test]
fn rejected_requests_leave_the_battle_untouched() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let before = battle.clone();
    let mut engine = CombatEngine::new(&mut battle, &config);

    let err = engine
        .play_card(world.env(), &play("sword", None))
        .unwrap_err();
    assert!(matches!(err, ResolveError::CardNotInHand { .. }));
    assert_eq!(err.error_code(), "RESOLVE_CARD_NOT_IN_HAND");

    let err = engine
        .play_card(world.env(), &play("knife", Some(EntityId(99))))
        .unwrap_err();
    assert_eq!(err, ResolveError::UnknownTarget(EntityId(99)));

    let err = engine.end_turn(world.env(), RAIDER).unwrap_err();
    assert_eq!(err, ResolveError::UnknownParticipant(RAIDER));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let no_clock = Env::<Catalog, PcgRng, FixedClock>::new(
        Some(&world.catalog),
        Some(&world.rng),
        None,
    )
    .into_combat_env();
    let err = engine.end_turn(no_clock, HERO).unwrap_err();
    assert_eq!(err, ResolveError::Oracle(OracleError::ClockNotAvailable));
    assert_eq!(err.kind(), ErrorKind::Internal);

    assert_eq!(battle, before);
}

#[test]
fn insufficient_energy_is_rejected() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    battle.participant_mut(HERO).unwrap().energy = 0;

    let err = CombatEngine::new(&mut battle, &config)
        .play_card(world.env(), &play("knife", None))
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::InsufficientEnergy {
            required: 1,
            available: 0
        }
    );
}

#[test]
fn new_turn_refills_energy_and_hand() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let mut engine = CombatEngine::new(&mut battle, &config);

    engine.play_card(world.env(), &play("knife", None)).unwrap();
    engine.play_card(world.env(), &play("club", None)).unwrap();
    engine.end_turn(world.env(), HERO).unwrap();

    let hero = battle.participant(HERO).unwrap();
    assert_eq!(hero.energy, hero.max_energy);
    assert_eq!(hero.deck.hand().len(), 4);
    assert_eq!(hero.deck.total(), 4);
    assert_eq!(hero.hp, 99);
}

#[test]
fn stunned_npc_skips_its_turn() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(30));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    battle
        .npc_mut(RAIDER)
        .unwrap()
        .add_status(StatusKind::Stunned, 1);

    CombatEngine::new(&mut battle, &config)
        .end_turn(world.env(), HERO)
        .unwrap();

    assert_eq!(battle.participant(HERO).unwrap().hp, 100);
    assert!(!battle.npc(RAIDER).unwrap().has_status(StatusKind::Stunned));
    assert!(events(&battle).iter().any(|event| matches!(
        event,
        BattleEvent::TurnPassed {
            reason: PassReason::Stunned,
            ..
        }
    )));
}

#[test]
fn bleeding_out_hands_the_players_the_win() {
    let (world, setup) = skirmish(1, 1, 0, brute_tree(30));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    battle
        .npc_mut(RAIDER)
        .unwrap()
        .add_status(StatusKind::Bleeding, 3);

    let outcome = CombatEngine::new(&mut battle, &config)
        .end_turn(world.env(), HERO)
        .unwrap();

    assert_eq!(outcome.outcome, BattleOutcome::PlayersWin);
    assert_eq!(outcome.next_actor, None);
    assert_eq!(battle.participant(HERO).unwrap().hp, 100);
}

#[test]
fn enemies_win_when_the_last_participant_falls() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(150));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();

    let outcome = CombatEngine::new(&mut battle, &config)
        .end_turn(world.env(), HERO)
        .unwrap();

    assert_eq!(outcome.outcome, BattleOutcome::EnemiesWin);
    assert_eq!(battle.participant(HERO).unwrap().hp, 0);
    assert_eq!(battle.status(), BattleStatus::Finished);
}

#[test]
fn unknown_actor_in_turn_order_is_passed() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(2));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    battle.turn.order.insert(1, EntityId(99));

    let outcome = CombatEngine::new(&mut battle, &config)
        .end_turn(world.env(), HERO)
        .unwrap();

    assert_eq!(outcome.next_actor, Some(HERO));
    assert_eq!(battle.participant(HERO).unwrap().hp, 98);
    assert!(events(&battle).iter().any(|event| matches!(
        event,
        BattleEvent::TurnPassed {
            reason: PassReason::UnknownActor,
            ..
        }
    )));
}

#[test]
fn setup_is_validated() {
    let config = CombatConfig::default();

    let (world, mut setup) = skirmish(1, 50, 0, brute_tree(1));
    setup.enemies.clear();
    assert_eq!(
        start_battle(&setup, world.env(), &config).unwrap_err(),
        SetupError::NoEnemies
    );

    let (world, mut setup) = skirmish(5, 50, 0, brute_tree(1));
    let err = start_battle(&setup, world.env(), &config).unwrap_err();
    assert_eq!(err, SetupError::RankOutOfRange { id: HERO, rank: 5 });

    setup.participants[0].rank = 1;
    setup.enemies[0].id = HERO;
    assert_eq!(
        start_battle(&setup, world.env(), &config).unwrap_err(),
        SetupError::DuplicateId(HERO)
    );

    setup.enemies[0].id = RAIDER;
    setup.enemies[0].template = "dragon".into();
    let err = start_battle(&setup, world.env(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn setup_is_deterministic_for_a_seed() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let a = start_battle(&setup, world.env(), &config).unwrap();
    let b = start_battle(&setup, world.env(), &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.turn.order, vec![HERO, RAIDER]);
    assert_eq!(a.round, 1);
    assert!(a.log.entries().iter().all(|entry| entry.at_millis == 1_000));
}

#[test]
fn view_projects_hand_and_enemies() {
    let (world, setup) = skirmish(2, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let battle = start_battle(&setup, world.env(), &config).unwrap();

    let view = BattleView::from_battle(&battle, config.log_tail);
    assert_eq!(view.current_actor, Some(HERO));
    assert_eq!(view.participants[0].hand.len(), 4);
    assert_eq!(view.participants[0].rank, Rank::new(2));
    assert_eq!(view.enemies[0].rank, Rank::new(3));
    assert_eq!(view.log, vec!["[r1] battle starts: 1 vs 1".to_string()]);
}

#[test]
fn heal_restores_hp_to_the_player() {
    let (mut world, mut setup) = skirmish(1, 50, 0, brute_tree(30));
    with_gear(&mut world, &mut setup, "stim", 0, RankSet::FRONT, vec![Effect::Heal(10)]);
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let mut engine = CombatEngine::new(&mut battle, &config);

    engine.end_turn(world.env(), HERO).unwrap();
    let outcome = engine.play_card(world.env(), &play("stim", None)).unwrap();

    assert_eq!(outcome.target, None);
    assert!(!outcome.off_rank);
    assert_eq!(battle.participant(HERO).unwrap().hp, 80);
    assert_eq!(battle.npc(RAIDER).unwrap().hp, 50);
    assert!(matches!(
        events(&battle).last(),
        Some(BattleEvent::Healed { amount: 10 })
    ));
}

#[test]
fn off_rank_heal_is_reduced() {
    let (mut world, mut setup) = skirmish(2, 50, 0, brute_tree(30));
    with_gear(&mut world, &mut setup, "stim", 0, RankSet::FRONT, vec![Effect::Heal(10)]);
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let mut engine = CombatEngine::new(&mut battle, &config);

    engine.end_turn(world.env(), HERO).unwrap();
    let outcome = engine.play_card(world.env(), &play("stim", None)).unwrap();

    assert!(outcome.off_rank);
    // 10 * 0.6
    assert_eq!(battle.participant(HERO).unwrap().hp, 76);
}

#[test]
fn heal_is_clamped_to_max_hp() {
    let (mut world, mut setup) = skirmish(1, 50, 0, brute_tree(4));
    with_gear(&mut world, &mut setup, "stim", 0, RankSet::FRONT, vec![Effect::Heal(10)]);
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let mut engine = CombatEngine::new(&mut battle, &config);

    engine.end_turn(world.env(), HERO).unwrap();
    engine.play_card(world.env(), &play("stim", None)).unwrap();

    assert_eq!(battle.participant(HERO).unwrap().hp, 100);
    assert!(matches!(
        events(&battle).last(),
        Some(BattleEvent::Healed { amount: 4 })
    ));
}

#[test]
fn pull_drags_the_target_forward() {
    let (mut world, mut setup) = skirmish(1, 50, 0, brute_tree(1));
    with_gear(&mut world, &mut setup, "hook", 1, RankSet::all(), vec![Effect::Pull(2)]);
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();

    CombatEngine::new(&mut battle, &config)
        .play_card(world.env(), &play("hook", None))
        .unwrap();

    assert_eq!(battle.rank_of(RAIDER), Some(Rank::FRONT));
    assert_eq!(battle.npc(RAIDER).unwrap().hp, 49);
    assert!(matches!(
        events(&battle).last(),
        Some(BattleEvent::Pulled { target, rank }) if *target == RAIDER && *rank == Rank::FRONT
    ));
}

#[test]
fn inflicted_stun_costs_the_npc_its_turn() {
    let (mut world, mut setup) = skirmish(1, 50, 0, brute_tree(30));
    let stun = Effect::Inflict {
        status: StatusKind::Stunned,
        turns: 1,
    };
    with_gear(&mut world, &mut setup, "taser", 1, RankSet::all(), vec![stun]);
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let mut engine = CombatEngine::new(&mut battle, &config);

    engine.play_card(world.env(), &play("taser", None)).unwrap();
    assert!(battle.npc(RAIDER).unwrap().has_status(StatusKind::Stunned));

    let mut engine = CombatEngine::new(&mut battle, &config);
    engine.end_turn(world.env(), HERO).unwrap();
    assert_eq!(battle.participant(HERO).unwrap().hp, 100);
    assert!(!battle.npc(RAIDER).unwrap().has_status(StatusKind::Stunned));
}

#[test]
fn zero_turn_stun_does_nothing() {
    let (mut world, mut setup) = skirmish(1, 50, 0, brute_tree(30));
    let dud = Effect::Inflict {
        status: StatusKind::Stunned,
        turns: 0,
    };
    with_gear(&mut world, &mut setup, "dud", 1, RankSet::all(), vec![dud]);
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();
    let mut engine = CombatEngine::new(&mut battle, &config);

    engine.play_card(world.env(), &play("dud", None)).unwrap();
    engine.end_turn(world.env(), HERO).unwrap();

    assert!(battle.npc(RAIDER).unwrap().statuses.is_empty());
    assert_eq!(battle.participant(HERO).unwrap().hp, 70);
    assert!(!events(&battle)
        .iter()
        .any(|event| matches!(event, BattleEvent::StatusApplied { .. })));
}

#[test]
fn advancing_from_the_front_is_logged_not_rejected() {
    let (world, setup) = skirmish(1, 50, 0, brute_tree(1));
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();

    CombatEngine::new(&mut battle, &config)
        .play_card(world.env(), &play("move:advance", None))
        .unwrap();

    assert_eq!(battle.rank_of(HERO), Some(Rank::FRONT));
    assert_eq!(battle.participant(HERO).unwrap().energy, 2);
    assert!(matches!(
        events(&battle).last(),
        Some(BattleEvent::MoveBlocked {
            direction: MoveDirection::Advance,
            ..
        })
    ));
}

#[test]
fn summed_npc_damage_saturates() {
    let tree = BehaviorNode::sequence(vec![
        BehaviorNode::Action(NpcAction::MeleeAttack { damage: u32::MAX }),
        BehaviorNode::Action(NpcAction::MeleeAttack { damage: 1 }),
    ]);
    let (world, setup) = skirmish(1, 50, 0, tree);
    let config = CombatConfig::default();
    let mut battle = start_battle(&setup, world.env(), &config).unwrap();

    let outcome = CombatEngine::new(&mut battle, &config)
        .end_turn(world.env(), HERO)
        .unwrap();

    assert_eq!(outcome.outcome, BattleOutcome::EnemiesWin);
    assert_eq!(battle.participant(HERO).unwrap().hp, 0);
    assert!(events(&battle).iter().any(|event| matches!(
        event,
        BattleEvent::NpcAttacked { damage: 100, .. }
    )));
}

