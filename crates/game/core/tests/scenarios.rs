mod common;

use std::sync::Arc;

use common::{arena, effects_of, game, health, with_abilities};
use tactics_core::{
    Ability, AreaTargetEffect, CastError, Coords, DamageEffect, DestructionEffect, EngineConfig,
    Game, GroupEffect, HealingEffect, Log, ModificationEffect, MovementEffect, SpawnEffect,
    Target, TargetError,
};

// ============================================================================
// Damage and healing
// ============================================================================

#[test]
fn damage_then_heal_is_clamped_to_max_health() {
    let content = with_abilities(
        arena(3, 3),
        vec![
            Ability::new("strike").with_effect(DamageEffect::new("target", 40)),
            Ability::new("mend").with_effect(HealingEffect::new("target", 30)),
        ],
    );
    let mut game = game(content);
    let goblin = game
        .spawn("goblin", Coords::new(1, 1))
        .unwrap()
        .expect("spawn should succeed");
    let target = Some(Target::Entity(goblin));

    let log = game.cast("strike", goblin, target.clone()).unwrap();
    let Some(Log::Damage(damage)) = effects_of(&log).logs.first() else {
        panic!("expected damage log");
    };
    assert_eq!(damage.damage, 40);
    assert_eq!(damage.actual_damage, 40);
    assert_eq!(health(&game, goblin), 10);

    for (expected_actual, expected_health) in [(30, 40), (10, 50)] {
        let log = game.cast("mend", goblin, target.clone()).unwrap();
        let Some(Log::Healing(healing)) = effects_of(&log).logs.first() else {
            panic!("expected healing log");
        };
        assert_eq!(healing.healing, 30);
        assert_eq!(healing.actual_healing, expected_actual);
        assert_eq!(health(&game, goblin), expected_health);
    }
}

#[test]
fn overkill_records_nominal_and_actual_damage() {
    let content = with_abilities(
        arena(3, 3),
        vec![Ability::new("crush").with_effect(DamageEffect::new("target", 80).with_attacker("caster"))],
    );
    let mut game = game(content);
    let attacker = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    let victim = game.spawn("goblin", Coords::new(2, 2)).unwrap().unwrap();

    let log = game
        .cast("crush", attacker, Some(Target::Entity(victim)))
        .unwrap();
    let damage = log
        .leaves()
        .into_iter()
        .find_map(|leaf| match leaf {
            Log::Damage(damage) => Some(damage.clone()),
            _ => None,
        })
        .expect("damage leaf");

    assert_eq!(damage.attacker, Some(attacker));
    assert_eq!(damage.damage, 80);
    assert_eq!(damage.actual_damage, 50);
    assert!(game.state().entity(victim).is_none());
}

// ============================================================================
// Combinators
// ============================================================================

fn volley(parallel: bool) -> Ability {
    Ability::new("volley")
        .with_effect(AreaTargetEffect::new("target", 1, "hit"))
        .with_effect(
            GroupEffect::new("hit", "victim")
                .with_effect(DamageEffect::new("victim", 5).with_attacker("caster"))
                .parallel(parallel),
        )
}

#[test]
fn group_effect_logs_one_entry_per_member_in_order() {
    for parallel in [false, true] {
        let mut game = game(with_abilities(arena(3, 3), vec![volley(parallel)]));
        let caster = game.spawn("goblin", Coords::new(1, 2)).unwrap().unwrap();
        let members: Vec<_> = (0..3)
            .map(|x| game.spawn("goblin", Coords::new(x, 0)).unwrap().unwrap())
            .collect();

        let log = game
            .cast("volley", caster, Some(Target::Coords(Coords::new(1, 0))))
            .unwrap();

        let effects = effects_of(&log);
        assert_eq!(effects.len(), 1, "area targeting produces no log");
        let Some(Log::Combined(group)) = effects.logs.first() else {
            panic!("expected group log");
        };
        assert_eq!(group.parallel, parallel);
        assert_eq!(group.len(), members.len());

        let hit: Vec<_> = group
            .iter()
            .map(|entry| match entry.leaves().as_slice() {
                [Log::Damage(damage)] => damage.target,
                other => panic!("unexpected member log {other:?}"),
            })
            .collect();
        assert_eq!(hit, members);
        assert_eq!(health(&game, caster), 50);
        for member in members {
            assert_eq!(health(&game, member), 45);
        }
    }
}

#[test]
fn group_member_bindings_do_not_leak() {
    let ability = Ability::new("chain")
        .with_effect(AreaTargetEffect::new("caster", 5, "everyone"))
        .with_effect(
            GroupEffect::new("everyone", "member")
                .with_effect(AreaTargetEffect::new("member", 0, "self")),
        )
        .with_effect(DamageEffect::new("caster", 1));
    let mut game = game(with_abilities(arena(3, 3), vec![ability]));
    let caster = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    game.spawn("goblin", Coords::new(2, 2)).unwrap().unwrap();

    // Each member binds "self" in its own scope; a shared scope would fail
    // with `AlreadyBound` on the second member.
    game.cast("chain", caster, None).unwrap();
    assert_eq!(health(&game, caster), 49);
}

// ============================================================================
// Cascades and turns
// ============================================================================

#[test]
fn lethal_damage_destroys_entity_and_removes_its_turn() {
    let content = with_abilities(
        arena(3, 3),
        vec![Ability::new("smite").with_effect(DamageEffect::new("target", 100))],
    );
    let mut game = game(content);
    let hero = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    let foe = game.spawn("goblin", Coords::new(2, 0)).unwrap().unwrap();
    assert_eq!(game.turns().iter().collect::<Vec<_>>(), vec![hero, foe]);

    let log = game.take_turn("smite", Some(Target::Entity(foe))).unwrap();
    let kinds: Vec<_> = log.leaves().into_iter().map(Log::kind).collect();
    assert_eq!(kinds, vec!["ability", "damage", "destruction"]);

    assert!(game.state().entity(foe).is_none());
    assert!(game.board().coords(foe).is_none());
    assert!(!game.turns().contains(foe));
    assert_eq!(game.current_actor(), Some(hero));
}

#[test]
fn cascade_deeper_than_limit_aborts_and_keeps_turn() {
    let content = with_abilities(
        arena(3, 3),
        vec![Ability::new("smite").with_effect(DamageEffect::new("target", 100))],
    );
    let mut game = Game::new(content, EngineConfig::with_max_cascade_depth(0)).unwrap();
    let hero = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    let foe = game.spawn("goblin", Coords::new(2, 0)).unwrap().unwrap();

    let result = game.take_turn("smite", Some(Target::Entity(foe)));
    assert_eq!(result, Err(CastError::CascadeTooDeep { depth: 1, limit: 0 }));
    assert_eq!(game.current_actor(), Some(hero));
}

#[test]
fn destroying_current_actor_passes_turn_to_next() {
    let content = with_abilities(
        arena(3, 3),
        vec![Ability::new("implode").with_effect(DestructionEffect::new("caster"))],
    );
    let mut game = game(content);
    let first = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    let second = game.spawn("wisp", Coords::new(0, 0)).unwrap().unwrap();
    let third = game.spawn("goblin", Coords::new(1, 0)).unwrap().unwrap();

    game.take_turn("implode", None).unwrap();
    assert_eq!(game.current_actor(), Some(second));
    assert_eq!(game.pass_turn(), Ok(Some(third)));
    assert_eq!(game.pass_turn(), Ok(Some(second)));
    assert!(!game.turns().contains(first));
}

#[test]
fn spawned_agents_join_turn_order_and_inert_entities_do_not() {
    let content = arena(3, 3);
    let goblin = Arc::clone(content.entity_type("goblin").unwrap());
    let rock = Arc::clone(content.entity_type("rock").unwrap());
    let content = with_abilities(
        content,
        vec![
            Ability::new("summon").with_effect(SpawnEffect::new("target", goblin)),
            Ability::new("raise").with_effect(SpawnEffect::new("target", rock)),
        ],
    );
    let mut game = game(content);
    let caster = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();

    game.cast("raise", caster, Some(Target::Coords(Coords::new(1, 0))))
        .unwrap();
    game.cast("summon", caster, Some(Target::Coords(Coords::new(2, 0))))
        .unwrap();

    assert_eq!(game.state().entities().len(), 3);
    assert_eq!(game.turns().len(), 2);
}

#[test]
fn turn_operations_need_an_agent() {
    let mut game = game(arena(3, 3));
    game.spawn("rock", Coords::new(1, 1)).unwrap().unwrap();

    assert_eq!(game.current_actor(), None);
    assert_eq!(game.pass_turn(), Err(CastError::NoActiveTurn));
    assert_eq!(game.take_turn("anything", None), Err(CastError::NoActiveTurn));
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn fatal_target_error_keeps_earlier_effects() {
    let content = with_abilities(
        arena(3, 3),
        vec![
            Ability::new("botched")
                .with_effect(DamageEffect::new("target", 5))
                .with_effect(DamageEffect::new("nobody", 5)),
        ],
    );
    let mut game = game(content);
    let caster = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    let victim = game.spawn("goblin", Coords::new(1, 0)).unwrap().unwrap();

    let result = game.cast("botched", caster, Some(Target::Entity(victim)));
    assert_eq!(
        result,
        Err(CastError::Target(TargetError::missing("nobody")))
    );
    assert_eq!(health(&game, victim), 45);
}

#[test]
fn fatal_error_inside_group_stops_remaining_members() {
    let ability = Ability::new("sweep")
        .with_effect(AreaTargetEffect::new("target", 1, "row"))
        .with_effect(
            GroupEffect::new("row", "victim")
                .with_effect(DamageEffect::new("victim", 5))
                .with_effect(HealingEffect::new("victim", 1).with_healer("spot")),
        );
    let mut game = game(with_abilities(arena(3, 3), vec![ability]));
    let caster = game.spawn("goblin", Coords::new(1, 2)).unwrap().unwrap();
    let first = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    let second = game.spawn("goblin", Coords::new(2, 0)).unwrap().unwrap();

    let result = game.cast("sweep", caster, Some(Target::Coords(Coords::new(1, 0))));
    assert!(matches!(
        result,
        Err(CastError::Target(TargetError::Missing { ref name })) if name == "spot"
    ));
    assert_eq!(health(&game, first), 45);
    assert_eq!(health(&game, second), 50);
}

#[test]
fn wrong_kind_binding_is_fatal() {
    let content = with_abilities(
        arena(3, 3),
        vec![Ability::new("strike").with_effect(DamageEffect::new("target", 5))],
    );
    let mut game = game(content);
    let caster = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();

    let result = game.cast("strike", caster, Some(Target::Coords(Coords::new(1, 1))));
    assert!(matches!(
        result,
        Err(CastError::Target(TargetError::WrongKind { .. }))
    ));
    assert_eq!(
        game.cast("missing", caster, None),
        Err(CastError::unknown_ability("missing"))
    );
}

#[test]
fn destroyed_caster_cannot_cast() {
    let content = with_abilities(
        arena(3, 3),
        vec![
            Ability::new("smite").with_effect(DamageEffect::new("target", 100)),
            Ability::new("strike").with_effect(DamageEffect::new("target", 5)),
        ],
    );
    let mut game = game(content);
    let hero = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    let foe = game.spawn("goblin", Coords::new(2, 0)).unwrap().unwrap();
    game.cast("smite", hero, Some(Target::Entity(foe))).unwrap();

    let result = game.cast("strike", foe, Some(Target::Entity(hero)));
    assert_eq!(
        result,
        Err(CastError::Target(TargetError::missing("caster")))
    );
    assert_eq!(health(&game, hero), 50);
}

// ============================================================================
// Movement and terrain
// ============================================================================

#[test]
fn relative_and_absolute_movement_agree() {
    let content = with_abilities(
        arena(4, 4),
        vec![
            Ability::new("step").with_effect(MovementEffect::by("caster", "target")),
            Ability::new("jump").with_effect(MovementEffect::to("caster", "target")),
        ],
    );

    for offset in [Coords::UP, Coords::RIGHT, Coords::new(2, 2), Coords::new(-3, 0)] {
        let mut stepper = game(content.clone());
        let mut jumper = game(content.clone());
        let start = Coords::new(1, 1);
        let a = stepper.spawn("goblin", start).unwrap().unwrap();
        let b = jumper.spawn("goblin", start).unwrap().unwrap();

        let by_offset = stepper
            .cast("step", a, Some(Target::Coords(offset)))
            .unwrap();
        let by_target = jumper
            .cast("jump", b, Some(Target::Coords(start + offset)))
            .unwrap();

        assert_eq!(effects_of(&by_offset), effects_of(&by_target));
        assert_eq!(stepper.board().coords(a), jumper.board().coords(b));
    }
}

#[test]
fn out_of_bounds_targets_leave_board_unchanged() {
    let content = arena(3, 3);
    let wall = Arc::clone(content.tile_type("wall").unwrap());
    let goblin = Arc::clone(content.entity_type("goblin").unwrap());
    let content = with_abilities(
        content,
        vec![
            Ability::new("build").with_effect(ModificationEffect::new("target", wall)),
            Ability::new("summon").with_effect(SpawnEffect::new("target", goblin)),
            Ability::new("jump").with_effect(MovementEffect::to("caster", "target")),
        ],
    );
    let mut game = game(content);
    let caster = game.spawn("goblin", Coords::new(1, 1)).unwrap().unwrap();

    for outside in [Coords::new(-1, 0), Coords::new(3, 1), Coords::new(1, 3)] {
        for ability in ["build", "summon", "jump"] {
            let log = game
                .cast(ability, caster, Some(Target::Coords(outside)))
                .unwrap();
            assert!(effects_of(&log).is_empty(), "{ability} at {outside}");
        }
    }

    assert_eq!(game.state().entities().len(), 1);
    assert_eq!(game.board().coords(caster), Some(Coords::new(1, 1)));
    assert!(game.board().tile_type(Coords::new(-1, 0)).is_none());
}

#[test]
fn walls_reject_walkers_but_not_ghosts() {
    let content = arena(3, 3);
    let wall = Arc::clone(content.tile_type("wall").unwrap());
    let content = with_abilities(
        content,
        vec![
            Ability::new("build").with_effect(ModificationEffect::new("target", wall)),
            Ability::new("jump").with_effect(MovementEffect::to("caster", "target")),
        ],
    );
    let mut game = game(content);
    let goblin = game.spawn("goblin", Coords::new(0, 0)).unwrap().unwrap();
    let wisp = game.spawn("wisp", Coords::new(0, 1)).unwrap().unwrap();
    let spot = Some(Target::Coords(Coords::new(2, 2)));

    let log = game.cast("build", goblin, spot.clone()).unwrap();
    assert!(matches!(effects_of(&log).logs.first(), Some(Log::Modification(_))));

    let blocked = game.cast("jump", goblin, spot.clone()).unwrap();
    assert!(effects_of(&blocked).is_empty());
    let passed = game.cast("jump", wisp, spot).unwrap();
    assert!(matches!(effects_of(&passed).logs.first(), Some(Log::Movement(_))));
    assert_eq!(game.board().coords(wisp), Some(Coords::new(2, 2)));
}
