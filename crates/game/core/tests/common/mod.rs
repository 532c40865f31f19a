#![allow(dead_code)]

use tactics_core::{
    Ability, CombinedLog, ContentBundle, EngineConfig, EntityId, EntityType, Game, Log,
    MovementDomain, Size, TileType,
};

/// Installs a test subscriber once. Set `RUST_LOG=tactics=debug` to see events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A `width` x `height` all-floor arena with a walker, a ghost and a rock.
pub fn arena(width: u32, height: u32) -> ContentBundle {
    ContentBundle::new("arena", Size::new(width, height), TileType::new("floor"))
        .with_tile_type(TileType::new("wall").blocking(true, true))
        .with_entity_type(
            EntityType::new("goblin", MovementDomain::Ground)
                .agent()
                .with_max_health(50),
        )
        .with_entity_type(EntityType::new("wisp", MovementDomain::Ghost).agent())
        .with_entity_type(EntityType::new("rock", MovementDomain::Ground))
}

pub fn game(content: ContentBundle) -> Game {
    init_tracing();
    Game::new(content, EngineConfig::default()).expect("content should be valid")
}

pub fn with_abilities(content: ContentBundle, abilities: Vec<Ability>) -> ContentBundle {
    abilities
        .into_iter()
        .fold(content, |content, ability| content.with_ability(ability))
}

/// Effects part of an ability log: `Combined[Ability, Combined[effects]]`.
pub fn effects_of(log: &Log) -> &CombinedLog {
    let outer = log.as_combined().expect("ability log is combined");
    assert!(matches!(outer.logs.first(), Some(Log::Ability(_))));
    outer
        .logs
        .get(1)
        .and_then(Log::as_combined)
        .expect("effects log is combined")
}

pub fn health(game: &Game, id: EntityId) -> u32 {
    game.state().health(id).expect("entity should exist")
}
