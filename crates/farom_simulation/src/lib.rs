//! Farom Simulation Core
//!
//! ECS-симуляция third-person shooter gameplay на Bevy 0.16:
//! персонаж (движение, камера, input handlers), pickup оружие
//! (магазин, выстрел, перезарядка) и game mode (default pawn).
//!
//! Хост (engine) поставляет: геометрию для hit-test, полёт projectile,
//! input devices. ECS владеет gameplay state и правилами.

use std::time::Duration;

use bevy::ecs::event::event_update_system;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use serde::Serialize;

pub mod combat;
pub mod components;
pub mod config;
pub mod game_mode;
pub mod input;
pub mod logger;
pub mod movement;
pub mod pickup;

pub use combat::{
    AmmoChanged, CharacterHit, CombatPlugin, GroundPlane, HitTest, OpenSpace, Projectile,
    ProjectileHit, ReloadIntent, ReloadStarted, ReloadStopped, ShootIntent, SpawnProjectile,
    TraceResult, WorldHitTest,
};
pub use components::*;
pub use config::GameplayConfig;
pub use game_mode::{
    spawn_character, spawn_default_pawn, spawn_weapon, GameMode, PawnClass, PlayerStart,
};
pub use input::{CharacterInput, InputAction, InputBindings, InputPlugin};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};
pub use movement::{JumpIntent, MovementPlugin};
pub use pickup::{OverlapStarted, PickupPlugin};

/// Фазы gameplay step (FixedUpdate), выполняются строго по порядку
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    /// Overlap detection + weapon pickup
    Pickup,
    /// CharacterInput → handlers / intents
    Input,
    /// Shoot, reload, projectile spawn, hits
    Combat,
    /// Kinematic движение
    Movement,
    /// Held weapon → сокет владельца
    Attachment,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct FaromPlugin;

impl Plugin for FaromPlugin {
    fn build(&self, app: &mut App) {
        // Config мог поставить хост до plugin'а
        let config = app
            .world()
            .get_resource::<GameplayConfig>()
            .cloned()
            .unwrap_or_default();
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log_error(&format!("Invalid GameplayConfig ({}), using defaults", err));
                GameplayConfig::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_hz(config.simulation.fixed_hz))
            .insert_resource(config)
            .init_resource::<GameMode>()
            .init_resource::<PlayerStart>()
            .register_type::<Character>()
            .register_type::<AmmoReserve>()
            .register_type::<HeldWeapon>()
            .register_type::<ReloadState>()
            .register_type::<CapsuleSize>()
            .register_type::<WeaponSocket>()
            .register_type::<ControlRotation>()
            .register_type::<CameraBoom>()
            .register_type::<CharacterMovement>()
            .register_type::<MovementInput>()
            .register_type::<KinematicBody>()
            .configure_sets(
                FixedUpdate,
                (
                    GameplaySet::Pickup,
                    GameplaySet::Input,
                    GameplaySet::Combat,
                    GameplaySet::Movement,
                    GameplaySet::Attachment,
                )
                    .chain(),
            )
            .add_plugins((PickupPlugin, InputPlugin, CombatPlugin, MovementPlugin))
            .add_systems(Startup, spawn_default_pawn);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, FaromPlugin));
    app
}

/// Один шаг host loop: продвинуть время на `delta` и прогнать FixedUpdate
///
/// Детерминированная альтернатива `app.update()` (не зависит от wall clock).
/// В конце шага event буферы swap'аются, как это делает `First` в `app.update()`:
/// событие живёт два шага, затем удаляется. Читатели событий (системы с
/// `EventReader`, хост с `EventCursor`) должны читать каждый шаг.
pub fn advance_simulation(world: &mut World, delta: Duration) {
    world.resource_mut::<Time>().advance_by(delta);
    world.run_schedule(FixedUpdate);

    if let Err(err) = world.run_system_once(event_update_system) {
        log_error(&format!("Event buffer update failed: {}", err));
    }
}

/// Снимок ammo state одного персонажа
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmmoSnapshot {
    pub character: u32,
    pub reserve: u32,
    /// (current, max) held weapon
    pub magazine: Option<(u32, u32)>,
    pub reloading: bool,
    pub position: [f32; 3],
}

/// Snapshot всех персонажей, отсортированный по Entity index
pub fn ammo_snapshot(world: &mut World) -> Vec<AmmoSnapshot> {
    let mut characters = world.query_filtered::<
        (Entity, &AmmoReserve, &HeldWeapon, &ReloadState, &Transform),
        With<Character>,
    >();
    let world = &*world;

    let mut snapshot: Vec<_> = characters
        .iter(world)
        .map(|(entity, reserve, held, reload, transform)| AmmoSnapshot {
            character: entity.index(),
            reserve: reserve.0,
            magazine: held
                .0
                .and_then(|weapon| world.get::<Magazine>(weapon))
                .map(|magazine| (magazine.current(), magazine.max())),
            reloading: reload.is_reloading(),
            position: transform.translation.to_array(),
        })
        .collect();

    snapshot.sort_by_key(|entry| entry.character);
    snapshot
}
