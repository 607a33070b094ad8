//! Combat module: ammo / reload state machine + стрельба
//!
//! ECS ответственность:
//! - Game state: Magazine, AmmoReserve, ReloadState
//! - Rules: shoot/reload guards, reload ticking
//! - Events: AmmoChanged, ReloadStarted, ReloadStopped, CharacterHit
//!
//! Хост (engine) ответственность:
//! - Геометрия мира для hit-test (WorldHitTest)
//! - Полёт/collision projectile → ProjectileHit

use bevy::prelude::*;

pub mod events;
pub mod projectile;
pub mod reload;
pub mod shooting;

pub use events::*;
pub use hit_test::{GroundPlane, HitTest, OpenSpace, TraceResult, WorldHitTest};
pub use projectile::{process_projectile_hits, spawn_projectiles, Projectile};
pub use reload::{process_reload_intents, tick_reload_tasks};
pub use shooting::{aim_rotation, process_shoot_intents};

use crate::components::{Magazine, Muzzle, Weapon};
use crate::GameplaySet;

/// Combat Plugin
///
/// Порядок выполнения (FixedUpdate, GameplaySet::Combat):
/// 1. process_shoot_intents - выстрел прерывает reload ДО всего остального
/// 2. tick_reload_tasks - перенос патронов активных reload'ов
/// 3. process_reload_intents - новый reload тикает впервые через полный интервал
/// 4. spawn_projectiles - spawn service
/// 5. process_projectile_hits - CharacterHit notifications
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldHitTest>()
            .register_type::<Weapon>()
            .register_type::<Magazine>()
            .register_type::<Muzzle>()
            .register_type::<Projectile>();

        app.add_event::<ShootIntent>()
            .add_event::<ReloadIntent>()
            .add_event::<AmmoChanged>()
            .add_event::<ReloadStarted>()
            .add_event::<ReloadStopped>()
            .add_event::<CharacterHit>()
            .add_event::<SpawnProjectile>()
            .add_event::<ProjectileHit>();

        app.add_systems(
            FixedUpdate,
            (
                process_shoot_intents,
                tick_reload_tasks,
                process_reload_intents,
                spawn_projectiles,
                process_projectile_hits,
            )
                .chain()
                .in_set(GameplaySet::Combat),
        );
    }
}
