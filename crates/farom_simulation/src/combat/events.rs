//! Combat events
//!
//! Intents (input → combat systems):
//! - `ShootIntent`, `ReloadIntent`
//!
//! Notifications (combat systems → HUD/animation listeners):
//! - `AmmoChanged`, `ReloadStarted`, `ReloadStopped`, `CharacterHit`
//!
//! Spawn service / hit reports:
//! - `SpawnProjectile` (fire-and-forget), `ProjectileHit` (host → ECS)

use bevy::prelude::*;

use crate::components::ProjectileKind;

/// Event: персонаж хочет выстрелить (primary action pressed)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShootIntent {
    pub character: Entity,
}

/// Event: персонаж хочет перезарядиться (reload pressed)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadIntent {
    pub character: Entity,
}

/// Notification: количество патронов в магазине изменилось
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmoChanged {
    pub weapon: Entity,
}

/// Notification: перезарядка началась
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadStarted {
    pub character: Entity,
}

/// Notification: перезарядка закончилась (завершена или прервана выстрелом)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadStopped {
    pub character: Entity,
}

/// Notification: в персонажа попали
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterHit {
    pub character: Entity,
}

/// Spawn service request: заспавнить projectile
///
/// **Note:** fire-and-forget - ответа нет, entity projectile никто не ждёт.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SpawnProjectile {
    pub kind: ProjectileKind,
    /// Мировая позиция muzzle
    pub position: Vec3,
    /// Ориентация (forward = -Z смотрит на точку прицеливания)
    pub rotation: Quat,
    /// Владелец выстрела (персонаж)
    pub owner: Entity,
}

/// Event: projectile попал в entity (host collision → ECS)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub projectile: Entity,
    /// Кто выстрелил (для предотвращения self-hit)
    pub owner: Entity,
    /// В кого попали
    pub target: Entity,
}
