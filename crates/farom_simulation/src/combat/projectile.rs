//! Projectile spawn service + обработка попаданий
//!
//! Полёт и collision projectile - ответственность хоста (physics).
//! ECS только создаёт entity с transform и разбирает ProjectileHit.

use bevy::prelude::*;

use super::events::{CharacterHit, ProjectileHit, SpawnProjectile};
use crate::components::{Character, ProjectileKind};

/// Projectile в мире
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Владелец выстрела (персонаж)
    pub owner: Entity,
}

/// System: spawn service - SpawnProjectile → entity
pub fn spawn_projectiles(mut commands: Commands, mut requests: EventReader<SpawnProjectile>) {
    for request in requests.read() {
        let projectile = commands
            .spawn((
                Projectile {
                    kind: request.kind.clone(),
                    owner: request.owner,
                },
                Transform::from_translation(request.position).with_rotation(request.rotation),
            ))
            .id();

        crate::logger::log(&format!(
            "Spawned {} {:?} at {:?} (owner {:?})",
            request.kind.as_str(),
            projectile,
            request.position,
            request.owner
        ));
    }
}

/// System: ProjectileHit → CharacterHit
///
/// Хост сообщает о collision. Попадания не в персонажа игнорируются,
/// self-hit владельца - тоже.
pub fn process_projectile_hits(
    mut hits: EventReader<ProjectileHit>,
    characters: Query<(), With<Character>>,
    mut character_hit: EventWriter<CharacterHit>,
) {
    for hit in hits.read() {
        if hit.owner == hit.target {
            crate::logger::log(&format!("⚠️ SELF-HIT ignored: {:?}", hit.owner));
            continue;
        }

        if !characters.contains(hit.target) {
            continue;
        }

        character_hit.write(CharacterHit {
            character: hit.target,
        });
        crate::logger::log(&format!(
            "🎯 {:?} hit {:?} (projectile {:?})",
            hit.owner, hit.target, hit.projectile
        ));
    }
}
