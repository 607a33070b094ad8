//! Shoot: отмена reload → hit-test от камеры → выстрел из held weapon

use bevy::prelude::*;

use super::events::{AmmoChanged, ReloadStopped, ShootIntent, SpawnProjectile};
use super::hit_test::WorldHitTest;
use crate::components::{
    camera_view, CameraBoom, Character, ControlRotation, HeldBy, HeldWeapon, Magazine, Muzzle,
    ReloadState, Weapon,
};
use crate::config::GameplayConfig;

/// Ориентация projectile: из muzzle на точку прицеливания
pub fn aim_rotation(from: Vec3, to: Vec3) -> Quat {
    Transform::from_translation(from).looking_at(to, Vec3::Y).rotation
}

/// System: обработка ShootIntent
///
/// Порядок:
/// 1. Reloading → Idle + ReloadStopped (уже перенесённые патроны остаются)
/// 2. Нет held weapon → no-op
/// 3. Один line trace из follow camera на `trace_distance`
/// 4. Пустой магазин → no-op, иначе -1 патрон, SpawnProjectile, AmmoChanged
pub fn process_shoot_intents(
    mut intents: EventReader<ShootIntent>,
    mut characters: Query<
        (&Transform, &ControlRotation, &CameraBoom, &HeldWeapon, &mut ReloadState),
        With<Character>,
    >,
    mut weapons: Query<(&Weapon, &mut Magazine, &Muzzle, &Transform, &HeldBy)>,
    hit_test: Res<WorldHitTest>,
    config: Res<GameplayConfig>,
    mut reload_stopped: EventWriter<ReloadStopped>,
    mut spawn_requests: EventWriter<SpawnProjectile>,
    mut ammo_changed: EventWriter<AmmoChanged>,
) {
    for intent in intents.read() {
        let Ok((transform, control, boom, held, mut reload)) = characters.get_mut(intent.character)
        else {
            continue;
        };

        if reload.is_reloading() {
            *reload = ReloadState::Idle;
            reload_stopped.write(ReloadStopped {
                character: intent.character,
            });
            crate::logger::log(&format!(
                "🔫 {:?}: shot interrupts reload",
                intent.character
            ));
        }

        let Some(weapon_entity) = held.0 else {
            crate::logger::log(&format!("{:?}: shoot ignored (no weapon)", intent.character));
            continue;
        };

        // Stale reference (оружие удалено или принадлежит другому) → no-op
        let Ok((weapon, mut magazine, muzzle, weapon_transform, held_by)) =
            weapons.get_mut(weapon_entity)
        else {
            continue;
        };
        if held_by.character != intent.character {
            continue;
        }

        let view = camera_view(transform, control, boom);
        let target = hit_test
            .line_trace(view.origin, view.forward, config.weapon.trace_distance)
            .location();

        if !magazine.try_consume() {
            crate::logger::log(&format!("{:?}: click (magazine empty)", weapon_entity));
            continue;
        }

        let position = muzzle.world_position(weapon_transform);
        spawn_requests.write(SpawnProjectile {
            kind: weapon.projectile.clone(),
            position,
            rotation: aim_rotation(position, target),
            owner: intent.character,
        });
        ammo_changed.write(AmmoChanged {
            weapon: weapon_entity,
        });

        crate::logger::log(&format!(
            "🔫 {:?} fired {} at {:?} (ammo {}/{})",
            intent.character,
            weapon.projectile.as_str(),
            target,
            magazine.current(),
            magazine.max()
        ));
    }
}
