//! Weapon pickup: overlap → attach к персонажу
//!
//! # Flow
//! 1. detect_pickup_overlaps - capsule персонажа начал пересекаться с PickupSphere → OverlapStarted
//! 2. process_weapon_pickups - capability check (Character + Pickupable Weapon) → HeldWeapon/HeldBy
//! 3. follow_weapon_socket - held weapon следует за сокетом "Weapon" владельца
//!
//! Хост с настоящей физикой может слать OverlapStarted сам.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::components::{
    CapsuleSize, Character, HeldBy, HeldWeapon, PickupSphere, Pickupable, Weapon, WeaponSocket,
};
use crate::GameplaySet;

/// Event: два тела начали пересекаться (порядок a/b не важен)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapStarted {
    pub a: Entity,
    pub b: Entity,
}

pub struct PickupPlugin;

impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OverlapStarted>()
            .register_type::<Pickupable>()
            .register_type::<PickupSphere>()
            .register_type::<HeldBy>()
            .add_systems(
                FixedUpdate,
                (detect_pickup_overlaps, process_weapon_pickups)
                    .chain()
                    .in_set(GameplaySet::Pickup),
            )
            .add_systems(FixedUpdate, follow_weapon_socket.in_set(GameplaySet::Attachment));
    }
}

/// Пересекается ли вертикальная capsule с шаром
pub fn capsule_overlaps_sphere(
    capsule_center: Vec3,
    capsule: &CapsuleSize,
    sphere_center: Vec3,
    sphere_radius: f32,
) -> bool {
    let segment_half = (capsule.half_height - capsule.radius).max(0.0);
    let closest_y = sphere_center
        .y
        .clamp(capsule_center.y - segment_half, capsule_center.y + segment_half);
    let closest = Vec3::new(capsule_center.x, closest_y, capsule_center.z);

    let reach = capsule.radius + sphere_radius;
    closest.distance_squared(sphere_center) <= reach * reach
}

/// System: begin-overlap detection (capsule персонажа vs включённая PickupSphere)
///
/// OverlapStarted шлётся один раз на начало пересечения; пара забывается,
/// когда пересечение заканчивается или sphere выключена.
pub fn detect_pickup_overlaps(
    characters: Query<(Entity, &Transform, &CapsuleSize), With<Character>>,
    spheres: Query<(Entity, &Transform, &PickupSphere)>,
    mut overlapping: Local<HashSet<(Entity, Entity)>>,
    mut overlaps: EventWriter<OverlapStarted>,
) {
    let mut current = HashSet::new();

    for (character, character_transform, capsule) in characters.iter() {
        for (body, sphere_transform, sphere) in spheres.iter() {
            if !sphere.enabled || body == character {
                continue;
            }
            if !capsule_overlaps_sphere(
                character_transform.translation,
                capsule,
                sphere_transform.translation,
                sphere.radius,
            ) {
                continue;
            }

            let pair = (character, body);
            if !overlapping.contains(&pair) {
                overlaps.write(OverlapStarted {
                    a: character,
                    b: body,
                });
            }
            current.insert(pair);
        }
    }

    *overlapping = current;
}

/// System: OverlapStarted → подбор оружия
///
/// Capability check: одна сторона - Character, другая - Weapon с Pickupable.
/// Всё остальное игнорируется (никаких cast'ов).
/// Guards: персонаж уже держит оружие, оружие уже у кого-то → no-op.
pub fn process_weapon_pickups(
    mut commands: Commands,
    mut overlaps: EventReader<OverlapStarted>,
    mut characters: Query<&mut HeldWeapon, With<Character>>,
    mut weapons: Query<(Option<&mut PickupSphere>, Option<&HeldBy>), (With<Weapon>, With<Pickupable>)>,
) {
    // Commands применяются после системы: помним, что уже раздали в этом step
    let mut claimed = HashSet::new();

    for overlap in overlaps.read() {
        let (character, weapon) = if characters.contains(overlap.a) && weapons.contains(overlap.b) {
            (overlap.a, overlap.b)
        } else if characters.contains(overlap.b) && weapons.contains(overlap.a) {
            (overlap.b, overlap.a)
        } else {
            continue;
        };

        let Ok(mut held) = characters.get_mut(character) else {
            continue;
        };
        if held.0.is_some() {
            crate::logger::log(&format!(
                "{:?}: pickup of {:?} ignored (already holds {:?})",
                character, weapon, held.0
            ));
            continue;
        }

        let Ok((sphere, held_by)) = weapons.get_mut(weapon) else {
            continue;
        };
        if held_by.is_some() || claimed.contains(&weapon) {
            continue;
        }

        held.0 = Some(weapon);
        if let Some(mut sphere) = sphere {
            sphere.enabled = false;
        }
        claimed.insert(weapon);
        commands
            .entity(weapon)
            .remove::<Pickupable>()
            .insert(HeldBy { character });

        crate::logger::log_info(&format!("🔫 {:?} picked up weapon {:?}", character, weapon));
    }
}

/// System: held weapon следует за сокетом владельца
pub fn follow_weapon_socket(
    owners: Query<(&Transform, &WeaponSocket), With<Character>>,
    mut weapons: Query<(&HeldBy, &mut Transform), (With<Weapon>, Without<Character>)>,
) {
    for (held_by, mut transform) in weapons.iter_mut() {
        let Ok((owner, socket)) = owners.get(held_by.character) else {
            continue;
        };
        transform.translation = owner.translation + owner.rotation * socket.offset;
        transform.rotation = owner.rotation;
    }
}
