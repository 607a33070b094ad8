//! Kinematic движение персонажа
//!
//! Headless stub вместо engine character movement: пол на y = 0,
//! velocity интегрируем сами. Работает в FixedUpdate.

use bevy::prelude::*;

use super::events::JumpIntent;
use crate::components::{CharacterMovement, KinematicBody, MovementInput};

/// Yaw rotation, при которой forward (-Z) смотрит вдоль `direction` (XZ)
pub fn facing_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_y((-direction.x).atan2(-direction.z))
}

/// System: JumpIntent → вертикальная скорость (только с земли)
pub fn apply_jump(
    mut intents: EventReader<JumpIntent>,
    mut bodies: Query<(&CharacterMovement, &mut KinematicBody)>,
) {
    for intent in intents.read() {
        let Ok((movement, mut body)) = bodies.get_mut(intent.entity) else {
            continue;
        };
        if !body.grounded {
            continue;
        }
        body.velocity.y = movement.jump_z_velocity;
        body.grounded = false;
    }
}

/// System: отпущенный jump обрезает подъём (variable jump height)
///
/// Пока jump держат, персонаж летит по полной дуге. После отпускания
/// вертикальная скорость вверх ограничена `released_jump_velocity`.
pub fn apply_jump_release(mut query: Query<(&CharacterMovement, &MovementInput, &mut KinematicBody)>) {
    for (movement, input, mut body) in query.iter_mut() {
        if input.jump_held || body.grounded {
            continue;
        }
        let cap = movement.released_jump_velocity();
        if body.velocity.y > cap {
            body.velocity.y = cap;
        }
    }
}

/// System: накопленный MovementInput → горизонтальная velocity + разворот
///
/// - На земле: velocity = target сразу
/// - В воздухе: lerp к target с долей `air_control`
/// - Нет input на земле: braking deceleration
pub fn apply_movement_input(
    mut query: Query<(&CharacterMovement, &mut MovementInput, &mut KinematicBody, &mut Transform)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (movement, mut input, mut body, mut transform) in query.iter_mut() {
        let wish = Vec3::new(input.direction.x, 0.0, input.direction.z);
        input.direction = Vec3::ZERO;

        let mut horizontal = Vec3::new(body.velocity.x, 0.0, body.velocity.z);
        let magnitude = wish.length();

        if magnitude > f32::EPSILON {
            let direction = wish / magnitude;
            let target = direction * movement.target_speed(magnitude);

            horizontal = if body.grounded {
                target
            } else {
                horizontal.lerp(target, movement.air_control)
            };

            if movement.orient_rotation_to_movement {
                let max_angle = movement.rotation_rate_yaw.to_radians() * delta;
                transform.rotation = transform
                    .rotation
                    .rotate_towards(facing_rotation(direction), max_angle);
            }
        } else if body.grounded {
            let speed = horizontal.length();
            let braked = (speed - movement.braking_deceleration_walking * delta).max(0.0);
            horizontal = horizontal.normalize_or_zero() * braked;
        }

        body.velocity.x = horizontal.x;
        body.velocity.z = horizontal.z;
    }
}

/// System: гравитация для тел в воздухе
pub fn apply_gravity(mut query: Query<(&CharacterMovement, &mut KinematicBody)>, time: Res<Time>) {
    let delta = time.delta_secs();

    for (movement, mut body) in query.iter_mut() {
        if !body.grounded {
            body.velocity.y += movement.gravity * delta;
        }
    }
}

/// System: position += velocity * dt
pub fn integrate_velocity(mut query: Query<(&KinematicBody, &mut Transform)>, time: Res<Time>) {
    let delta = time.delta_secs();

    for (body, mut transform) in query.iter_mut() {
        transform.translation += body.velocity * delta;
    }
}

/// System: ground detection (плоский пол на y = 0)
pub fn ground_detection(mut query: Query<(&mut KinematicBody, &mut Transform)>) {
    for (mut body, mut transform) in query.iter_mut() {
        if transform.translation.y <= 0.0 && body.velocity.y <= 0.0 {
            transform.translation.y = 0.0;
            body.velocity.y = 0.0;
            body.grounded = true;
        } else {
            body.grounded = false;
        }
    }
}
