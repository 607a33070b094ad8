//! Movement компоненты: настройки character movement, накопленный input, kinematic body

use bevy::prelude::*;

use crate::config::MovementConfig;

/// Настройки движения персонажа (character movement component)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CharacterMovement {
    pub max_walk_speed: f32,
    /// Минимальная скорость при слабом analog input
    pub min_analog_walk_speed: f32,
    pub jump_z_velocity: f32,
    /// Доля `jump_z_velocity`, до которой режется подъём после отпускания jump
    pub jump_release_ratio: f32,
    /// Доля управления в воздухе (0..1)
    pub air_control: f32,
    pub braking_deceleration_walking: f32,
    /// Градусы/сек
    pub rotation_rate_yaw: f32,
    pub gravity: f32,
    /// Персонаж разворачивается по направлению движения
    pub orient_rotation_to_movement: bool,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self::from_config(&MovementConfig::default())
    }
}

impl CharacterMovement {
    /// Максимальная скорость подъёма, когда jump уже отпущен
    pub fn released_jump_velocity(&self) -> f32 {
        self.jump_z_velocity * self.jump_release_ratio
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self {
            max_walk_speed: config.max_walk_speed,
            min_analog_walk_speed: config.min_analog_walk_speed,
            jump_z_velocity: config.jump_z_velocity,
            jump_release_ratio: config.jump_release_ratio.clamp(0.0, 1.0),
            air_control: config.air_control,
            braking_deceleration_walking: config.braking_deceleration_walking,
            rotation_rate_yaw: config.rotation_rate_yaw,
            gravity: config.gravity,
            orient_rotation_to_movement: true,
        }
    }

    /// Целевая горизонтальная скорость для input заданной длины (0..1)
    pub fn target_speed(&self, input_magnitude: f32) -> f32 {
        if input_magnitude <= 0.0 {
            return 0.0;
        }
        (self.max_walk_speed * input_magnitude.min(1.0)).max(self.min_analog_walk_speed)
    }
}

/// Накопленный за step movement input (AddMovementInput)
///
/// Input handlers суммируют сюда направления, movement система потребляет
/// и сбрасывает `direction` каждый step.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MovementInput {
    pub direction: Vec3,
    pub jump_held: bool,
}

impl MovementInput {
    pub fn add(&mut self, direction: Vec3, scale: f32) {
        self.direction += direction * scale;
    }
}

/// Kinematic тело персонажа (velocity интегрируем сами)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct KinematicBody {
    pub velocity: Vec3,
    pub grounded: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            grounded: true,
        }
    }
}
