//! Camera rig: control rotation + spring arm (camera boom) + follow camera
//!
//! Конвенции (bevy): Y вверх, forward = -Z.
//! Yaw/pitch в градусах: положительный yaw - поворот вправо,
//! положительный pitch - взгляд вверх.

use bevy::prelude::*;

/// Предел pitch (не даём камере перевернуться через полюс)
pub const PITCH_LIMIT: f32 = 89.0;

/// Control rotation контроллера (куда смотрит игрок)
///
/// Персонаж сам по controller rotation НЕ вращается - вращается только boom.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ControlRotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl ControlRotation {
    pub fn add_yaw(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(360.0);
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Только yaw (для move forward/right - движение по земле)
    pub fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw.to_radians())
    }

    /// Полная rotation взгляда (yaw + pitch)
    pub fn view_rotation(&self) -> Quat {
        self.yaw_rotation() * Quat::from_rotation_x(self.pitch.to_radians())
    }

    pub fn forward(&self) -> Vec3 {
        self.view_rotation() * Vec3::NEG_Z
    }
}

/// Camera boom (spring arm)
///
/// Follow camera висит на конце boom, на `arm_length` позади pivot.
/// `use_pawn_control_rotation` - boom вращается по control rotation.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CameraBoom {
    pub arm_length: f32,
    pub pivot_offset: Vec3,
    pub use_pawn_control_rotation: bool,
}

impl Default for CameraBoom {
    fn default() -> Self {
        Self {
            arm_length: 400.0,
            pivot_offset: Vec3::new(0.0, 60.0, 0.0),
            use_pawn_control_rotation: true,
        }
    }
}

/// Положение и направление follow camera (view origin для hit-test)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub origin: Vec3,
    pub forward: Vec3,
}

/// Рассчитать follow camera для персонажа
///
/// Без boom collision probe: arm всегда полной длины.
pub fn camera_view(transform: &Transform, control: &ControlRotation, boom: &CameraBoom) -> CameraView {
    let rotation = if boom.use_pawn_control_rotation {
        control.view_rotation()
    } else {
        transform.rotation
    };

    let forward = rotation * Vec3::NEG_Z;
    let pivot = transform.translation + boom.pivot_offset;

    CameraView {
        origin: pivot - forward * boom.arm_length,
        forward,
    }
}
