//! Character компоненты: reserve патронов, held weapon, reload state

use bevy::prelude::*;

use super::camera::{CameraBoom, ControlRotation};
use super::movement::{CharacterMovement, KinematicBody, MovementInput};

/// Игровой персонаж (third-person)
///
/// Через Required Components получает весь набор: ammo state, камеру, движение.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    AmmoReserve,
    HeldWeapon,
    ReloadState,
    ControlRotation,
    CameraBoom,
    MovementInput,
    KinematicBody,
    CharacterMovement,
    CapsuleSize,
    WeaponSocket,
    Transform
)]
pub struct Character;

/// Запас патронов вне оружия
///
/// Инвариант: никогда не уходит в минус (u32 + guarded take)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AmmoReserve(pub u32);

impl Default for AmmoReserve {
    fn default() -> Self {
        Self(20)
    }
}

impl AmmoReserve {
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Забрать один патрон. `false` если reserve пуст
    pub fn take_one(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

/// Текущее оружие персонажа
///
/// Оружием владеет мир (entity), персонаж хранит только ссылку.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct HeldWeapon(pub Option<Entity>);

/// Reload state machine: Idle ↔ Reloading
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub enum ReloadState {
    #[default]
    Idle,
    Reloading(ReloadTask),
}

impl ReloadState {
    pub fn is_reloading(&self) -> bool {
        matches!(self, ReloadState::Reloading(_))
    }
}

/// Repeating reload task
///
/// Хранит остаток интервала до следующего tick. Host loop продвигает его
/// раз в simulation step; отмена = замена `ReloadState` на `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ReloadTask {
    /// Период tick (секунды)
    pub interval: f32,
    /// Сколько осталось до следующего tick
    pub remaining: f32,
}

/// Минимальный период reload tick (секунды)
pub const MIN_RELOAD_INTERVAL: f32 = 0.001;

impl ReloadTask {
    /// Первый tick - через полный `interval` после старта
    ///
    /// Нулевой, отрицательный или не конечный interval поднимается до `MIN_RELOAD_INTERVAL`.
    pub fn new(interval: f32) -> Self {
        let interval = if interval.is_finite() {
            interval.max(MIN_RELOAD_INTERVAL)
        } else {
            MIN_RELOAD_INTERVAL
        };
        Self {
            interval,
            remaining: interval,
        }
    }

    /// Продвинуть task на `delta` секунд, вернуть число сработавших tick'ов
    ///
    /// Число tick'ов считается за O(1) и насыщается на `u32::MAX`;
    /// после вызова `remaining` всегда в (0, interval].
    pub fn advance(&mut self, delta: f32) -> u32 {
        self.remaining -= delta.max(0.0);
        if self.remaining > 0.0 {
            return 0;
        }

        let overdue = -self.remaining;
        // `as` для float → u32 насыщается (inf → u32::MAX)
        let fired = ((overdue / self.interval).floor() as u32).saturating_add(1);

        let carry = overdue % self.interval;
        self.remaining = if carry.is_finite() {
            self.interval - carry
        } else {
            self.interval
        };
        fired
    }
}

/// Collision capsule персонажа
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CapsuleSize {
    pub radius: f32,
    pub half_height: f32,
}

impl Default for CapsuleSize {
    fn default() -> Self {
        Self {
            radius: 42.0,
            half_height: 96.0,
        }
    }
}

/// Сокет "Weapon" на mesh персонажа (offset в local space)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct WeaponSocket {
    pub offset: Vec3,
}
