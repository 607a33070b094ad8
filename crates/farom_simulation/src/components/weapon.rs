//! Weapon компоненты: магазин, muzzle, pickup volume, владелец

use bevy::prelude::*;

use super::character::AmmoReserve;

/// Оружие (pickup actor в мире)
///
/// Создаётся независимо от персонажа, становится "held" при overlap.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(Magazine, Muzzle, Transform)]
pub struct Weapon {
    /// Какой projectile спавнить на выстрел
    pub projectile: ProjectileKind,
}

/// Идентификатор projectile класса (например "BP_Bullet")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub struct ProjectileKind(pub String);

impl ProjectileKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Магазин оружия
///
/// Инвариант: 0 ≤ current ≤ max, max > 0 (max фиксирован при создании)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Magazine {
    current: u32,
    max: u32,
}

impl Default for Magazine {
    fn default() -> Self {
        Self::new(3, 5)
    }
}

impl Magazine {
    /// `max` = 0 поднимается до 1, `current` клампится к `max`
    pub fn new(current: u32, max: u32) -> Self {
        let max = max.max(1);
        Self {
            current: current.min(max),
            max,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Списать один патрон на выстрел. `false` = магазин пуст, ничего не изменилось
    pub fn try_consume(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Перенести ровно один патрон из reserve в магазин (AmmoLoad)
    ///
    /// `false` = reserve пуст или магазин полон, ничего не изменилось.
    pub fn load_from(&mut self, reserve: &mut AmmoReserve) -> bool {
        if self.is_full() || !reserve.take_one() {
            return false;
        }
        self.current += 1;
        true
    }
}

/// Muzzle socket в local space оружия
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Muzzle {
    pub offset: Vec3,
}

impl Muzzle {
    /// Мировая позиция muzzle для данного transform оружия
    pub fn world_position(&self, weapon_transform: &Transform) -> Vec3 {
        weapon_transform.transform_point(self.offset)
    }
}

/// Capability marker: entity можно подобрать как оружие
///
/// Pickup handler рассматривает только entity с этим маркером;
/// остальные overlap'ы игнорируются. Снимается при подборе.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Pickupable;

/// Pickup collision volume (sphere)
///
/// `enabled = false` после подбора (one-shot, обратно не включается).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PickupSphere {
    pub radius: f32,
    pub enabled: bool,
}

impl Default for PickupSphere {
    fn default() -> Self {
        Self {
            radius: 32.0,
            enabled: true,
        }
    }
}

/// Кто держит оружие (кто имеет право из него стрелять)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct HeldBy {
    pub character: Entity,
}
