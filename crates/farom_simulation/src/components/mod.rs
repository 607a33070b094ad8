//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - character: персонаж (AmmoReserve, HeldWeapon, ReloadState)
//! - weapon: оружие (Weapon, Magazine, Muzzle, Pickupable, HeldBy)
//! - camera: control rotation + camera boom
//! - movement: character movement, input, kinematic body
//! - player: player control marker (Player)

pub mod camera;
pub mod character;
pub mod movement;
pub mod player;
pub mod weapon;

// Re-exports для удобного импорта
pub use camera::*;
pub use character::*;
pub use movement::*;
pub use player::*;
pub use weapon::*;
