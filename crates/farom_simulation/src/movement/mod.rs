//! Movement domain - kinematic движение персонажа
//!
//! Содержит:
//! - JumpIntent (event для прыжка)
//! - apply_jump / apply_jump_release / apply_movement_input / apply_gravity / integrate_velocity / ground_detection

use bevy::prelude::*;

pub mod events;
pub mod systems;

pub use events::*;
pub use systems::*;

use crate::GameplaySet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<JumpIntent>().add_systems(
            FixedUpdate,
            (
                apply_jump,
                apply_jump_release,
                apply_movement_input,
                apply_gravity,
                integrate_velocity,
                ground_detection,
            )
                .chain()
                .in_set(GameplaySet::Movement),
        );
    }
}
