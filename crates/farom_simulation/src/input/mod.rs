//! Player input module
//!
//! ```text
//! Host input (keyboard/mouse/gamepad/touch)
//!     ↓
//! InputBindings (named action/axis → InputAction) - bindings.rs
//!     ↓
//! CharacterInput (ECS event) - events.rs
//!     ↓
//! process_character_input (handlers) - systems.rs
//!     ↓
//! ControlRotation / MovementInput / ShootIntent / ReloadIntent / JumpIntent
//! ```

use bevy::prelude::*;

pub mod bindings;
pub mod events;
pub mod systems;

pub use bindings::*;
pub use events::*;
pub use systems::*;

use crate::GameplaySet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBindings>()
            .add_event::<CharacterInput>()
            .add_systems(FixedUpdate, process_character_input.in_set(GameplaySet::Input));
    }
}
