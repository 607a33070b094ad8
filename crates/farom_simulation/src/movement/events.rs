//! Movement events

use bevy::prelude::*;

/// Event: намерение прыгнуть (jump intent)
///
/// Генерируется:
/// - process_character_input (Jump pressed / touch started)
///
/// Обрабатывается:
/// - apply_jump: прыжок только если персонаж на земле
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpIntent {
    pub entity: Entity,
}
