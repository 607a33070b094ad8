//! Character input events
//!
//! Генерируются хостом (input device bridge) и обрабатываются
//! `process_character_input` в начале каждого step.

use bevy::prelude::*;

/// Один input сигнал для конкретного персонажа
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CharacterInput {
    pub character: Entity,
    pub action: InputAction,
}

impl CharacterInput {
    pub fn new(character: Entity, action: InputAction) -> Self {
        Self { character, action }
    }
}

/// Discrete presses + continuous axis values
///
/// Axis значения:
/// - `MoveForward` / `MoveRight`: -1.0..1.0 (положительное = вперёд/вправо)
/// - `Turn` / `LookUp`: абсолютная дельта в градусах (мышь)
/// - `TurnRate` / `LookRate`: скорость -1.0..1.0 (gamepad stick)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    JumpPressed,
    JumpReleased,
    ShootPressed,
    ReloadPressed,
    MoveForward(f32),
    MoveRight(f32),
    Turn(f32),
    TurnRate(f32),
    LookUp(f32),
    LookRate(f32),
    /// Touch screen: начало касания = прыжок
    TouchStarted,
    TouchStopped,
}
