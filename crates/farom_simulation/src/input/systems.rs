//! Input handlers персонажа
//!
//! Handlers - обычные функции над компонентами (легко тестировать без App).
//! `process_character_input` раскидывает CharacterInput по handlers;
//! shoot/reload/jump превращаются в intent events для combat/movement систем.

use bevy::prelude::*;

use super::events::{CharacterInput, InputAction};
use crate::combat::{ReloadIntent, ShootIntent};
use crate::components::{Character, ControlRotation, MovementInput};
use crate::config::GameplayConfig;
use crate::movement::JumpIntent;

/// Move forward/backward относительно yaw камеры
pub fn on_move_forward(control: &ControlRotation, input: &mut MovementInput, value: f32) {
    if value == 0.0 {
        return;
    }
    let direction = control.yaw_rotation() * Vec3::NEG_Z;
    input.add(direction, value);
}

/// Move right/left относительно yaw камеры
pub fn on_move_right(control: &ControlRotation, input: &mut MovementInput, value: f32) {
    if value == 0.0 {
        return;
    }
    let direction = control.yaw_rotation() * Vec3::X;
    input.add(direction, value);
}

/// Gamepad turn: rate → дельта за этот step
pub fn on_turn_rate(control: &mut ControlRotation, rate: f32, turn_rate: f32, delta_secs: f32) {
    control.add_yaw(rate * turn_rate * delta_secs);
}

/// Gamepad look up/down: rate → дельта за этот step
pub fn on_look_rate(control: &mut ControlRotation, rate: f32, turn_rate: f32, delta_secs: f32) {
    control.add_pitch(rate * turn_rate * delta_secs);
}

/// Mouse turn: абсолютная дельта
pub fn on_turn(control: &mut ControlRotation, value: f32) {
    control.add_yaw(value);
}

/// Mouse look up/down: абсолютная дельта
pub fn on_look_up(control: &mut ControlRotation, value: f32) {
    control.add_pitch(value);
}

/// Primary action pressed → ShootIntent
pub fn on_shoot_pressed(character: Entity, shoot_intents: &mut EventWriter<ShootIntent>) {
    shoot_intents.write(ShootIntent { character });
}

pub fn on_reload_pressed(character: Entity, reload_intents: &mut EventWriter<ReloadIntent>) {
    reload_intents.write(ReloadIntent { character });
}

pub fn on_jump_pressed(
    character: Entity,
    input: &mut MovementInput,
    jump_intents: &mut EventWriter<JumpIntent>,
) {
    input.jump_held = true;
    jump_intents.write(JumpIntent { entity: character });
}

pub fn on_jump_released(input: &mut MovementInput) {
    input.jump_held = false;
}

/// Touch screen: касание = прыжок
pub fn on_touch_started(
    character: Entity,
    input: &mut MovementInput,
    jump_intents: &mut EventWriter<JumpIntent>,
) {
    on_jump_pressed(character, input, jump_intents);
}

pub fn on_touch_stopped(input: &mut MovementInput) {
    on_jump_released(input);
}

/// System: CharacterInput → handlers / intents
pub fn process_character_input(
    mut inputs: EventReader<CharacterInput>,
    mut characters: Query<(&mut ControlRotation, &mut MovementInput), With<Character>>,
    config: Res<GameplayConfig>,
    time: Res<Time>,
    mut shoot_intents: EventWriter<ShootIntent>,
    mut reload_intents: EventWriter<ReloadIntent>,
    mut jump_intents: EventWriter<JumpIntent>,
) {
    let turn_rate = config.character.turn_rate_gamepad;
    let delta = time.delta_secs();

    for input in inputs.read() {
        let character = input.character;
        let Ok((mut control, mut movement)) = characters.get_mut(character) else {
            crate::logger::log(&format!("Input for unknown character {:?} dropped", character));
            continue;
        };

        match input.action {
            InputAction::ShootPressed => on_shoot_pressed(character, &mut shoot_intents),
            InputAction::ReloadPressed => on_reload_pressed(character, &mut reload_intents),
            InputAction::JumpPressed => on_jump_pressed(character, &mut movement, &mut jump_intents),
            InputAction::JumpReleased => on_jump_released(&mut movement),
            InputAction::TouchStarted => on_touch_started(character, &mut movement, &mut jump_intents),
            InputAction::TouchStopped => on_touch_stopped(&mut movement),
            InputAction::MoveForward(value) => on_move_forward(&control, &mut movement, value),
            InputAction::MoveRight(value) => on_move_right(&control, &mut movement, value),
            InputAction::Turn(value) => on_turn(&mut control, value),
            InputAction::TurnRate(rate) => on_turn_rate(&mut control, rate, turn_rate, delta),
            InputAction::LookUp(value) => on_look_up(&mut control, value),
            InputAction::LookRate(rate) => on_look_rate(&mut control, rate, turn_rate, delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward_follows_yaw() {
        let mut control = ControlRotation::default();
        control.add_yaw(90.0);
        let mut input = MovementInput::default();

        on_move_forward(&control, &mut input, 1.0);
        assert!((input.direction - Vec3::X).length() < 1e-4, "{:?}", input.direction);
    }

    #[test]
    fn test_move_ignores_pitch() {
        let mut control = ControlRotation::default();
        control.add_pitch(60.0);
        let mut input = MovementInput::default();

        on_move_forward(&control, &mut input, 1.0);
        assert_eq!(input.direction.y, 0.0);
    }

    #[test]
    fn test_zero_axis_is_noop() {
        let control = ControlRotation::default();
        let mut input = MovementInput::default();
        on_move_forward(&control, &mut input, 0.0);
        on_move_right(&control, &mut input, 0.0);
        assert_eq!(input.direction, Vec3::ZERO);
    }

    #[test]
    fn test_turn_rate_scales_by_delta() {
        let mut control = ControlRotation::default();
        // 1.0 * 50 deg/s * 0.5 s = 25 deg
        on_turn_rate(&mut control, 1.0, 50.0, 0.5);
        assert_eq!(control.yaw, 25.0);

        on_look_rate(&mut control, -1.0, 50.0, 0.2);
        assert_eq!(control.pitch, -10.0);
    }

    #[test]
    fn test_mouse_deltas() {
        let mut control = ControlRotation::default();
        on_turn(&mut control, 15.0);
        on_look_up(&mut control, 5.0);
        assert_eq!(control.yaw, 15.0);
        assert_eq!(control.pitch, 5.0);
    }
}
