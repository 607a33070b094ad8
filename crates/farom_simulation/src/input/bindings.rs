//! Named input binding table
//!
//! Хост отдаёт сырые именованные события ("PrimaryAction" pressed,
//! "Move Forward / Backward" = 0.7), таблица превращает их в `InputAction`.

use std::collections::HashMap;

use bevy::prelude::*;

use super::events::InputAction;

/// Discrete action binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionBinding {
    Jump,
    Shoot,
    Reload,
}

/// Axis binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisBinding {
    MoveForward,
    MoveRight,
    /// Мышь: абсолютная дельта
    Turn,
    /// Gamepad: rate
    TurnRate,
    LookUp,
    LookRate,
}

#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    actions: HashMap<String, ActionBinding>,
    axes: HashMap<String, AxisBinding>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();

        bindings.bind_action("Jump", ActionBinding::Jump);
        bindings.bind_action("PrimaryAction", ActionBinding::Shoot);
        bindings.bind_action("Reload", ActionBinding::Reload);

        bindings.bind_axis("Move Forward / Backward", AxisBinding::MoveForward);
        bindings.bind_axis("Move Right / Left", AxisBinding::MoveRight);
        // Две версии поворота: мышь даёт абсолютную дельту, stick - rate
        bindings.bind_axis("Turn Right / Left Mouse", AxisBinding::Turn);
        bindings.bind_axis("Turn Right / Left Gamepad", AxisBinding::TurnRate);
        bindings.bind_axis("Look Up / Down Mouse", AxisBinding::LookUp);
        bindings.bind_axis("Look Up / Down Gamepad", AxisBinding::LookRate);

        bindings
    }
}

impl InputBindings {
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
            axes: HashMap::new(),
        }
    }

    pub fn bind_action(&mut self, name: impl Into<String>, binding: ActionBinding) {
        self.actions.insert(name.into(), binding);
    }

    pub fn bind_axis(&mut self, name: impl Into<String>, binding: AxisBinding) {
        self.axes.insert(name.into(), binding);
    }

    /// Pressed/released событие по имени action
    ///
    /// Shoot и Reload реагируют только на pressed.
    pub fn resolve_action(&self, name: &str, pressed: bool) -> Option<InputAction> {
        match (self.actions.get(name)?, pressed) {
            (ActionBinding::Jump, true) => Some(InputAction::JumpPressed),
            (ActionBinding::Jump, false) => Some(InputAction::JumpReleased),
            (ActionBinding::Shoot, true) => Some(InputAction::ShootPressed),
            (ActionBinding::Reload, true) => Some(InputAction::ReloadPressed),
            (ActionBinding::Shoot | ActionBinding::Reload, false) => None,
        }
    }

    pub fn resolve_axis(&self, name: &str, value: f32) -> Option<InputAction> {
        let action = match self.axes.get(name)? {
            AxisBinding::MoveForward => InputAction::MoveForward(value),
            AxisBinding::MoveRight => InputAction::MoveRight(value),
            AxisBinding::Turn => InputAction::Turn(value),
            AxisBinding::TurnRate => InputAction::TurnRate(value),
            AxisBinding::LookUp => InputAction::LookUp(value),
            AxisBinding::LookRate => InputAction::LookRate(value),
        };
        Some(action)
    }
}
