//! Player control marker component

use bevy::prelude::Component;

/// Marker: pawn, которым управляет локальный игрок
///
/// Ставится на default pawn, заспавненный game mode.
/// Input bridge хоста ищет получателя `CharacterInput` через `With<Player>`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
