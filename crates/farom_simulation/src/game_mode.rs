//! Game mode: выбор default pawn class + spawn helpers
//!
//! Game mode игры запрашивает Blueprint персонажа третьего лица; если класс
//! не найден, остаётся engine default pawn (spectator без оружия и ammo).

use bevy::prelude::*;

use crate::components::{
    AmmoReserve, CameraBoom, CapsuleSize, Character, CharacterMovement, Magazine, Muzzle,
    PickupSphere, Pickupable, Player, ProjectileKind, Weapon, WeaponSocket,
};
use crate::config::GameplayConfig;

/// Blueprint путь playable персонажа
pub const THIRD_PERSON_CHARACTER_PATH: &str = "/Game/ThirdPerson/Blueprints/BP_ThirdPersonCharacter";

/// Класс pawn, который спавнится для игрока
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PawnClass {
    /// Engine default pawn: только transform, без персонажа
    #[default]
    Spectator,
    /// Игровой персонаж (Character + камера + ammo)
    ThirdPersonCharacter,
}

impl PawnClass {
    /// Найти класс по asset пути
    pub fn find(path: &str) -> Option<Self> {
        match path {
            THIRD_PERSON_CHARACTER_PATH => Some(PawnClass::ThirdPersonCharacter),
            _ => None,
        }
    }
}

/// Game mode resource
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMode {
    pub default_pawn_class: PawnClass,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::with_requested(Some(THIRD_PERSON_CHARACTER_PATH))
    }
}

impl GameMode {
    /// Запрошенный класс найден → он становится default, иначе engine default
    pub fn with_requested(path: Option<&str>) -> Self {
        let default_pawn_class = path.and_then(PawnClass::find).unwrap_or_default();
        Self { default_pawn_class }
    }
}

/// Где появляется pawn игрока
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerStart {
    pub position: Vec3,
}

/// Startup system: spawn default pawn игрока в PlayerStart
pub fn spawn_default_pawn(
    mut commands: Commands,
    game_mode: Res<GameMode>,
    start: Res<PlayerStart>,
    config: Res<GameplayConfig>,
) {
    let pawn = match game_mode.default_pawn_class {
        PawnClass::ThirdPersonCharacter => {
            let character = spawn_character(&mut commands, &config, start.position);
            commands.entity(character).insert(Player);
            character
        }
        PawnClass::Spectator => commands
            .spawn((Player, Transform::from_translation(start.position)))
            .id(),
    };

    crate::logger::log_info(&format!(
        "Default pawn {:?} ({:?}) spawned at {:?}",
        pawn, game_mode.default_pawn_class, start.position
    ));
}

/// Spawn персонажа с параметрами из config
pub fn spawn_character(commands: &mut Commands, config: &GameplayConfig, position: Vec3) -> Entity {
    commands
        .spawn((
            Character,
            Transform::from_translation(position),
            AmmoReserve(config.character.starting_reserve),
            CapsuleSize {
                radius: config.character.capsule_radius,
                half_height: config.character.capsule_half_height,
            },
            CameraBoom {
                arm_length: config.camera.arm_length,
                pivot_offset: Vec3::from_array(config.camera.pivot_offset),
                use_pawn_control_rotation: true,
            },
            CharacterMovement::from_config(&config.movement),
            WeaponSocket {
                offset: Vec3::from_array(config.character.weapon_socket_offset),
            },
        ))
        .id()
}

/// Spawn оружия в мире (ещё никем не подобрано)
pub fn spawn_weapon(commands: &mut Commands, config: &GameplayConfig, position: Vec3) -> Entity {
    commands
        .spawn((
            Weapon {
                projectile: ProjectileKind::new(config.weapon.projectile.clone()),
            },
            Magazine::new(config.weapon.starting_ammo, config.weapon.max_ammo),
            Muzzle {
                offset: Vec3::from_array(config.weapon.muzzle_offset),
            },
            Pickupable,
            PickupSphere {
                radius: config.weapon.pickup_radius,
                enabled: true,
            },
            Transform::from_translation(position),
        ))
        .id()
}
