//! Gameplay конфигурация (tunables персонажа, оружия, камеры, движения)
//!
//! Defaults = значения из character/weapon конструкторов игры.
//! Хост может переопределить любое поле через JSON (`#[serde(default)]`
//! на каждой секции: отсутствующие поля берутся из defaults).
//! Векторы хранятся как `[f32; 3]`: bevy собран без `serialize` feature.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Корневой config resource
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub character: CharacterConfig,
    pub weapon: WeaponConfig,
    pub camera: CameraConfig,
    pub movement: MovementConfig,
    pub simulation: SimulationConfig,
}

impl GameplayConfig {
    /// Парсит config из JSON (частичный JSON допустим) и проверяет значения
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    /// Значения, на которых gameplay не может работать
    pub fn validate(&self) -> Result<(), String> {
        let interval = self.weapon.reload_interval;
        if !interval.is_finite() || interval <= 0.0 {
            return Err(format!("weapon.reload_interval must be > 0, got {}", interval));
        }
        if !self.simulation.fixed_hz.is_finite() || self.simulation.fixed_hz <= 0.0 {
            return Err(format!(
                "simulation.fixed_hz must be > 0, got {}",
                self.simulation.fixed_hz
            ));
        }
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Стартовый запас патронов (reserve)
    pub starting_reserve: u32,
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
    /// Множитель для gamepad turn/look rate (градусы/сек при value = 1.0)
    pub turn_rate_gamepad: f32,
    /// Смещение сокета "Weapon" относительно центра персонажа
    pub weapon_socket_offset: [f32; 3],
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            starting_reserve: 20,
            capsule_radius: 42.0,
            capsule_half_height: 96.0,
            turn_rate_gamepad: 50.0,
            weapon_socket_offset: [20.0, 40.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub max_ammo: u32,
    pub starting_ammo: u32,
    /// Идентификатор projectile класса, который спавнится на выстрел
    pub projectile: String,
    /// Muzzle socket в local space оружия
    pub muzzle_offset: [f32; 3],
    pub pickup_radius: f32,
    /// Дальность hit-test луча от камеры
    pub trace_distance: f32,
    /// Интервал repeating reload tick (секунды)
    pub reload_interval: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            max_ammo: 5,
            starting_ammo: 3,
            projectile: "BP_Bullet".into(),
            muzzle_offset: [0.0, 10.0, -60.0],
            pickup_radius: 32.0,
            trace_distance: 1500.0,
            reload_interval: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Дистанция камеры за персонажем (spring arm length)
    pub arm_length: f32,
    /// Точка крепления boom относительно центра персонажа
    pub pivot_offset: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            arm_length: 400.0,
            pivot_offset: [0.0, 60.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub max_walk_speed: f32,
    pub min_analog_walk_speed: f32,
    pub jump_z_velocity: f32,
    /// Jump отпущен в подъёме → вертикальная скорость ≤ jump_z_velocity * ratio
    pub jump_release_ratio: f32,
    pub air_control: f32,
    pub braking_deceleration_walking: f32,
    /// Скорость разворота к направлению движения (градусы/сек)
    pub rotation_rate_yaw: f32,
    pub gravity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_walk_speed: 500.0,
            min_analog_walk_speed: 20.0,
            jump_z_velocity: 700.0,
            jump_release_ratio: 0.5,
            air_control: 0.35,
            braking_deceleration_walking: 2000.0,
            rotation_rate_yaw: 500.0,
            gravity: -980.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Частота FixedUpdate
    pub fixed_hz: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { fixed_hz: 60.0 }
    }
}
