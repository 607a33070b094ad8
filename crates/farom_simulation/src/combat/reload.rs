//! Reload state machine: Idle → Reloading → Idle
//!
//! Reloading = repeating task (каждые `reload_interval` секунд переносит
//! один патрон из reserve в магазин). Останавливается когда магазин полон
//! или reserve пуст - проверка ПОСЛЕ переноса этого tick'а.

use bevy::prelude::*;

use super::events::{AmmoChanged, ReloadIntent, ReloadStarted, ReloadStopped};
use crate::components::{AmmoReserve, Character, HeldBy, HeldWeapon, Magazine, ReloadState, ReloadTask};
use crate::config::GameplayConfig;

/// System: обработка ReloadIntent
///
/// Guard: reserve > 0, магазин не полон, ещё не Reloading, оружие в руках.
/// Guard не прошёл → silent no-op (без events).
pub fn process_reload_intents(
    mut intents: EventReader<ReloadIntent>,
    mut characters: Query<(&HeldWeapon, &AmmoReserve, &mut ReloadState), With<Character>>,
    weapons: Query<(&Magazine, &HeldBy)>,
    config: Res<GameplayConfig>,
    mut reload_started: EventWriter<ReloadStarted>,
) {
    for intent in intents.read() {
        let Ok((held, reserve, mut reload)) = characters.get_mut(intent.character) else {
            continue;
        };

        if reload.is_reloading() || reserve.is_empty() {
            continue;
        }

        let Some((magazine, held_by)) = held.0.and_then(|weapon| weapons.get(weapon).ok()) else {
            continue;
        };
        if held_by.character != intent.character || magazine.is_full() {
            continue;
        }

        *reload = ReloadState::Reloading(ReloadTask::new(config.weapon.reload_interval));
        reload_started.write(ReloadStarted {
            character: intent.character,
        });

        crate::logger::log(&format!(
            "🔄 {:?}: reload started (magazine {}/{}, reserve {})",
            intent.character,
            magazine.current(),
            magazine.max(),
            reserve.0
        ));
    }
}

/// System: продвижение reload tasks (раз в FixedUpdate step)
///
/// Каждый сработавший tick: +1 в магазин, -1 из reserve, AmmoChanged.
/// После переноса: магазин полон ИЛИ reserve пуст → Idle + ReloadStopped (ровно один раз).
/// Оружие пропало из рук → reload обрывается (тоже с ReloadStopped).
pub fn tick_reload_tasks(
    mut characters: Query<(Entity, &HeldWeapon, &mut AmmoReserve, &mut ReloadState), With<Character>>,
    mut weapons: Query<(&mut Magazine, &HeldBy)>,
    time: Res<Time>,
    mut ammo_changed: EventWriter<AmmoChanged>,
    mut reload_stopped: EventWriter<ReloadStopped>,
) {
    let delta = time.delta_secs();

    for (character, held, mut reserve, mut reload) in characters.iter_mut() {
        if !reload.is_reloading() {
            continue;
        }

        let ticks = match &mut *reload {
            ReloadState::Reloading(task) => task.advance(delta),
            ReloadState::Idle => 0,
        };
        if ticks == 0 {
            continue;
        }

        let weapon = held
            .0
            .and_then(|weapon| weapons.get_mut(weapon).ok().map(|entry| (weapon, entry)));
        let Some((weapon, (mut magazine, held_by))) = weapon else {
            *reload = ReloadState::Idle;
            reload_stopped.write(ReloadStopped { character });
            crate::logger::log_warning(&format!("{:?}: reload aborted (weapon gone)", character));
            continue;
        };
        if held_by.character != character {
            *reload = ReloadState::Idle;
            reload_stopped.write(ReloadStopped { character });
            continue;
        }

        for _ in 0..ticks {
            if magazine.load_from(&mut *reserve) {
                ammo_changed.write(AmmoChanged { weapon });
            }

            if magazine.is_full() || reserve.is_empty() {
                *reload = ReloadState::Idle;
                reload_stopped.write(ReloadStopped { character });

                crate::logger::log(&format!(
                    "🔄 {:?}: reload stopped (magazine {}/{}, reserve {})",
                    character,
                    magazine.current(),
                    magazine.max(),
                    reserve.0
                ));
                break;
            }
        }
    }
}
