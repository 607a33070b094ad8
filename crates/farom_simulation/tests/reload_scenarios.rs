//! Integration тесты перезарядки
//!
//! Время двигаем по 0.5s: один FixedUpdate step = один reload tick.

mod common;

use common::*;
use farom_simulation::*;

#[test]
fn test_reload_fills_magazine_tick_by_tick() {
    let mut app = create_test_app();
    let (character, weapon) = spawn_armed_character(&mut app, 3, 5, 20);

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);

    // Reload начат, но первый tick ещё не наступил
    assert!(is_reloading(&app, character));
    assert_eq!(event_count::<ReloadStarted>(&app), 1);
    assert_eq!(magazine(&app, weapon).current(), 3);

    step(&mut app, RELOAD_TICK);
    assert_eq!(magazine(&app, weapon).current(), 4);
    assert_eq!(reserve(&app, character), 19);
    assert!(is_reloading(&app, character), "Магазин ещё не полон");
    assert_eq!(event_count::<ReloadStopped>(&app), 0);

    step(&mut app, RELOAD_TICK);
    assert_eq!(magazine(&app, weapon).current(), 5);
    assert_eq!(reserve(&app, character), 18);
    assert!(!is_reloading(&app, character));
    assert_eq!(event_count::<ReloadStopped>(&app), 1);
    assert_eq!(event_count::<AmmoChanged>(&app), 2);

    // Дальнейшие steps ничего не меняют
    step(&mut app, RELOAD_TICK);
    step(&mut app, RELOAD_TICK);
    assert_eq!(magazine(&app, weapon).current(), 5);
    assert_eq!(reserve(&app, character), 18);
    assert_eq!(event_count::<ReloadStopped>(&app), 1);
}

#[test]
fn test_reload_stops_when_reserve_runs_out() {
    let mut app = create_test_app();
    let (character, weapon) = spawn_armed_character(&mut app, 0, 5, 1);

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);
    step(&mut app, RELOAD_TICK);

    assert_eq!(magazine(&app, weapon).current(), 1);
    assert_eq!(reserve(&app, character), 0);
    assert!(!is_reloading(&app, character));
    assert_eq!(event_count::<ReloadStopped>(&app), 1);
}

#[test]
fn test_long_step_transfers_several_rounds() {
    let mut app = create_test_app();
    let (character, weapon) = spawn_armed_character(&mut app, 0, 5, 20);

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);

    // 1.5s = три tick'а за один step
    step(&mut app, RELOAD_TICK * 3);
    assert_eq!(magazine(&app, weapon).current(), 3);
    assert_eq!(reserve(&app, character), 17);
    assert!(is_reloading(&app, character));

    // 5s хватило бы на 10 tick'ов, но магазин заполнится на пятом
    step(&mut app, RELOAD_TICK * 10);
    assert_eq!(magazine(&app, weapon).current(), 5);
    assert_eq!(reserve(&app, character), 15);
    assert_eq!(event_count::<ReloadStopped>(&app), 1);
}

#[test]
fn test_reload_with_full_magazine_is_noop() {
    let mut app = create_test_app();
    let (character, weapon) = spawn_armed_character(&mut app, 5, 5, 20);

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);
    step(&mut app, RELOAD_TICK);

    assert!(!is_reloading(&app, character));
    assert_eq!(event_count::<ReloadStarted>(&app), 0);
    assert_eq!(event_count::<ReloadStopped>(&app), 0);
    assert_eq!(magazine(&app, weapon).current(), 5);
    assert_eq!(reserve(&app, character), 20);
}

#[test]
fn test_reload_with_empty_reserve_is_noop() {
    let mut app = create_test_app();
    let (character, weapon) = spawn_armed_character(&mut app, 2, 5, 0);

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);
    step(&mut app, RELOAD_TICK);

    assert!(!is_reloading(&app, character));
    assert_eq!(event_count::<ReloadStarted>(&app), 0);
    assert_eq!(magazine(&app, weapon).current(), 2);
}

#[test]
fn test_reload_while_reloading_is_noop() {
    let mut app = create_test_app();
    let (character, weapon) = spawn_armed_character(&mut app, 1, 5, 20);

    // Два нажатия в одном step + ещё одно во время reload
    press(&mut app, character, InputAction::ReloadPressed);
    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);
    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);

    assert_eq!(event_count::<ReloadStarted>(&app), 1);
    // Повторное нажатие не сбросило таймер: tick сработал вовремя
    assert_eq!(magazine(&app, weapon).current(), 2);
    assert!(is_reloading(&app, character));
}

#[test]
fn test_reload_without_weapon_is_noop() {
    let mut app = create_test_app();
    let character = app
        .world_mut()
        .spawn((Character, AmmoReserve(20)))
        .id();

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);
    step(&mut app, RELOAD_TICK);

    assert!(!is_reloading(&app, character));
    assert_eq!(event_count::<ReloadStarted>(&app), 0);
    assert_eq!(reserve(&app, character), 20);
}

#[test]
fn test_reload_aborts_when_weapon_despawned() {
    let mut app = create_test_app();
    let (character, weapon) = spawn_armed_character(&mut app, 1, 5, 20);

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);
    assert!(is_reloading(&app, character));

    app.world_mut().despawn(weapon);
    step(&mut app, RELOAD_TICK);

    assert!(!is_reloading(&app, character));
    assert_eq!(event_count::<ReloadStopped>(&app), 1);
    assert_eq!(reserve(&app, character), 20, "Патроны не должны пропасть");
}

#[test]
fn test_despawned_character_leaves_no_running_reload() {
    let mut app = create_test_app();
    let (character, weapon) = spawn_armed_character(&mut app, 1, 5, 20);

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);

    app.world_mut().despawn(character);
    step(&mut app, RELOAD_TICK);
    step(&mut app, RELOAD_TICK);

    // Tick'и после despawn не трогают магазин
    assert_eq!(magazine(&app, weapon).current(), 1);
    assert_eq!(event_count::<AmmoChanged>(&app), 0);
}
