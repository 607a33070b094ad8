//! Integration тесты стрельбы: hit-test → projectile → AmmoChanged

mod common;

use bevy::prelude::*;
use common::*;
use farom_simulation::*;

const TARGET: Vec3 = Vec3::new(300.0, 50.0, -900.0);

fn create_app_with_target() -> App {
    let mut app = create_test_app();
    app.insert_resource(WorldHitTest::new(FixedSurface(TARGET)));
    app
}

#[test]
fn test_shot_spawns_projectile_aimed_at_trace_hit() {
    let mut app = create_app_with_target();
    let (character, weapon) = spawn_armed_character(&mut app, 3, 5, 20);

    press(&mut app, character, InputAction::ShootPressed);
    step(&mut app, RELOAD_TICK);

    assert_eq!(magazine(&app, weapon).current(), 2);
    assert_eq!(reserve(&app, character), 20);

    let spawned = collect_events::<SpawnProjectile>(&app);
    assert_eq!(spawned.len(), 1);
    let request = &spawned[0];
    assert_eq!(request.owner, character);
    assert_eq!(request.kind, ProjectileKind::new("BP_Bullet"));

    let expected = (TARGET - request.position).normalize();
    let forward = request.rotation * Vec3::NEG_Z;
    assert!(
        (forward - expected).length() < 1e-3,
        "Projectile смотрит в {:?}, ожидали {:?}",
        forward,
        expected
    );

    let changed = collect_events::<AmmoChanged>(&app);
    assert_eq!(changed, vec![AmmoChanged { weapon }]);
}

#[test]
fn test_projectile_entity_is_spawned() {
    let mut app = create_app_with_target();
    let (character, _weapon) = spawn_armed_character(&mut app, 3, 5, 20);

    press(&mut app, character, InputAction::ShootPressed);
    press(&mut app, character, InputAction::ShootPressed);
    step(&mut app, RELOAD_TICK);

    let mut projectiles = app.world_mut().query::<&Projectile>();
    let owners: Vec<Entity> = projectiles
        .iter(app.world())
        .map(|projectile| projectile.owner)
        .collect();
    assert_eq!(owners, vec![character, character]);
}

#[test]
fn test_shot_with_empty_magazine_is_noop() {
    let mut app = create_app_with_target();
    let (character, weapon) = spawn_armed_character(&mut app, 0, 5, 20);

    press(&mut app, character, InputAction::ShootPressed);
    step(&mut app, RELOAD_TICK);

    assert_eq!(magazine(&app, weapon).current(), 0);
    assert_eq!(event_count::<SpawnProjectile>(&app), 0);
    assert_eq!(event_count::<AmmoChanged>(&app), 0);
}

#[test]
fn test_magazine_never_goes_below_zero() {
    let mut app = create_app_with_target();
    let (character, weapon) = spawn_armed_character(&mut app, 2, 5, 20);

    for _ in 0..5 {
        press(&mut app, character, InputAction::ShootPressed);
        step(&mut app, RELOAD_TICK);
    }

    assert_eq!(magazine(&app, weapon).current(), 0);
    assert_eq!(event_count::<SpawnProjectile>(&app), 2);
    assert_eq!(reserve(&app, character), 20, "Выстрел не трогает reserve");
}

#[test]
fn test_shot_without_weapon_is_noop() {
    let mut app = create_app_with_target();
    let character = app
        .world_mut()
        .spawn((Character, AmmoReserve(20)))
        .id();

    press(&mut app, character, InputAction::ShootPressed);
    step(&mut app, RELOAD_TICK);

    assert_eq!(event_count::<SpawnProjectile>(&app), 0);
    assert_eq!(event_count::<ReloadStopped>(&app), 0);
}

#[test]
fn test_shot_interrupts_reload() {
    let mut app = create_app_with_target();
    let (character, weapon) = spawn_armed_character(&mut app, 3, 5, 20);

    press(&mut app, character, InputAction::ReloadPressed);
    step(&mut app, RELOAD_TICK);
    step(&mut app, RELOAD_TICK);
    assert_eq!(magazine(&app, weapon).current(), 4);
    assert!(is_reloading(&app, character));

    press(&mut app, character, InputAction::ShootPressed);
    step(&mut app, RELOAD_TICK);

    assert!(!is_reloading(&app, character));
    assert_eq!(event_count::<ReloadStopped>(&app), 1);
    // Перенесённый патрон остаётся, выстрел забрал один
    assert_eq!(magazine(&app, weapon).current(), 3);
    assert_eq!(reserve(&app, character), 19);
    assert_eq!(event_count::<SpawnProjectile>(&app), 1);

    // Прерванный reload больше не tick'ает
    step(&mut app, RELOAD_TICK);
    step(&mut app, RELOAD_TICK);
    assert_eq!(magazine(&app, weapon).current(), 3);
    assert_eq!(reserve(&app, character), 19);
}

#[test]
fn test_shot_with_foreign_weapon_reference_is_noop() {
    let mut app = create_app_with_target();
    let (owner, weapon) = spawn_armed_character(&mut app, 3, 5, 20);
    let thief = app
        .world_mut()
        .spawn((Character, HeldWeapon(Some(weapon))))
        .id();

    press(&mut app, thief, InputAction::ShootPressed);
    step(&mut app, RELOAD_TICK);

    assert_eq!(magazine(&app, weapon).current(), 3);
    assert_eq!(event_count::<SpawnProjectile>(&app), 0);
    assert_eq!(
        app.world().get::<HeldBy>(weapon),
        Some(&HeldBy { character: owner })
    );
}

#[test]
fn test_miss_aims_at_trace_end() {
    let mut app = create_test_app();
    let (character, _weapon) = spawn_armed_character(&mut app, 3, 5, 20);

    // OpenSpace: ничего не блокирует, цель = конец луча камеры
    press(&mut app, character, InputAction::ShootPressed);
    step(&mut app, RELOAD_TICK);

    let spawned = collect_events::<SpawnProjectile>(&app);
    assert_eq!(spawned.len(), 1);
    let forward = spawned[0].rotation * Vec3::NEG_Z;
    assert!(forward.z < -0.9, "Камера смотрит в -Z, forward = {:?}", forward);
}

#[test]
fn test_projectile_hit_reports_character_hit() {
    let mut app = create_test_app();
    let (shooter, _) = spawn_armed_character(&mut app, 3, 5, 20);
    let (target, _) = spawn_armed_character(&mut app, 3, 5, 20);
    let crate_box = app.world_mut().spawn(Transform::default()).id();
    let projectile = app.world_mut().spawn(Transform::default()).id();

    for hit_target in [target, shooter, crate_box] {
        app.world_mut().send_event(ProjectileHit {
            projectile,
            owner: shooter,
            target: hit_target,
        });
    }
    step(&mut app, RELOAD_TICK);

    let hits = collect_events::<CharacterHit>(&app);
    assert_eq!(hits, vec![CharacterHit { character: target }]);
}
