//! Общие helpers для integration тестов

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use farom_simulation::*;

pub const RELOAD_TICK: Duration = Duration::from_millis(500);

/// Все события типа E, прочитанные recorder системой с начала теста
#[derive(Resource)]
pub struct EventLog<E: Event>(pub Vec<E>);

impl<E: Event> Default for EventLog<E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

/// Recorder: свой EventReader (персистентный cursor), читает каждый step
fn record_events<E: Event + Clone>(mut reader: EventReader<E>, mut log: ResMut<EventLog<E>>) {
    log.0.extend(reader.read().cloned());
}

pub fn track_events<E: Event + Clone>(app: &mut App) {
    app.init_resource::<EventLog<E>>().add_systems(
        FixedUpdate,
        record_events::<E>.after(GameplaySet::Attachment),
    );
}

/// Headless App без wall clock: время двигаем только через `step`
pub fn create_test_app() -> App {
    let mut app = create_headless_app();
    track_events::<AmmoChanged>(&mut app);
    track_events::<ReloadStarted>(&mut app);
    track_events::<ReloadStopped>(&mut app);
    track_events::<SpawnProjectile>(&mut app);
    track_events::<CharacterHit>(&mut app);
    track_events::<ShootIntent>(&mut app);
    track_events::<ReloadIntent>(&mut app);
    track_events::<JumpIntent>(&mut app);
    track_events::<OverlapStarted>(&mut app);
    app
}

pub fn step(app: &mut App, delta: Duration) {
    advance_simulation(app.world_mut(), delta);
}

pub fn press(app: &mut App, character: Entity, action: InputAction) {
    app.world_mut().send_event(CharacterInput::new(character, action));
}

/// Все события типа E с начала теста (тип должен быть подключен через `track_events`)
pub fn collect_events<E: Event + Clone>(app: &App) -> Vec<E> {
    app.world()
        .get_resource::<EventLog<E>>()
        .expect("event type is tracked")
        .0
        .clone()
}

pub fn event_count<E: Event + Clone>(app: &App) -> usize {
    collect_events::<E>(app).len()
}

/// Персонаж с уже подобранным оружием
pub fn spawn_armed_character(app: &mut App, current: u32, max: u32, reserve: u32) -> (Entity, Entity) {
    let world = app.world_mut();
    let character = world.spawn((Character, AmmoReserve(reserve))).id();
    let weapon = world
        .spawn((
            Weapon {
                projectile: ProjectileKind::new("BP_Bullet"),
            },
            Magazine::new(current, max),
            HeldBy { character },
        ))
        .id();
    world.entity_mut(character).insert(HeldWeapon(Some(weapon)));
    (character, weapon)
}

/// Оружие лежит в мире, ждёт подбора
pub fn spawn_loose_weapon(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Weapon {
                projectile: ProjectileKind::new("BP_Bullet"),
            },
            Magazine::new(3, 5),
            Pickupable,
            PickupSphere::default(),
            Transform::from_translation(position),
        ))
        .id()
}

pub fn magazine(app: &App, weapon: Entity) -> Magazine {
    *app.world().get::<Magazine>(weapon).expect("weapon has magazine")
}

pub fn reserve(app: &App, character: Entity) -> u32 {
    app.world().get::<AmmoReserve>(character).expect("character has reserve").0
}

pub fn is_reloading(app: &App, character: Entity) -> bool {
    app.world()
        .get::<ReloadState>(character)
        .expect("character has reload state")
        .is_reloading()
}

/// Hit-test, который всегда упирается в одну точку
pub struct FixedSurface(pub Vec3);

impl HitTest for FixedSurface {
    fn trace(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> TraceResult {
        TraceResult {
            hit: Some(self.0),
            trace_end: origin + direction * max_distance,
        }
    }
}
