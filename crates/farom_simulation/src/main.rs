//! Headless симуляция Farom
//!
//! Скриптованный прогон: игрок подходит к оружию, подбирает его,
//! стреляет до пустого магазина и перезаряжается.

use std::time::Duration;

use bevy::prelude::*;
use farom_simulation::{
    advance_simulation, ammo_snapshot, create_headless_app, spawn_weapon, CharacterInput,
    GameplayConfig, GroundPlane, InputAction, InputBindings, Player, WorldHitTest,
};

const STEP: Duration = Duration::from_micros(16_667);

fn main() {
    let mut app = create_headless_app();
    app.insert_resource(WorldHitTest::new(GroundPlane { height: 0.0 }));
    app.world_mut().run_schedule(Startup);

    let config = app.world().resource::<GameplayConfig>().clone();
    {
        let world = app.world_mut();
        {
            let mut commands = world.commands();
            spawn_weapon(&mut commands, &config, Vec3::new(0.0, 0.0, -300.0));
        }
        world.flush();
    }

    let player = {
        let world = app.world_mut();
        let mut players = world.query_filtered::<Entity, With<Player>>();
        players.iter(world).next()
    };
    let Some(player) = player else {
        eprintln!("No player pawn spawned, nothing to simulate");
        return;
    };

    println!("Starting Farom headless simulation (player {:?})", player);

    let bindings = app.world().resource::<InputBindings>().clone();

    for tick in 0..600u32 {
        // Сырые именованные события, как их шлёт engine input bridge
        let action: Option<InputAction> = match tick {
            0..=59 => bindings.resolve_axis("Move Forward / Backward", 1.0),
            70..=79 => bindings.resolve_axis("Turn Right / Left Gamepad", 0.5),
            90 | 100 | 110 | 120 => bindings.resolve_action("PrimaryAction", true),
            130 => bindings.resolve_action("Reload", true),
            _ => None,
        };
        if let Some(action) = action {
            app.world_mut().send_event(CharacterInput::new(player, action));
        }

        advance_simulation(app.world_mut(), STEP);

        if tick % 100 == 0 {
            let snapshot = ammo_snapshot(app.world_mut());
            match serde_json::to_string(&snapshot) {
                Ok(json) => println!("Tick {}: {}", tick, json),
                Err(err) => eprintln!("Tick {}: snapshot serialization failed: {}", tick, err),
            }
        }
    }

    println!("Simulation complete!");
}
