//! Headless симуляция платформера
//!
//! Гоняет игрока под управлением RandomInputBot без рендера.
//! Использование: `platformer_simulation [movement.ron] [seed]`

use std::path::Path;

use bevy::prelude::*;
use platformer_simulation::{
    create_headless_app, init_logger, log_error, log_info, player_bundle, set_log_level,
    InputDriver, KinematicBody, LogLevel, MovementConfig, PlayerMovementEvent,
    PlayerMovementState, RandomInputBot, SimulationPlugin,
};

const TICK_COUNT: usize = 1000;

#[derive(Resource, Default)]
struct JumpStats {
    jumps: usize,
    landings: usize,
    stop_requests: usize,
}

fn count_events(mut events: EventReader<PlayerMovementEvent>, mut stats: ResMut<JumpStats>) {
    for event in events.read() {
        match event {
            PlayerMovementEvent::Jumped { .. } => stats.jumps += 1,
            PlayerMovementEvent::Landed { .. } => stats.landings += 1,
            PlayerMovementEvent::StopJumpRequested { .. } => stats.stop_requests += 1,
        }
    }
}

fn main() {
    init_logger();
    set_log_level(LogLevel::Info);

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match MovementConfig::load_from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log_error(&format!("Invalid movement config: {}", e));
                std::process::exit(1);
            }
        },
        None => MovementConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin::default())
        .insert_resource(InputDriver::new(RandomInputBot::default()))
        .init_resource::<JumpStats>()
        .add_systems(Update, count_events);

    let player = app.world_mut().spawn(player_bundle(Vec2::ZERO, config)).id();

    log_info(&format!(
        "Starting platformer headless simulation (seed: {}, config: {:?})",
        seed, config
    ));

    for tick in 0..TICK_COUNT {
        app.update();

        if tick % 100 == 0 {
            let world = app.world();
            if let (Some(state), Some(body)) = (
                world.get::<PlayerMovementState>(player),
                world.get::<KinematicBody>(player),
            ) {
                log_info(&format!(
                    "Tick {}: phase {:?}, position ({:.2}, {:.2})",
                    tick,
                    state.phase(),
                    body.position.x,
                    body.position.y
                ));
            }
        }
    }

    let stats = app.world().resource::<JumpStats>();
    log_info(&format!(
        "Simulation complete: {} jumps, {} landings, {} stop-jump requests",
        stats.jumps, stats.landings, stats.stop_requests
    ));
}
