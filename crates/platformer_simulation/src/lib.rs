//! Platformer Simulation Core
//!
//! Headless ECS-симуляция игрока платформера на Bevy 0.16.
//!
//! Ядро: jump state machine (movement::state_machine), независимая от движка.
//! Вокруг неё тонкий ECS слой:
//! - input: нормализация axis/touch input'а в единый triple
//! - movement: state machine systems + lifecycle events
//! - physics: headless kinematic integrator (замена physics engine host'а)
//! - presentation: параметры анимации (одностороннее чтение)
//!
//! Тик (FixedUpdate, 60Hz): Input → Movement → Physics → Presentation.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod components;
pub mod config;
pub mod input;
pub mod logger;
pub mod movement;
pub mod physics;
pub mod presentation;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{ConfigError, MovementConfig};
pub use input::{
    ActiveInputSource, InputDriver, InputMode, InputPlugin, InputSample, InputSource,
    PlayerInput, RandomInputBot, RawInputFrame, ScriptedInput, TouchPhase, TouchPoint,
};
pub use logger::*;
pub use movement::{
    JumpNotification, JumpPhase, MovementPlugin, MovementSnapshot, NotificationSink,
    PlayerMovementEvent, PlayerMovementState, SetControlEnabled, VelocityIntent,
};
pub use physics::{KinematicBody, KinematicPlugin};
pub use presentation::{AnimatorParams, PresentationPlugin};

/// Частота simulation tick
pub const TICK_HZ: f64 = 60.0;

/// Фазы одного тика (выполняются строго по порядку)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// RawInputFrame → PlayerInput
    Input,
    /// Jump state machine: sample → advance → compute
    Movement,
    /// Kinematic integration, grounded signal
    Physics,
    /// AnimatorParams
    Presentation,
}

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    pub input_mode: InputMode,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                TickSet::Input,
                TickSet::Movement,
                TickSet::Physics,
                TickSet::Presentation,
            )
                .chain(),
        );

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_plugins((
                InputPlugin {
                    mode: self.input_mode,
                },
                MovementPlugin,
                KinematicPlugin,
                PresentationPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает вручную: каждый `app.update()` = ровно один fixed tick,
/// независимо от wall clock. Первый update с `ManualDuration` только
/// запоминает стартовое время (delta = 0), поэтому он выполняется здесь.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_HZ,
        )));

    // Прогрев часов: FixedUpdate здесь не запускается
    app.update();

    app
}

/// Компоненты управляемого игрока
///
/// Конфиг валидируется заранее (`MovementConfig::new` / `load_from_file`).
pub fn player_bundle(position: Vec2, config: MovementConfig) -> impl Bundle {
    (
        Player,
        config,
        PlayerMovementState::new(),
        PlayerInput::default(),
        KinematicBody::at(position),
        AnimatorParams::default(),
    )
}

/// Spawn helper для игрока
pub fn spawn_player(commands: &mut Commands, position: Vec2, config: MovementConfig) -> Entity {
    commands.spawn(player_bundle(position, config)).id()
}

/// Состояние одного игрока для сравнения прогонов
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerFrame {
    pub entity_index: u32,
    pub movement: PlayerMovementState,
    pub body: KinematicBody,
}

/// Snapshot всех игроков (отсортирован по Entity index)
pub fn world_snapshot(world: &mut World) -> Vec<PlayerFrame> {
    let mut query =
        world.query_filtered::<(Entity, &PlayerMovementState, &KinematicBody), With<Player>>();
    let mut frames: Vec<PlayerFrame> = query
        .iter(world)
        .map(|(entity, movement, body)| PlayerFrame {
            entity_index: entity.index(),
            movement: movement.clone(),
            body: *body,
        })
        .collect();

    frames.sort_by_key(|frame| frame.entity_index);
    frames
}
