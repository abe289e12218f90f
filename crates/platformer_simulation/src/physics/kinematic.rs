//! Headless kinematic integrator для 2D персонажа
//!
//! Настоящий physics engine предоставляет host. Здесь: минимальная замена,
//! чтобы симуляцию можно было гонять и тестировать без движка:
//! - gravity (-9.81, при падении × gravity_modifier)
//! - horizontal velocity = target от state machine
//! - плоский пол на y = 0 → grounded signal
//!
//! Детерминизм: fixed timestep, без случайности.

use bevy::prelude::*;

/// Ускорение свободного падения (units/sec²)
pub const GRAVITY: f32 = -9.81;

/// Высота пола
pub const GROUND_LEVEL: f32 = 0.0;

/// Kinematic тело персонажа
///
/// Владеет velocity. Jump state machine пишет только `velocity.y` (takeoff,
/// торможение) и `target_velocity_x`, остальное: integrator.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Horizontal target от compute_velocity_intent
    pub target_velocity_x: f32,
    /// Contact test результат последнего шага
    pub grounded: bool,
    /// Множитель gravity при падении (velocity.y < 0)
    pub gravity_modifier: f32,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target_velocity_x: 0.0,
            grounded: true,
            gravity_modifier: 1.0,
        }
    }
}

impl KinematicBody {
    /// Тело в покое. Позиция ниже пола прижимается к полу.
    pub fn at(position: Vec2) -> Self {
        Self {
            position: Vec2::new(position.x, position.y.max(GROUND_LEVEL)),
            grounded: position.y <= GROUND_LEVEL,
            ..default()
        }
    }

    /// Один шаг интеграции (gravity → horizontal target → move → ground check)
    pub fn step(&mut self, dt: f32) {
        let gravity = if self.velocity.y < 0.0 {
            GRAVITY * self.gravity_modifier
        } else {
            GRAVITY
        };
        self.velocity.y += gravity * dt;
        self.velocity.x = self.target_velocity_x;

        self.position += self.velocity * dt;

        if self.position.y <= GROUND_LEVEL {
            self.position.y = GROUND_LEVEL;
            self.velocity.y = self.velocity.y.max(0.0);
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

/// Система интеграции всех kinematic тел
///
/// Работает в FixedUpdate (60Hz), шаг = timestep фиксированного времени.
pub fn integrate_kinematic_bodies(
    mut bodies: Query<&mut KinematicBody>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.timestep().as_secs_f32();

    for mut body in bodies.iter_mut() {
        body.step(dt);
    }
}
