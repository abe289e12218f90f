//! Presentation binding: одностороннее чтение выходов ядра
//!
//! AnimatorParams обновляется после physics шага. Host (sprite renderer,
//! animator) только читает его, обратно в ядро ничего не идёт.

use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::movement::PlayerMovementState;
use crate::physics::KinematicBody;
use crate::TickSet;

/// Параметры анимации игрока
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimatorParams {
    pub grounded: bool,
    /// |velocity.x| / max_speed
    pub velocity_x_ratio: f32,
    /// Flip спрайта по X
    pub flip_x: bool,
}

impl AnimatorParams {
    pub fn from_state(
        state: &PlayerMovementState,
        body: &KinematicBody,
        config: &MovementConfig,
    ) -> Self {
        Self {
            grounded: body.grounded,
            velocity_x_ratio: body.velocity.x.abs() / config.max_speed,
            flip_x: state.flip_x(),
        }
    }
}

/// Система: обновление AnimatorParams
pub fn update_animator_params(
    mut players: Query<(
        &PlayerMovementState,
        &KinematicBody,
        &MovementConfig,
        &mut AnimatorParams,
    )>,
) {
    for (state, body, config, mut params) in players.iter_mut() {
        let next = AnimatorParams::from_state(state, body, config);
        if *params != next {
            *params = next;
        }
    }
}

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            update_animator_params.in_set(TickSet::Presentation),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_ratio_is_normalized() {
        let state = PlayerMovementState::new();
        let config = MovementConfig::default();
        let body = KinematicBody {
            velocity: Vec2::new(-3.5, 0.0),
            ..default()
        };

        let params = AnimatorParams::from_state(&state, &body, &config);
        assert_eq!(params.velocity_x_ratio, 0.5);
        assert!(params.grounded);
        assert!(!params.flip_x);
    }
}
