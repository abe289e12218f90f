//! Jump state machine systems (ECS обёртка над PlayerMovementState)
//!
//! Порядок в TickSet::Movement:
//! 1. apply_control_toggles: SetControlEnabled → control_enabled
//! 2. sample_player_input: PlayerInput → sample_input
//! 3. advance_jump_phase: KinematicBody.grounded → advance_phase
//! 4. compute_player_velocity: intent → KinematicBody

use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::input::{InputSample, PlayerInput};
use crate::movement::events::{PlayerMovementEvent, SetControlEnabled};
use crate::movement::state_machine::{JumpNotification, PlayerMovementState};
use crate::physics::KinematicBody;

/// Система: применение SetControlEnabled
pub fn apply_control_toggles(
    mut toggles: EventReader<SetControlEnabled>,
    mut states: Query<&mut PlayerMovementState>,
) {
    for toggle in toggles.read() {
        let Ok(mut state) = states.get_mut(toggle.entity) else {
            continue;
        };

        if state.control_enabled() != toggle.enabled {
            state.set_control_enabled(toggle.enabled);
            crate::log(&format!(
                "🎮 {:?} control {}",
                toggle.entity,
                if toggle.enabled { "enabled" } else { "disabled" }
            ));
        }
    }
}

/// Система: input тика → state machine
///
/// Edge-поля PlayerInput гасятся после чтения: press/release срабатывают один раз.
pub fn sample_player_input(
    mut players: Query<(Entity, &mut PlayerInput, &mut PlayerMovementState)>,
    mut events: EventWriter<PlayerMovementEvent>,
) {
    let mut notifications: Vec<JumpNotification> = Vec::new();

    for (entity, mut input, mut state) in players.iter_mut() {
        state.sample_input(input.sample, &mut notifications);

        input.sample = InputSample {
            horizontal: input.sample.horizontal,
            ..default()
        };

        emit_notifications(entity, &mut notifications, &mut events);
    }
}

/// Система: переход фазы по grounded signal
pub fn advance_jump_phase(
    mut players: Query<(Entity, &KinematicBody, &mut PlayerMovementState)>,
    mut events: EventWriter<PlayerMovementEvent>,
) {
    let mut notifications: Vec<JumpNotification> = Vec::new();

    for (entity, body, mut state) in players.iter_mut() {
        let before = state.phase();
        state.advance_phase(body.grounded, &mut notifications);

        if before != state.phase() {
            crate::log(&format!("🦘 {:?} {:?} → {:?}", entity, before, state.phase()));
        }

        emit_notifications(entity, &mut notifications, &mut events);
    }
}

/// Система: velocity intent → KinematicBody
///
/// State machine пишет только velocity.y и horizontal target, остальное: integrator.
pub fn compute_player_velocity(
    mut players: Query<(&MovementConfig, &mut PlayerMovementState, &mut KinematicBody)>,
) {
    for (config, mut state, mut body) in players.iter_mut() {
        let intent = state.compute_velocity_intent(body.velocity, config, body.grounded);

        body.velocity.y = intent.vertical_velocity;
        body.target_velocity_x = intent.horizontal_target_velocity;
    }
}

fn emit_notifications(
    entity: Entity,
    notifications: &mut Vec<JumpNotification>,
    events: &mut EventWriter<PlayerMovementEvent>,
) {
    for notification in notifications.drain(..) {
        crate::log(&format!("📣 {:?} {:?}", entity, notification));
        events.write(PlayerMovementEvent::from_notification(entity, notification));
    }
}
