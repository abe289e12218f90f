//! Movement domain: jump state machine игрока
//!
//! Содержит:
//! - PlayerMovementState / JumpPhase (engine-independent ядро) - state_machine.rs
//! - PlayerMovementEvent, SetControlEnabled (ECS events) - events.rs
//! - ECS systems вокруг ядра - systems.rs

use bevy::prelude::*;

pub mod events;
pub mod state_machine;
pub mod systems;


pub use events::*;
pub use state_machine::*;
pub use systems::*;

use crate::TickSet;

/// Movement Plugin
///
/// Регистрирует events и systems в FixedUpdate (TickSet::Movement).
/// Порядок фиксирован: sample → advance → compute, раз в тик.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerMovementEvent>()
            .add_event::<SetControlEnabled>();

        app.add_systems(
            FixedUpdate,
            (
                apply_control_toggles,
                sample_player_input,
                advance_jump_phase,
                compute_player_velocity,
            )
                .chain() // Последовательное выполнение для детерминизма
                .in_set(TickSet::Movement),
        );
    }
}
