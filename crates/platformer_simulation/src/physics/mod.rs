//! Physics module
//!
//! Headless kinematic integrator (host collaborator): даёт jump state machine
//! grounded signal и текущую velocity, потребляет velocity intent.

use bevy::prelude::*;

pub mod kinematic;

pub use kinematic::{integrate_kinematic_bodies, KinematicBody, GRAVITY, GROUND_LEVEL};

use crate::TickSet;

/// Регистрирует integrator в TickSet::Physics (после state machine)
pub struct KinematicPlugin;

impl Plugin for KinematicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            integrate_kinematic_bodies.in_set(TickSet::Physics),
        );
    }
}
