//! Player marker

use bevy::prelude::*;

/// Entity под управлением игрока (input читается только для них)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;
