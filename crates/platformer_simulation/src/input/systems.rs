//! Input systems (ECS)
//!
//! Порядок в тике:
//! 1. drive_raw_input: InputDriver (если есть) заполняет RawInputFrame
//! 2. read_input_source: активный adapter → PlayerInput всех игроков

use bevy::prelude::*;

use crate::components::Player;
use crate::input::scripted::InputDriver;
use crate::input::source::{ActiveInputSource, PlayerInput, RawInputFrame};
use crate::DeterministicRng;

/// Система: InputDriver → RawInputFrame
///
/// Без InputDriver кадр пишет host напрямую (resource RawInputFrame).
pub fn drive_raw_input(
    driver: Option<ResMut<InputDriver>>,
    rng: Option<ResMut<DeterministicRng>>,
    mut frame: ResMut<RawInputFrame>,
) {
    let (Some(mut driver), Some(mut rng)) = (driver, rng) else {
        return;
    };

    *frame = driver.producer.next_frame(&mut rng.rng);
}

/// Система: RawInputFrame → InputSample → PlayerInput
///
/// Adapter вызывается ровно один раз за тик, edge-события после этого гасятся.
pub fn read_input_source(
    mut frame: ResMut<RawInputFrame>,
    mut source: ResMut<ActiveInputSource>,
    mut players: Query<&mut PlayerInput, With<Player>>,
) {
    let sample = source.source.sample(&frame);

    for mut input in players.iter_mut() {
        input.sample = sample;
    }

    frame.clear_edges();
}
