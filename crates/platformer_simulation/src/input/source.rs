//! Input triple, сырой кадр input'а и adapter'ы

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::input::touch::TouchZoneAdapter;

/// Нормализованный input одного тика
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct InputSample {
    /// -1.0 (влево) → +1.0 (вправо)
    pub horizontal: f32,
    /// Jump нажат в этом тике (edge)
    pub jump_pressed: bool,
    /// Jump отпущен в этом тике (edge)
    pub jump_released: bool,
}

/// Фаза касания (как её отдаёт платформа)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum TouchPhase {
    Began,
    Moved,
    Stationary,
    Ended,
    Canceled,
}

/// Одно активное касание (x в пикселях экрана)
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TouchPoint {
    pub x: f32,
    pub phase: TouchPhase,
}

/// Сырой input одного тика
///
/// Host заполняет каждый тик. Edge-поля (`jump_down`, `jump_up`) и touches
/// сбрасываются после чтения в `read_input_source`.
#[derive(Resource, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct RawInputFrame {
    /// Horizontal axis (клавиатура / стик)
    pub axis: f32,
    /// Jump button down edge
    pub jump_down: bool,
    /// Jump button up edge
    pub jump_up: bool,
    /// Активные касания
    pub touches: Vec<TouchPoint>,
    /// Ширина экрана для разбиения на touch-зоны
    pub screen_width: f32,
}

impl RawInputFrame {
    pub fn axis(axis: f32) -> Self {
        Self { axis, ..default() }
    }

    /// Сброс edge-событий после того, как тик их прочитал
    pub fn clear_edges(&mut self) {
        self.jump_down = false;
        self.jump_up = false;
        self.touches.clear();
    }
}

/// Producer нормализованного input'а
pub trait InputSource: Send + Sync {
    fn sample(&mut self, frame: &RawInputFrame) -> InputSample;
}

/// Digital/analog axis + jump button (desktop, gamepad)
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisInputAdapter;

impl InputSource for AxisInputAdapter {
    fn sample(&mut self, frame: &RawInputFrame) -> InputSample {
        InputSample {
            horizontal: frame.axis,
            jump_pressed: frame.jump_down,
            jump_released: frame.jump_up,
        }
    }
}

/// Какой adapter использует host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    Axis,
    Touch,
}

impl InputMode {
    pub fn into_source(self) -> Box<dyn InputSource> {
        match self {
            InputMode::Axis => Box::new(AxisInputAdapter),
            InputMode::Touch => Box::new(TouchZoneAdapter::default()),
        }
    }
}

/// Активный adapter (resource)
#[derive(Resource)]
pub struct ActiveInputSource {
    pub mode: InputMode,
    pub source: Box<dyn InputSource>,
}

impl ActiveInputSource {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            source: mode.into_source(),
        }
    }
}

impl Default for ActiveInputSource {
    fn default() -> Self {
        Self::new(InputMode::default())
    }
}

/// Input игрока на текущий тик (пишется read_input_source, читается state machine)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    pub sample: InputSample,
}
