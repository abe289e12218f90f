//! Источники сырых кадров без живого host'а (headless runner, тесты)
//!
//! `InputDriver` resource каждый тик просит у producer'а следующий
//! RawInputFrame. ScriptedInput проигрывает фиксированный список,
//! RandomInputBot генерирует input из DeterministicRng.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::input::source::{RawInputFrame, TouchPhase, TouchPoint};

pub trait FrameProducer: Send + Sync {
    fn next_frame(&mut self, rng: &mut ChaCha8Rng) -> RawInputFrame;
}

#[derive(Resource)]
pub struct InputDriver {
    pub producer: Box<dyn FrameProducer>,
}

impl InputDriver {
    pub fn new(producer: impl FrameProducer + 'static) -> Self {
        Self {
            producer: Box::new(producer),
        }
    }
}

/// Фиксированная последовательность кадров; после конца: пустые кадры
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<RawInputFrame>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<RawInputFrame>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Builder: `count` кадров с удержанием axis
    pub fn hold_axis(mut self, axis: f32, count: usize) -> Self {
        self.frames
            .extend(std::iter::repeat(RawInputFrame::axis(axis)).take(count));
        self
    }

    /// Builder: один кадр с нажатием прыжка
    pub fn press_jump(mut self, axis: f32) -> Self {
        self.frames.push(RawInputFrame {
            axis,
            jump_down: true,
            ..default()
        });
        self
    }

    /// Builder: один кадр с отпусканием прыжка
    pub fn release_jump(mut self, axis: f32) -> Self {
        self.frames.push(RawInputFrame {
            axis,
            jump_up: true,
            ..default()
        });
        self
    }

    /// Builder: один кадр с касаниями
    pub fn touch(mut self, screen_width: f32, touches: &[(f32, TouchPhase)]) -> Self {
        self.frames.push(RawInputFrame {
            touches: touches
                .iter()
                .map(|&(x, phase)| TouchPoint { x, phase })
                .collect(),
            screen_width,
            ..default()
        });
        self
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

impl FrameProducer for ScriptedInput {
    fn next_frame(&mut self, _rng: &mut ChaCha8Rng) -> RawInputFrame {
        let frame = self.frames.get(self.cursor).cloned().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        frame
    }
}

/// Бот со случайным input'ом (детерминирован seed'ом симуляции)
#[derive(Debug, Clone)]
pub struct RandomInputBot {
    /// Вероятность нажать прыжок в тике
    pub jump_chance: f64,
    /// Вероятность отпустить прыжок в тике (если зажат)
    pub release_chance: f64,
    /// Вероятность сменить направление
    pub turn_chance: f64,
    axis: f32,
    jump_held: bool,
}

impl Default for RandomInputBot {
    fn default() -> Self {
        Self {
            jump_chance: 0.05,
            release_chance: 0.2,
            turn_chance: 0.02,
            axis: 0.0,
            jump_held: false,
        }
    }
}

impl FrameProducer for RandomInputBot {
    fn next_frame(&mut self, rng: &mut ChaCha8Rng) -> RawInputFrame {
        if rng.gen_bool(self.turn_chance) {
            // -1, 0 или +1
            self.axis = rng.gen_range(-1..=1) as f32;
        }

        let mut frame = RawInputFrame::axis(self.axis);
        if self.jump_held {
            if rng.gen_bool(self.release_chance) {
                self.jump_held = false;
                frame.jump_up = true;
            }
        } else if rng.gen_bool(self.jump_chance) {
            self.jump_held = true;
            frame.jump_down = true;
        }
        frame
    }
}
