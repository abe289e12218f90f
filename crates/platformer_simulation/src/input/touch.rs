//! Touch-зоны → input triple
//!
//! Экран делится на четверти по X:
//! ```text
//! | влево | вправо | (ничего) | прыжок |
//! 0      w/4      w/2       3w/4      w
//! ```
//! - `[0, w/4)`: удержание (Moved/Stationary) → движение влево
//! - `[w/4, w/2)`: удержание → движение вправо
//! - `(3w/4, w]`: Began → jump press, Ended → jump release
//! - Ended в левой половине → horizontal = 0
//!
//! Кадры с 0 или ≥ 3 касаниями игнорируются: horizontal остаётся прежним.

use crate::input::source::{InputSample, InputSource, RawInputFrame, TouchPhase};

/// Величина axis для touch движения (0.1 × 7.3, как в исходной мобильной схеме)
pub const TOUCH_MOVE_AXIS: f32 = 0.73;

/// Максимум одновременных касаний, которые ещё обрабатываются
pub const MAX_TOUCHES: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct TouchZoneAdapter {
    /// Horizontal держится между кадрами, пока касание не закончится
    horizontal: f32,
}

impl TouchZoneAdapter {
    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }
}

impl InputSource for TouchZoneAdapter {
    fn sample(&mut self, frame: &RawInputFrame) -> InputSample {
        let mut sample = InputSample::default();

        let count = frame.touches.len();
        if count == 0 || count > MAX_TOUCHES || frame.screen_width <= 0.0 {
            sample.horizontal = self.horizontal;
            return sample;
        }

        let first_quarter = frame.screen_width / 4.0;
        let half = frame.screen_width / 2.0;
        let jump_zone = 3.0 * frame.screen_width / 4.0;

        for touch in &frame.touches {
            match touch.phase {
                TouchPhase::Began => {
                    if touch.x > jump_zone {
                        sample.jump_pressed = true;
                    }
                }
                TouchPhase::Moved | TouchPhase::Stationary => {
                    if touch.x < first_quarter {
                        self.horizontal = -TOUCH_MOVE_AXIS;
                    } else if touch.x < half {
                        self.horizontal = TOUCH_MOVE_AXIS;
                    }
                }
                TouchPhase::Ended => {
                    if touch.x < half {
                        self.horizontal = 0.0;
                    }
                    if touch.x > jump_zone {
                        sample.jump_released = true;
                    }
                }
                // Отменённое касание платформой не трогает ни движение, ни прыжок
                TouchPhase::Canceled => {}
            }
        }

        sample.horizontal = self.horizontal;
        sample
    }
}
