//! Jump state machine: фазы прыжка, input latches, velocity intent.
//!
//! Engine-independent ядро. Host вызывает три операции раз в тик в фиксированном
//! порядке: `sample_input` → `advance_phase` → `compute_velocity_intent`.
//! Physics integrator владеет velocity; ядро только предлагает vertical velocity
//! (takeoff / торможение) и horizontal target.
//!
//! Цикл фаз:
//! ```text
//! Grounded → PrepareToJump → Jumping → InFlight → Landed → Grounded
//! ```

use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::input::InputSample;

/// Порог hysteresis для flip спрайта (избегаем дёрганья около нуля)
pub const FLIP_THRESHOLD: f32 = 0.01;

/// Фаза прыжка (закрытое перечисление)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum JumpPhase {
    /// Стоим на земле, точка входа для нового прыжка
    #[default]
    Grounded,
    /// Прыжок нажат, takeoff на следующем advance
    PrepareToJump,
    /// Takeoff применён, ждём отрыва от земли
    Jumping,
    /// В воздухе
    InFlight,
    /// Коснулись земли, на следующем тике → Grounded
    Landed,
}

/// Lifecycle уведомления для внешних слушателей (audio, анимация, scoring)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpNotification {
    /// Jumping → InFlight
    Jumped,
    /// InFlight → Landed
    Landed,
    /// Jump отпущен (emit сразу, независимо от фазы)
    StopJumpRequested,
}

/// Получатель уведомлений (fire-and-forget, в порядке emit)
pub trait NotificationSink {
    fn notify(&mut self, notification: JumpNotification);
}

impl NotificationSink for Vec<JumpNotification> {
    fn notify(&mut self, notification: JumpNotification) {
        self.push(notification);
    }
}

/// Результат `compute_velocity_intent`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityIntent {
    /// Новая vertical velocity (или текущая, если ядро её не трогает)
    pub vertical_velocity: f32,
    /// horizontal_input × max_speed
    pub horizontal_target_velocity: f32,
    /// Flip спрайта: false при движении вправо, true при движении влево
    pub flip_x: bool,
}

/// Read-only снимок для presentation / отладки
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementSnapshot {
    pub phase: JumpPhase,
    pub horizontal_input: f32,
    pub flip_x: bool,
    pub control_enabled: bool,
}

/// Где находимся внутри тика (для проверки порядка вызовов)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
enum TickStage {
    #[default]
    Advanced,
    Sampled,
}

/// Состояние движения игрока
///
/// Инварианты:
/// - фаза меняется только по циклу Grounded → … → Landed → Grounded
/// - takeoff применяется ровно один раз на переход PrepareToJump → Jumping
/// - stop-jump latch очищается первым же `compute_velocity_intent`
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerMovementState {
    phase: JumpPhase,
    horizontal_input: f32,
    stop_jump_requested: bool,
    takeoff_armed: bool,
    control_enabled: bool,
    flip_x: bool,
    stage: TickStage,
}

impl Default for PlayerMovementState {
    fn default() -> Self {
        Self {
            phase: JumpPhase::Grounded,
            horizontal_input: 0.0,
            stop_jump_requested: false,
            takeoff_armed: false,
            control_enabled: true,
            flip_x: false,
            stage: TickStage::Advanced,
        }
    }
}

impl PlayerMovementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    pub fn horizontal_input(&self) -> f32 {
        self.horizontal_input
    }

    pub fn stop_jump_requested(&self) -> bool {
        self.stop_jump_requested
    }

    pub fn takeoff_armed(&self) -> bool {
        self.takeoff_armed
    }

    pub fn control_enabled(&self) -> bool {
        self.control_enabled
    }

    pub fn flip_x(&self) -> bool {
        self.flip_x
    }

    /// Вкл/выкл управление. Host применяет на границе тика, не посреди.
    pub fn set_control_enabled(&mut self, enabled: bool) {
        self.control_enabled = enabled;
    }

    pub fn snapshot(&self) -> MovementSnapshot {
        MovementSnapshot {
            phase: self.phase,
            horizontal_input: self.horizontal_input,
            flip_x: self.flip_x,
            control_enabled: self.control_enabled,
        }
    }

    /// Шаг 1 тика: запись input
    ///
    /// Control выключен → horizontal = 0, press/release игнорируются целиком.
    pub fn sample_input(&mut self, input: InputSample, sink: &mut impl NotificationSink) {
        self.stage = TickStage::Sampled;

        if !self.control_enabled {
            self.horizontal_input = 0.0;
            return;
        }

        self.horizontal_input = sanitize_axis(input.horizontal);

        if self.phase == JumpPhase::Grounded && input.jump_pressed {
            self.phase = JumpPhase::PrepareToJump;
        }

        if input.jump_released {
            self.stop_jump_requested = true;
            sink.notify(JumpNotification::StopJumpRequested);
        }
    }

    /// Шаг 2 тика: переход фазы по grounded signal от physics integrator
    ///
    /// Takeoff flag живёт один тик: неиспользованный (не на земле) сгорает.
    pub fn advance_phase(&mut self, grounded: bool, sink: &mut impl NotificationSink) {
        self.stage = TickStage::Advanced;
        self.takeoff_armed = false;

        match self.phase {
            JumpPhase::PrepareToJump => {
                self.phase = JumpPhase::Jumping;
                self.takeoff_armed = true;
                self.stop_jump_requested = false;
            }
            JumpPhase::Jumping => {
                if !grounded {
                    self.phase = JumpPhase::InFlight;
                    sink.notify(JumpNotification::Jumped);
                }
            }
            JumpPhase::InFlight => {
                if grounded {
                    self.phase = JumpPhase::Landed;
                    sink.notify(JumpNotification::Landed);
                }
            }
            JumpPhase::Landed => {
                self.phase = JumpPhase::Grounded;
            }
            JumpPhase::Grounded => {}
        }
    }

    /// Шаг 3 тика: vertical velocity + horizontal target + flip
    ///
    /// Побочные эффекты: только сброс one-shot флагов, которые потреблены.
    pub fn compute_velocity_intent(
        &mut self,
        current_velocity: Vec2,
        config: &MovementConfig,
        grounded: bool,
    ) -> VelocityIntent {
        debug_assert!(
            self.stage == TickStage::Advanced,
            "compute_velocity_intent called after sample_input without advance_phase"
        );

        let vertical_velocity = if self.takeoff_armed && grounded {
            self.takeoff_armed = false;
            config.takeoff_velocity()
        } else if self.stop_jump_requested {
            self.stop_jump_requested = false;
            if current_velocity.y > 0.0 {
                current_velocity.y * config.jump_deceleration_factor
            } else {
                current_velocity.y
            }
        } else {
            current_velocity.y
        };

        if self.horizontal_input > FLIP_THRESHOLD {
            self.flip_x = false;
        } else if self.horizontal_input < -FLIP_THRESHOLD {
            self.flip_x = true;
        }

        VelocityIntent {
            vertical_velocity,
            horizontal_target_velocity: self.horizontal_input * config.max_speed,
            flip_x: self.flip_x,
        }
    }
}

/// Clamp в [-1, 1], NaN → 0
fn sanitize_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
