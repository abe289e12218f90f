//! Movement events
//!
//! Генерируются jump state machine systems, читаются host'ом (audio,
//! анимация, scoring). Fire-and-forget, по одному на переход.

use bevy::prelude::*;

use crate::movement::state_machine::JumpNotification;

/// Lifecycle событие прыжка конкретного игрока
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMovementEvent {
    /// Оторвался от земли (Jumping → InFlight)
    Jumped { entity: Entity },
    /// Приземлился (InFlight → Landed)
    Landed { entity: Entity },
    /// Отпустил прыжок
    StopJumpRequested { entity: Entity },
}

impl PlayerMovementEvent {
    pub fn from_notification(entity: Entity, notification: JumpNotification) -> Self {
        match notification {
            JumpNotification::Jumped => Self::Jumped { entity },
            JumpNotification::Landed => Self::Landed { entity },
            JumpNotification::StopJumpRequested => Self::StopJumpRequested { entity },
        }
    }

    pub fn entity(&self) -> Entity {
        match self {
            Self::Jumped { entity } | Self::Landed { entity } | Self::StopJumpRequested { entity } => {
                *entity
            }
        }
    }
}

/// Command: вкл/выкл управление игроком (применяется на границе тика)
///
/// Генерируется host'ом: катсцены, смерть, победа.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetControlEnabled {
    pub entity: Entity,
    pub enabled: bool,
}
