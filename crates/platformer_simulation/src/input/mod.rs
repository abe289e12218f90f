//! Player input module
//!
//! Нормализует сырой input платформы в единый triple
//! `(horizontal, jump_pressed, jump_released)` для jump state machine.
//!
//! # Архитектура
//!
//! ```text
//! Host (keyboard / gamepad / touch screen)
//!     ↓
//! RawInputFrame (resource, заполняется host'ом или InputDriver'ом)
//!     ↓
//! InputSource (AxisInputAdapter | TouchZoneAdapter) - source.rs, touch.rs
//!     ↓
//! PlayerInput (component) → PlayerMovementState::sample_input
//! ```
//!
//! Выбор adapter'а: `InputMode` из конфигурации host'а, платформенных
//! проверок внутри state machine нет.

pub mod scripted;
pub mod source;
pub mod systems;
pub mod touch;


pub use scripted::*;
pub use source::*;
pub use systems::*;
pub use touch::*;

use bevy::prelude::*;

use crate::TickSet;

/// Input Plugin
///
/// Host выбирает adapter через `InputPlugin { mode }`; RawInputFrame
/// и ActiveInputSource регистрируются как resources.
#[derive(Default)]
pub struct InputPlugin {
    pub mode: InputMode,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RawInputFrame>()
            .insert_resource(ActiveInputSource::new(self.mode))
            .add_systems(
                FixedUpdate,
                (drive_raw_input, read_input_source)
                    .chain()
                    .in_set(TickSet::Input),
            );
    }
}
