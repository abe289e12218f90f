//! Ошибки конфигурации движения

use std::path::PathBuf;

/// Ошибка загрузки или валидации MovementConfig
///
/// Единственный fallible путь в симуляции: тики сами по себе тотальны.
#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(ron::error::SpannedError),
    /// max_speed ≤ 0 или не конечное число
    InvalidMaxSpeed(f32),
    /// jump_takeoff_speed ≤ 0 или не конечное число
    InvalidTakeoffSpeed(f32),
    /// jump_speed_modifier ≤ 0 или не конечное число
    InvalidSpeedModifier(f32),
    /// jump_deceleration_factor вне [0, 1]
    InvalidDecelerationFactor(f32),
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::Parse(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Failed to read {}: {}", path.display(), e),
            Self::Parse(e) => write!(f, "RON parse error: {}", e),
            Self::InvalidMaxSpeed(v) => write!(f, "max_speed must be positive, got {}", v),
            Self::InvalidTakeoffSpeed(v) => {
                write!(f, "jump_takeoff_speed must be positive, got {}", v)
            }
            Self::InvalidSpeedModifier(v) => {
                write!(f, "jump_speed_modifier must be positive, got {}", v)
            }
            Self::InvalidDecelerationFactor(v) => {
                write!(f, "jump_deceleration_factor must be within [0, 1], got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}
