//! Конфигурация движения игрока (per-entity, иммутабельна после spawn)
//!
//! Загружается из RON (`data/movement.ron`) или берётся Default.
//! Невалидный конфиг отклоняется при создании, а не молча терпится в тике.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;

pub use error::ConfigError;

/// Параметры движения и прыжка
///
/// Defaults совпадают с исходной моделью платформера:
/// скорость 7, takeoff 7, модификатор прыжка 1.5, торможение 0.5.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct MovementConfig {
    /// Максимальная горизонтальная скорость (units/sec)
    pub max_speed: f32,
    /// Начальная вертикальная скорость прыжка
    pub jump_takeoff_speed: f32,
    /// Глобальный множитель прыжка (сложность / модель)
    pub jump_speed_modifier: f32,
    /// Множитель vertical velocity при отпускании прыжка
    pub jump_deceleration_factor: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 7.0,
            jump_takeoff_speed: 7.0,
            jump_speed_modifier: 1.5,
            jump_deceleration_factor: 0.5,
        }
    }
}

impl MovementConfig {
    pub fn new(
        max_speed: f32,
        jump_takeoff_speed: f32,
        jump_speed_modifier: f32,
        jump_deceleration_factor: f32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            max_speed,
            jump_takeoff_speed,
            jump_speed_modifier,
            jump_deceleration_factor,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        if !self.jump_takeoff_speed.is_finite() || self.jump_takeoff_speed <= 0.0 {
            return Err(ConfigError::InvalidTakeoffSpeed(self.jump_takeoff_speed));
        }
        if !self.jump_speed_modifier.is_finite() || self.jump_speed_modifier <= 0.0 {
            return Err(ConfigError::InvalidSpeedModifier(self.jump_speed_modifier));
        }
        if !(0.0..=1.0).contains(&self.jump_deceleration_factor) {
            return Err(ConfigError::InvalidDecelerationFactor(
                self.jump_deceleration_factor,
            ));
        }
        Ok(())
    }

    /// Парсит и валидирует конфиг из RON строки (отсутствующие поля → Default)
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_ron_str(&content)
    }

    /// Итоговая скорость отрыва (takeoff × modifier)
    pub fn takeoff_velocity(&self) -> f32 {
        self.jump_takeoff_speed * self.jump_speed_modifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MovementConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.takeoff_velocity(), 10.5);
    }

    #[test]
    fn test_rejects_non_positive_speeds() {
        assert!(matches!(
            MovementConfig::new(0.0, 7.0, 1.0, 0.5),
            Err(ConfigError::InvalidMaxSpeed(_))
        ));
        assert!(matches!(
            MovementConfig::new(7.0, -1.0, 1.0, 0.5),
            Err(ConfigError::InvalidTakeoffSpeed(_))
        ));
        assert!(matches!(
            MovementConfig::new(f32::NAN, 7.0, 1.0, 0.5),
            Err(ConfigError::InvalidMaxSpeed(_))
        ));
    }

    #[test]
    fn test_rejects_bad_modifiers() {
        assert!(matches!(
            MovementConfig::new(7.0, 7.0, 0.0, 0.5),
            Err(ConfigError::InvalidSpeedModifier(_))
        ));
        assert!(matches!(
            MovementConfig::new(7.0, 7.0, 1.0, 1.5),
            Err(ConfigError::InvalidDecelerationFactor(_))
        ));
    }

    #[test]
    fn test_parse_partial_ron() {
        let config = MovementConfig::from_ron_str("(max_speed: 5.0, jump_speed_modifier: 1.0)")
            .unwrap();
        assert_eq!(config.max_speed, 5.0);
        assert_eq!(config.jump_speed_modifier, 1.0);
        // Остальное из Default
        assert_eq!(config.jump_takeoff_speed, 7.0);
        assert_eq!(config.jump_deceleration_factor, 0.5);
    }

    #[test]
    fn test_parse_invalid_ron_values() {
        let result = MovementConfig::from_ron_str("(max_speed: -3.0)");
        assert!(matches!(result, Err(ConfigError::InvalidMaxSpeed(v)) if v == -3.0));

        let result = MovementConfig::from_ron_str("(max_speed: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = MovementConfig::load_from_file(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }
}
