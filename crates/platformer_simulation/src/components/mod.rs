//! ECS Components для игровых entity
//!
//! Доменные компоненты живут в своих модулях (movement, input, physics,
//! presentation); здесь: общие маркеры.
//! - player: player control marker (Player)

pub mod player;

pub use player::*;
