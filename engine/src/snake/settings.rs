use std::time::Duration;

use crate::config::SnakeConfig;
use super::types::FieldSize;

pub const DEFAULT_INITIAL_LENGTH: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_size: FieldSize,
    pub initial_length: usize,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
}

impl From<&SnakeConfig> for SnakeSessionSettings {
    fn from(config: &SnakeConfig) -> Self {
        Self {
            field_size: FieldSize::new(config.field_width, config.field_height),
            initial_length: config.initial_length.max(1) as usize,
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
            seed: config.seed,
        }
    }
}
