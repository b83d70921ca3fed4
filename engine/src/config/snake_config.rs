use serde::{Deserialize, Serialize};

use super::Validate;

const MIN_FIELD_SIZE: u32 = 5;
const MAX_FIELD_SIZE: u32 = 500;
const MIN_TICK_INTERVAL_MS: u32 = 10;
const MAX_TICK_INTERVAL_MS: u32 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SnakeConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub initial_length: u32,
    pub tick_interval_ms: u32,
    pub seed: Option<u64>,
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < MIN_FIELD_SIZE || self.field_height < MIN_FIELD_SIZE {
            return Err(format!(
                "field dimensions must be at least {0}x{0}",
                MIN_FIELD_SIZE
            ));
        }
        if self.field_width > MAX_FIELD_SIZE || self.field_height > MAX_FIELD_SIZE {
            return Err(format!(
                "field dimensions must not exceed {0}x{0}",
                MAX_FIELD_SIZE
            ));
        }
        if self.initial_length == 0 {
            return Err("initial_length must be at least 1".to_string());
        }
        // The starting snake is centred and trails east of its head.
        if self.initial_length > self.field_width / 2 {
            return Err("initial_length must not exceed half of field_width".to_string());
        }
        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(format!("tick_interval_ms must be at least {}", MIN_TICK_INTERVAL_MS));
        }
        if self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(format!("tick_interval_ms must not exceed {}", MAX_TICK_INTERVAL_MS));
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            field_width: 50,
            field_height: 50,
            initial_length: 5,
            tick_interval_ms: 50,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SnakeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = SnakeConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: SnakeConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_file() {
        let file_path = get_temp_file_path();
        let config = SnakeConfig {
            field_width: 40,
            field_height: 30,
            initial_length: 4,
            tick_interval_ms: 120,
            seed: Some(1234),
        };

        let writer = ConfigManager::<FileContentConfigProvider, SnakeConfig>::from_yaml_file(&file_path);
        writer.set_config(&config).unwrap();

        let reader = ConfigManager::<FileContentConfigProvider, SnakeConfig>::from_yaml_file(&file_path);
        assert_eq!(reader.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert!(provider.get_config_content().unwrap().is_none());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: SnakeConfig = serializer.deserialize("tick_interval_ms: 200\n").unwrap();
        assert_eq!(config.tick_interval_ms, 200);
        assert_eq!(config.field_width, 50);
        assert_eq!(config.initial_length, 5);
    }

    #[test]
    fn test_validation_rejects_out_of_range_values() {
        let too_small = SnakeConfig { field_width: 4, ..SnakeConfig::default() };
        assert!(too_small.validate().is_err());

        let too_large = SnakeConfig { field_height: 501, ..SnakeConfig::default() };
        assert!(too_large.validate().is_err());

        let no_body = SnakeConfig { initial_length: 0, ..SnakeConfig::default() };
        assert!(no_body.validate().is_err());

        let too_long = SnakeConfig { field_width: 10, initial_length: 6, ..SnakeConfig::default() };
        assert!(too_long.validate().is_err());

        let too_fast = SnakeConfig { tick_interval_ms: 5, ..SnakeConfig::default() };
        assert!(too_fast.validate().is_err());
    }
}
