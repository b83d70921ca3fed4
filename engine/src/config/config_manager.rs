use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config document from a content provider.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Returns the cached config, loading it on first use. A missing
    /// document yields `TConfig::default()` without caching it.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.lock_cache();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.lock_cache() = Some(config.clone());
        Ok(())
    }

    fn lock_cache(&self) -> MutexGuard<'_, Option<TConfig>> {
        self.config.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::config::SnakeConfig;

    #[derive(Default)]
    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn memory_manager(content: Option<&str>) -> ConfigManager<MemoryContentProvider, SnakeConfig> {
        let provider = MemoryContentProvider {
            content: RefCell::new(content.map(str::to_string)),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config().unwrap(), SnakeConfig::default());
    }

    #[test]
    fn test_set_then_get_returns_stored_config() {
        let manager = memory_manager(None);
        let config = SnakeConfig {
            field_width: 30,
            field_height: 20,
            seed: Some(99),
            ..SnakeConfig::default()
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let manager = memory_manager(Some("field_width: 2\nfield_height: 50\n"));
        let result = manager.get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_set_config_rejects_invalid_config() {
        let manager = memory_manager(None);
        let config = SnakeConfig {
            tick_interval_ms: 0,
            ..SnakeConfig::default()
        };
        assert!(matches!(manager.set_config(&config), Err(ConfigError::Invalid(_))));
        assert!(manager.config_content_provider.get_config_content().unwrap().is_none());
    }

    #[test]
    fn test_garbage_content_is_a_deserialize_error() {
        let manager = memory_manager(Some("field_width: [not, a, number]"));
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }
}
