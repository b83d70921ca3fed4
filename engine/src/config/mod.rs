mod config_content_provider;
mod config_error;
mod config_manager;
mod config_serializer;
mod snake_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_error::ConfigError;
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use snake_config::SnakeConfig;
pub use validate::Validate;
