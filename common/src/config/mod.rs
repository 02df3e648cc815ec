mod config_manager;
mod config_serializer;
mod content_provider;
mod validate;

pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, DecimalSerializer, YamlConfigSerializer};
pub use content_provider::{ContentProvider, FileContentProvider};
pub use validate::Validate;
