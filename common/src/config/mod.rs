//! YAML-backed settings: a content provider reads raw text, a serializer parses it, and the
//! manager validates and caches the result.

mod config_content_provider;
mod config_manager;
mod config_serializer;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
