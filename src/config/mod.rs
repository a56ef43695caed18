//! Configuration file management.

mod manager;

pub use manager::{
    ChatDefaults, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ResolveOptions, ResolvedConfig,
    resolve_config,
};
