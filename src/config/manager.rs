use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::widget::Language;

/// The RAG proxy endpoint used when neither the CLI nor the config file names one.
///
/// Fixed at build time; override with `RAG_CHAT_ENDPOINT` when compiling.
pub const DEFAULT_ENDPOINT: &str = match option_env!("RAG_CHAT_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "https://sakura-jimbocho-chatbot-rag-server.onrender.com/rag-chat",
};

/// Default settings in the `[chat]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatDefaults {
    /// The RAG proxy chat endpoint URL.
    pub endpoint: Option<String>,
    /// Language to select automatically at startup.
    pub lang: Option<Language>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/rag-chat/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chat: ChatDefaults,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    /// `None` means the user picks a language interactively.
    pub language: Option<Language>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub lang: Option<Language>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over [`DEFAULT_ENDPOINT`].
///
/// # Errors
///
/// Returns an error if the resolved endpoint is not an absolute http(s) URL.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_deref()
        .or(config_file.chat.endpoint.as_deref())
        .unwrap_or(DEFAULT_ENDPOINT);

    let url = Url::parse(endpoint).with_context(|| {
        format!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Please provide an absolute URL via:\n  \
             - CLI option: rag-chat --endpoint <url>\n  \
             - Config file: Run 'rag-chat configure' to set up configuration"
        )
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Invalid endpoint URL: '{endpoint}' (expected http or https)");
    }

    Ok(ResolvedConfig {
        endpoint: endpoint.to_string(),
        language: options.lang.or(config_file.chat.lang),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/rag-chat/config.toml`
    /// or `~/.config/rag-chat/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        crate::fs::atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("rag-chat").join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            chat: ChatDefaults {
                endpoint: Some("http://localhost:3000/rag-chat".to_string()),
                lang: Some(Language::Ja),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(
            loaded.chat.endpoint.as_deref(),
            Some("http://localhost:3000/rag-chat")
        );
        assert_eq!(loaded.chat.lang, Some(Language::Ja));
    }

    #[test]
    fn test_saved_file_uses_language_codes() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            chat: ChatDefaults {
                endpoint: None,
                lang: Some(Language::En),
            },
        };
        manager.save(&config).unwrap();

        let contents = fs::read_to_string(manager.config_path()).unwrap();
        assert!(contents.contains("[chat]"));
        assert!(contents.contains("lang = \"en\""));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert!(manager.load_or_default().unwrap().chat.endpoint.is_none());
    }

    #[test]
    fn test_load_rejects_unknown_language() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        fs::write(manager.config_path(), "[chat]\nlang = \"fr\"\n").unwrap();

        assert!(manager.load().is_err());
        assert!(manager.load_or_default().is_err());
    }

    #[test]
    fn test_resolve_config_uses_default_endpoint() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.language, None);
    }

    #[test]
    fn test_resolve_config_rejects_relative_endpoint() {
        let options = ResolveOptions {
            endpoint: Some("/rag-chat".to_string()),
            lang: None,
        };

        let result = resolve_config(&options, &ConfigFile::default());

        assert!(result.unwrap_err().to_string().contains("Invalid endpoint URL"));
    }

    #[test]
    fn test_resolve_config_rejects_non_http_scheme() {
        let options = ResolveOptions {
            endpoint: Some("ftp://example.com/rag-chat".to_string()),
            lang: None,
        };

        assert!(resolve_config(&options, &ConfigFile::default()).is_err());
    }
}
