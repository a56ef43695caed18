use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigFile, ConfigManager, ResolveOptions, resolve_config};
use crate::widget::Language;

pub struct ChatOptions {
    pub lang: Option<Language>,
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(options)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

fn load_session_config(options: ChatOptions) -> Result<SessionConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default().unwrap_or_else(|e| {
        crate::warn!("Warning: ignoring config file: {e:#}\n");
        ConfigFile::default()
    });

    let resolve_options = ResolveOptions {
        endpoint: options.endpoint,
        lang: options.lang,
    };
    let resolved = resolve_config(&resolve_options, &file_config)?;

    Ok(SessionConfig::new(resolved.endpoint, resolved.language))
}
