use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::interactive::{InteractiveSession, SessionConfig};

pub struct InteractiveOptions {
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

pub async fn run_interactive(options: InteractiveOptions) -> Result<()> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    let resolved = resolve_config(
        &ResolveOptions {
            to: options.to,
            provider: options.provider,
            model: options.model,
        },
        &config_file,
    )?;

    let translator = resolved.build_translator();
    let mut session = InteractiveSession::new(SessionConfig::from(&resolved), translator);
    session.run().await
}
