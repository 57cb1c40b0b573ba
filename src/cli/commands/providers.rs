//! Provider listing command handler.

use anyhow::Result;

use crate::config::{ConfigManager, ProviderKind};
use crate::ui::Style;

const fn kind_label(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Google => "google",
        ProviderKind::Openai => "openai-compatible",
    }
}

/// Prints providers to stdout.
///
/// With `specific_provider`, shows details for that provider. Otherwise lists
/// every provider, including the built-in `google` one.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let config = ConfigManager::new()?.load_or_default()?;
    let default_provider = config
        .tidy
        .provider
        .as_deref()
        .unwrap_or(crate::config::BUILTIN_PROVIDER);

    if let Some(provider_name) = specific_provider {
        let Some(provider) = config.provider(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };

        let marker = if default_provider == provider_name {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("Provider: {}{marker}", Style::value(provider_name));
        println!("  kind     = {}", kind_label(provider.kind));
        println!("  endpoint = {}", Style::secondary(&provider.endpoint));
        if provider.requires_api_key() {
            let has_key = provider.get_api_key().is_some();
            println!(
                "  api_key  = {}",
                if has_key { "(set)" } else { "(not set)" }
            );
        }
        if provider.kind == ProviderKind::Openai {
            if provider.models.is_empty() {
                println!("  models   = (none configured)");
            } else {
                println!("  models:");
                for model in &provider.models {
                    println!("    - {model}");
                }
            }
        }
        return Ok(());
    }

    println!("{}\n", Style::header("Translation providers"));
    for name in config.provider_names() {
        let Some(provider) = config.provider(&name) else {
            continue;
        };
        let marker = if default_provider == name {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("  {}{marker}", Style::value(&name));
        println!(
            "    {} {}",
            Style::label(kind_label(provider.kind)),
            Style::secondary(&provider.endpoint)
        );
        if !provider.models.is_empty() {
            println!("    models: {}", provider.models.join(", "));
        }
    }

    Ok(())
}
