use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{
    DEFAULT_GOOGLE_ENDPOINT, GoogleTranslator, OpenAiTranslator, TargetLanguage, Translator,
};
use crate::ui::Style;

/// Name of the provider that is always available without configuration.
pub const BUILTIN_PROVIDER: &str = "google";

/// Default settings in the `[tidy]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TidyConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name for chat-completion providers.
    pub model: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
}

/// Which wire protocol a provider speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Keyless Google Translate web endpoint.
    Google,
    /// OpenAI-compatible `/v1/chat/completions`.
    #[default]
    Openai,
}

/// Configuration for a translation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,
    /// Base URL of the provider.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// The provider used when nothing is configured.
    pub fn builtin() -> Self {
        Self {
            kind: ProviderKind::Google,
            endpoint: DEFAULT_GOOGLE_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: None,
            models: Vec::new(),
        }
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tidy/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub tidy: TidyConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in one for its name.
    pub fn provider(&self, name: &str) -> Option<ProviderConfig> {
        self.providers
            .get(name)
            .cloned()
            .or_else(|| (name == BUILTIN_PROVIDER).then(ProviderConfig::builtin))
    }

    /// All provider names, built-in included, sorted.
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        if !self.providers.contains_key(BUILTIN_PROVIDER) {
            names.push(BUILTIN_PROVIDER.to_string());
        }
        names.sort();
        names
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    pub kind: ProviderKind,
    /// The provider base URL.
    pub endpoint: String,
    /// The model, for chat-completion providers.
    pub model: Option<String>,
    /// The API key (if required).
    pub api_key: Option<String>,
    pub target: TargetLanguage,
}

impl ResolvedConfig {
    /// Builds the translator this configuration describes.
    pub fn build_translator(&self) -> Box<dyn Translator> {
        match self.kind {
            ProviderKind::Google => Box::new(GoogleTranslator::new(self.endpoint.clone())),
            ProviderKind::Openai => Box::new(OpenAiTranslator::new(
                self.provider_name.clone(),
                self.endpoint.clone(),
                self.model.clone().unwrap_or_default(),
                self.api_key.clone(),
            )),
        }
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language override.
    pub to: Option<String>,
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults
/// (Vietnamese, provider `google`).
///
/// # Errors
///
/// Returns an error if the language is invalid, the provider is unknown, a
/// chat-completion provider has no model, or a required API key is missing.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let target = match options.to.as_ref().or(config_file.tidy.to.as_ref()) {
        Some(code) => code.parse::<TargetLanguage>()?,
        None => TargetLanguage::default(),
    };

    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.tidy.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| BUILTIN_PROVIDER.to_string());

    let provider_config = config_file.provider(&provider_name).ok_or_else(|| {
        anyhow::anyhow!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/tidy/config.toml",
            config_file.provider_names().join("\n  - ")
        )
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.tidy.model.as_ref())
        .cloned();

    if provider_config.kind == ProviderKind::Openai {
        let Some(model) = model.as_ref() else {
            bail!(
                "Missing required configuration: 'model' for provider '{provider_name}'\n\n\
                 Please provide it via:\n  \
                 - CLI option: tidy --model <name>\n  \
                 - Config file: ~/.config/tidy/config.toml"
            );
        };

        if !provider_config.models.is_empty() && !provider_config.models.contains(model) {
            eprintln!(
                "{} Model '{}' is not in the configured models list for '{}'\n\
                 Configured models: {}\n\
                 Proceeding anyway...\n",
                Style::warning("Warning:"),
                model,
                provider_name,
                provider_config.models.join(", ")
            );
        }
    }

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/tidy/config.toml"
        );
    }

    Ok(ResolvedConfig {
        provider_name,
        kind: provider_config.kind,
        endpoint: provider_config.endpoint,
        model,
        api_key,
        target,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tidy/config.toml`
    /// or `~/.config/tidy/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Uses an explicit config file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path.display(), "no config file");
                Ok(ConfigFile::default())
            }
            _ => self.load(),
        }
    }
}
