mod manager;

pub use manager::{
    BUILTIN_PROVIDER, ConfigFile, ConfigManager, ProviderConfig, ProviderKind, ResolveOptions,
    ResolvedConfig, TidyConfig, resolve_config,
};
