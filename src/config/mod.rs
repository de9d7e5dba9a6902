//! Configuration module for profilecard
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PROFILECARD_*)
//! 3. Project config (profilecard.toml)
//! 4. User config (<config dir>/profilecard/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    Config, OutputConfig, PlaceholdersConfig, PreviewConfig, RenderConfig, Verbosity,
    DEFAULT_MOBILE_BREAKPOINT,
};
