//! CLI command implementations

mod check;
mod render;
mod templates;
mod vcard;

pub use check::cmd_check;
pub use render::cmd_render;
pub use templates::cmd_templates;
pub use vcard::cmd_vcard;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use profilecard::config::Config;
use profilecard::{
    compose, ComposeFlags, ProfileState, ProfileStore, StaticPlaceholderCatalog, TemplateId,
    ViewModel,
};

use crate::cli::ProfileArgs;

/// Explicit config file, or the project/user hierarchy
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            for warning in &warnings {
                tracing::warn!("{warning}");
            }
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir()?;
            Ok(Config::load_or_default(Some(&cwd)))
        }
    }
}

/// Read a profile; `default_template` applies when the file names none
pub fn load_profile(path: &Path, default_template: TemplateId) -> Result<ProfileState> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;
    let names_template = value.get("templateId").is_some();
    let mut state: ProfileState = serde_json::from_value(value)
        .with_context(|| format!("invalid profile {}", path.display()))?;
    if !names_template {
        state.template_id = default_template;
    }
    Ok(state)
}

fn load_catalog(args: &ProfileArgs, config: &Config) -> Result<StaticPlaceholderCatalog> {
    match args.placeholders.as_ref().or(config.placeholders.path.as_ref()) {
        Some(path) => Ok(StaticPlaceholderCatalog::load(path)?),
        None => Ok(StaticPlaceholderCatalog::builtin()),
    }
}

/// Load, sanitize and compose the profile named by `args`
pub fn compose_profile(
    args: &ProfileArgs,
    config: &Config,
    adjust: impl FnOnce(&mut ProfileState),
) -> Result<ViewModel> {
    let mut raw = load_profile(&args.profile, config.render.default_template)?;
    adjust(&mut raw);
    let store = ProfileStore::from_saved(raw);
    let catalog = load_catalog(args, config)?;
    let state = store.state();
    let flags = ComposeFlags {
        has_saved_data: !args.draft,
        subscribed: args.subscribed || config.render.subscribed,
    };
    Ok(compose(state, &state.visibility, flags, &catalog))
}

/// Write to `output`, or stdout when absent
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(file = %path.display(), bytes = content.len(), "wrote output");
        }
        None => print!("{content}"),
    }
    Ok(())
}
