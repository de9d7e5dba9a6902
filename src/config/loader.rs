//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::TemplateId;
use crate::error::{CardError, CardResult};

use super::types::{Config, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "profilecard.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        write!(f, ": unknown key '{}'", self.key)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CardResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CardError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest(&key, CONFIG_KEYS),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("profilecard/config.toml")));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!("{warning}");
                }
                tracing::debug!(file = %path.display(), "loaded config");
                return config.with_env_overrides();
            }
            Err(e) => tracing::warn!(file = %path.display(), error = %e, "ignoring config file"),
        }
    }

    Config::default().with_env_overrides()
}

/// Apply PROFILECARD_* overrides read through `lookup`
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup("PROFILECARD_TEMPLATE") {
        let names: Vec<&str> = TemplateId::ALL.iter().map(TemplateId::as_str).collect();
        match TemplateId::ALL.iter().find(|t| t.as_str() == raw.trim()) {
            Some(template) => config.render.default_template = *template,
            None => warn_invalid_env("PROFILECARD_TEMPLATE", &raw, &names),
        }
    }

    if let Some(raw) = lookup("PROFILECARD_SUBSCRIBED") {
        config.render.subscribed =
            !matches!(raw.trim().to_lowercase().as_str(), "" | "0" | "false" | "no");
    }

    if let Some(raw) = lookup("PROFILECARD_MOBILE_BREAKPOINT") {
        match raw.trim().parse::<u32>() {
            Ok(px) => config.preview.mobile_breakpoint = px,
            Err(_) => warn_invalid_env("PROFILECARD_MOBILE_BREAKPOINT", &raw, &[]),
        }
    }

    if let Some(raw) = lookup("PROFILECARD_LIVE_BASE_URL") {
        config.preview.live_base_url = Some(raw.trim().to_string()).filter(|s| !s.is_empty());
    }

    if let Some(raw) = lookup("PROFILECARD_PLACEHOLDERS") {
        let raw = raw.trim();
        config.placeholders.path = (!raw.is_empty()).then(|| PathBuf::from(raw));
    }

    if let Some(raw) = lookup("PROFILECARD_VERBOSITY") {
        match Verbosity::parse(&raw) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => warn_invalid_env(
                "PROFILECARD_VERBOSITY",
                &raw,
                &["quiet", "normal", "verbose", "debug"],
            ),
        }
    }

    config
}

fn warn_invalid_env(var: &str, value: &str, valid: &[&str]) {
    let suggestion = suggest(&value.trim().to_lowercase(), valid);
    tracing::warn!(
        var,
        value,
        suggestion = suggestion.as_deref().unwrap_or(""),
        "invalid environment override, keeping configured value"
    );
}

const CONFIG_KEYS: &[&str] = &[
    "render",
    "default_template",
    "subscribed",
    "preview",
    "mobile_breakpoint",
    "live_base_url",
    "placeholders",
    "path",
    "output",
    "verbosity",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Closest candidate within two edits
fn suggest(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
