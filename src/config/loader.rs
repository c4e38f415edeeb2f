//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::TraversalOrder;

use super::types::WireupConfig;
use super::PROJECT_CONFIG_FILE;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {file}: {message}")]
    Parse { file: PathBuf, message: String },
}

/// Non-fatal configuration warning, such as an unknown key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed, when the key could be located
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A relative `translator.dir` is resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> Result<(WireupConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: WireupConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
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
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok((config.resolve_paths(base), warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> WireupConfig {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            if let Some(config) = load_logged(&project_config) {
                return config.with_env_overrides();
            }
        }
    }

    if let Some(user_config_dir) = user_config_dir() {
        let user_config = user_config_dir.join("wireup/config.toml");
        if user_config.exists() {
            if let Some(config) = load_logged(&user_config) {
                return config.with_env_overrides();
            }
        }
    }

    let config = match project_root {
        Some(root) => WireupConfig::default().resolve_paths(root),
        None => WireupConfig::default(),
    };
    config.with_env_overrides()
}

fn load_logged(path: &Path) -> Option<WireupConfig> {
    match load_with_warnings(path) {
        Ok((config, warnings)) => {
            for w in &warnings {
                warn!(
                    key = %w.key,
                    file = %w.file.display(),
                    line = ?w.line,
                    suggestion = ?w.suggestion,
                    "unknown config key"
                );
            }
            debug!(file = %path.display(), "config loaded");
            Some(config)
        }
        Err(e) => {
            warn!(error = %e, "ignoring unreadable config");
            None
        }
    }
}

/// Apply environment variable overrides (WIREUP_* prefix)
pub fn with_env_overrides<F>(mut config: WireupConfig, var: F) -> WireupConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = var("WIREUP_TRANSLATIONS_DIR").filter(|v| !v.is_empty()) {
        config.translator.dir = PathBuf::from(dir);
    }

    if let Some(service) = var("WIREUP_TRANSLATOR_SERVICE").filter(|v| !v.is_empty()) {
        config.translator.service = service;
    }

    if let Some(registry) = var("WIREUP_CONVERTER_REGISTRY").filter(|v| !v.is_empty()) {
        config.converter.registry = registry;
    }

    if let Some(tag) = var("WIREUP_CONVERTER_TAG").filter(|v| !v.is_empty()) {
        config.converter.tag = tag;
    }

    if let Some(value) = var("WIREUP_TRAVERSAL") {
        match TraversalOrder::parse(&value) {
            Some(order) => config.translator.traversal = order,
            None => warn!(value = %value, "unknown WIREUP_TRAVERSAL, keeping configured order"),
        }
    }

    config
}

/// XDG config directory, falling back to the platform default
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// 1-based line of the first `key = ...` assignment or `[key]` table header
pub(super) fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            let assigns = line
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            let opens = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .is_some_and(|table| table.trim().rsplit('.').next() == Some(key));
            assigns || opens
        })
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "translator",
        "service",
        "dir",
        "traversal",
        "converter",
        "registry",
        "tag",
        "attribute",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Edit distance counted in chars
pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
