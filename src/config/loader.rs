//! Configuration file loading with precedence handling.

use crate::search::SortOrder;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, etc.).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unspecified fields fall back to hardcoded
/// defaults. Corresponds to `~/.config/farescout/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default result ordering: "asc" or "desc".
    #[serde(default)]
    pub sort: Option<SortOrder>,

    /// Path to the ticket catalog JSON.
    #[serde(default)]
    pub tickets_path: Option<PathBuf>,

    /// Path to the airport lists JSON.
    #[serde(default)]
    pub airports_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Result ordering on entering the results screen.
    pub sort: SortOrder,
    /// Ticket catalog path.
    pub tickets_path: PathBuf,
    /// Airport lists path.
    pub airports_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            sort: SortOrder::Ascending,
            tickets_path: PathBuf::from("data/tickets.json"),
            airports_path: PathBuf::from("data/airports.json"),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// `~/.local/state/farescout/farescout.log` on Unix-like systems, the
/// platform equivalent elsewhere. Falls back to the current directory when
/// no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("farescout").join("farescout.log")
    } else {
        PathBuf::from("farescout.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error; defaults
/// apply).
///
/// # Errors
///
/// Returns an error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// `~/.config/farescout/config.toml` on Unix, the platform equivalent
/// elsewhere. `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("farescout").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FARESCOUT_CONFIG` environment variable
/// 3. Default path `~/.config/farescout/config.toml`
///
/// Missing config files are NOT errors; defaults apply.
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FARESCOUT_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, `Some(value)` wins; otherwise the
/// default applies.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        sort: config.sort.unwrap_or(defaults.sort),
        tickets_path: config.tickets_path.unwrap_or(defaults.tickets_path),
        airports_path: config.airports_path.unwrap_or(defaults.airports_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FARESCOUT_SORT`: "asc" or "desc" (anything else is ignored)
/// - `FARESCOUT_TICKETS`: ticket catalog path
/// - `FARESCOUT_AIRPORTS`: airport lists path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(sort) = std::env::var("FARESCOUT_SORT") {
        match sort.as_str() {
            "asc" => config.sort = SortOrder::Ascending,
            "desc" => config.sort = SortOrder::Descending,
            _ => {}
        }
    }
    if let Ok(path) = std::env::var("FARESCOUT_TICKETS") {
        config.tickets_path = PathBuf::from(path);
    }
    if let Ok(path) = std::env::var("FARESCOUT_AIRPORTS") {
        config.airports_path = PathBuf::from(path);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually
/// passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    sort_override: Option<SortOrder>,
    tickets_override: Option<PathBuf>,
    airports_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(sort) = sort_override {
        config.sort = sort;
    }
    if let Some(path) = tickets_override {
        config.tickets_path = path;
    }
    if let Some(path) = airports_override {
        config.airports_path = path;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_when_no_config_file() {
        let resolved = merge_config(None);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.sort, SortOrder::Ascending);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let result = load_config_file("/nonexistent/farescout/config.toml");
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn parses_full_config_file() {
        let path = std::env::temp_dir().join("farescout_config_full.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "sort = \"desc\"\ntickets_path = \"/srv/tickets.json\"\nairports_path = \"/srv/airports.json\"\nlog_file_path = \"/tmp/fs.log\""
        )
        .unwrap();

        let config = load_config_file(&path).unwrap().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.sort, Some(SortOrder::Descending));
        assert_eq!(config.tickets_path, Some(PathBuf::from("/srv/tickets.json")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let path = std::env::temp_dir().join("farescout_config_unknown.toml");
        std::fs::write(&path, "no_such_field = true\n").unwrap();

        let result = load_config_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn invalid_sort_value_is_a_parse_error() {
        let path = std::env::temp_dir().join("farescout_config_badsort.toml");
        std::fs::write(&path, "sort = \"sideways\"\n").unwrap();

        let result = load_config_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn merge_prefers_file_values_over_defaults() {
        let file = ConfigFile {
            sort: Some(SortOrder::Descending),
            ..Default::default()
        };
        let resolved = merge_config(Some(file));
        assert_eq!(resolved.sort, SortOrder::Descending);
        assert_eq!(
            resolved.tickets_path,
            ResolvedConfig::default().tickets_path,
            "unset fields keep defaults"
        );
    }

    #[test]
    fn cli_overrides_win_over_everything() {
        let file = ConfigFile {
            sort: Some(SortOrder::Descending),
            tickets_path: Some(PathBuf::from("/from/file.json")),
            ..Default::default()
        };
        let merged = merge_config(Some(file));
        let resolved = apply_cli_overrides(
            merged,
            Some(SortOrder::Ascending),
            Some(PathBuf::from("/from/cli.json")),
            None,
        );

        assert_eq!(resolved.sort, SortOrder::Ascending);
        assert_eq!(resolved.tickets_path, PathBuf::from("/from/cli.json"));
    }

    #[test]
    fn none_cli_overrides_change_nothing() {
        let base = ResolvedConfig::default();
        let resolved = apply_cli_overrides(base.clone(), None, None, None);
        assert_eq!(resolved, base);
    }
}
