//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.calcpad/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::theme::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CalcpadConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Theme used when nothing has been persisted yet.
    pub theme: Option<Theme>,
    pub start_powered_on: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub error_clear_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ERROR_CLEAR_MS: u64 = 1500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub start_powered_on: bool,
    pub error_clear_delay: Duration,
}

/// Values taken from the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub start_powered_on: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.calcpad/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".calcpad").join("config.toml"))
}

/// Load config from `~/.calcpad/config.toml`.
pub fn load_config() -> Result<CalcpadConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(CalcpadConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CalcpadConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<CalcpadConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CalcpadConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CalcpadConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Calcpad Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"              # "light" or "dark"; used until you toggle (Ctrl+T)
# start_powered_on = false     # Or pass --on

# [timing]
# error_clear_ms = 1500        # How long error messages stay on the display
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `persisted_theme` comes from the theme store and outranks the config
/// file's default theme, but not the environment or the CLI.
pub fn resolve(
    config: &CalcpadConfig,
    persisted_theme: Option<Theme>,
    cli: &CliOverrides,
) -> ResolvedConfig {
    resolve_with_env(config, env_theme(), persisted_theme, cli)
}

fn resolve_with_env(
    config: &CalcpadConfig,
    env_theme: Option<Theme>,
    persisted_theme: Option<Theme>,
    cli: &CliOverrides,
) -> ResolvedConfig {
    // Theme: CLI → env → persisted → config → default
    let theme = cli
        .theme
        .or(env_theme)
        .or(persisted_theme)
        .or(config.general.theme)
        .unwrap_or_default();

    let start_powered_on =
        cli.start_powered_on || config.general.start_powered_on.unwrap_or(false);

    let error_clear_ms = config
        .timing
        .error_clear_ms
        .unwrap_or(DEFAULT_ERROR_CLEAR_MS);

    ResolvedConfig {
        theme,
        start_powered_on,
        error_clear_delay: Duration::from_millis(error_clear_ms),
    }
}

fn env_theme() -> Option<Theme> {
    let raw = std::env::var("CALCPAD_THEME").ok()?;
    parse_env_theme(&raw)
}

fn parse_env_theme(raw: &str) -> Option<Theme> {
    match raw.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            warn!("Ignoring CALCPAD_THEME: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalcpadConfig::default();
        assert!(config.general.theme.is_none());
        assert!(config.timing.error_clear_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&CalcpadConfig::default(), None, &CliOverrides::default());
        assert!(!resolved.start_powered_on);
        assert_eq!(resolved.error_clear_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_persisted_theme_beats_config() {
        let config = CalcpadConfig {
            general: GeneralConfig {
                theme: Some(Theme::Light),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Theme::Dark), &CliOverrides::default());
        assert_eq!(resolved.theme, Theme::Dark);
    }

    #[test]
    fn test_cli_wins() {
        let config = CalcpadConfig {
            general: GeneralConfig {
                theme: Some(Theme::Dark),
                start_powered_on: Some(false),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            theme: Some(Theme::Light),
            start_powered_on: true,
        };
        let resolved = resolve(&config, Some(Theme::Dark), &cli);
        assert_eq!(resolved.theme, Theme::Light);
        assert!(resolved.start_powered_on);
    }

    #[test]
    fn test_env_theme_sits_between_cli_and_persisted() {
        let config = CalcpadConfig {
            general: GeneralConfig {
                theme: Some(Theme::Light),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = parse_env_theme("dark");
        assert_eq!(env, Some(Theme::Dark));

        let resolved = resolve_with_env(&config, env, Some(Theme::Light), &CliOverrides::default());
        assert_eq!(resolved.theme, Theme::Dark);

        let cli = CliOverrides {
            theme: Some(Theme::Light),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, env, Some(Theme::Dark), &cli);
        assert_eq!(resolved.theme, Theme::Light);
    }

    #[test]
    fn test_bad_env_theme_is_ignored() {
        let env = parse_env_theme("sepia");
        assert_eq!(env, None);

        let resolved = resolve_with_env(
            &CalcpadConfig::default(),
            env,
            Some(Theme::Dark),
            &CliOverrides::default(),
        );
        assert_eq!(resolved.theme, Theme::Dark);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
theme = "dark"
start_powered_on = true

[timing]
error_clear_ms = 250
"#;
        let config: CalcpadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Dark));
        assert_eq!(config.general.start_powered_on, Some(true));
        let resolved = resolve(
            &config,
            None,
            &CliOverrides {
                theme: Some(Theme::Dark),
                ..Default::default()
            },
        );
        assert_eq!(resolved.error_clear_delay, Duration::from_millis(250));
        assert!(resolved.start_powered_on);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[timing]
error_clear_ms = 900
"#;
        let config: CalcpadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timing.error_clear_ms, Some(900));
        assert!(config.general.theme.is_none());
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ntheme = \"sepia\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_config_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".calcpad").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.theme.is_none());
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.starts_with("# Calcpad Configuration"));
        // The generated file is all comments and must load cleanly
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.timing.error_clear_ms.is_none());
    }
}
