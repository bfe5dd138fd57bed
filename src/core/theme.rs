//! # Theme Store
//!
//! Remembers whether the user prefers the light or dark palette.
//!
//! The preference is a single word, `light` or `dark`, kept in
//! `~/.calcpad/theme`. It is read once at startup and rewritten on every
//! toggle. Writes use atomic rename (write `.tmp`, then `rename()`).

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

#[derive(Debug)]
pub enum ThemeStoreError {
    Io(io::Error),
}

impl fmt::Display for ThemeStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeStoreError::Io(e) => write!(f, "theme store I/O error: {e}"),
        }
    }
}

impl std::error::Error for ThemeStoreError {}

/// File-backed theme preference.
///
/// A store without a path (no home directory) keeps the theme in memory
/// only; loads return `None` and saves are no-ops.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: Option<PathBuf>,
}

impl ThemeStore {
    /// The default store at `~/.calcpad/theme`.
    pub fn open() -> Self {
        let path = dirs::home_dir().map(|h| h.join(".calcpad").join("theme"));
        if path.is_none() {
            warn!("Could not determine home directory, theme will not persist");
        }
        Self { path }
    }

    /// A store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the persisted theme. Returns `None` when nothing usable is
    /// stored; unknown values are logged and treated as missing.
    pub fn load(&self) -> Option<Theme> {
        let path = self.path.as_ref()?;
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No persisted theme at {}", path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to read theme from {}: {}", path.display(), e);
                return None;
            }
        };
        match contents.parse::<Theme>() {
            Ok(theme) => {
                info!("Restored theme '{}' from {}", theme, path.display());
                Some(theme)
            }
            Err(e) => {
                warn!("Ignoring persisted theme in {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Persists `theme`, creating the parent directory if needed.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ThemeStoreError::Io)?;
        }
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, theme.as_str()).map_err(ThemeStoreError::Io)?;
        fs::rename(&tmp_path, path).map_err(ThemeStoreError::Io)?;
        debug!("Saved theme '{}' to {}", theme, path.display());
        Ok(())
    }

    /// Flips `current`, persists the new theme and returns it. A failed
    /// write is logged; the toggle still takes effect for this run.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(e) = self.save(next) {
            warn!("Failed to persist theme: {}", e);
        }
        info!("Theme switched to {}", next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light\n".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("theme"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("nested").join("theme"));
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
        let raw = fs::read_to_string(store.path().unwrap()).unwrap();
        assert_eq!(raw, "dark");
    }

    #[test]
    fn test_unknown_value_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        fs::write(&path, "neon").unwrap();
        assert_eq!(ThemeStore::at(&path).load(), None);
    }

    #[test]
    fn test_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("theme"));
        let next = store.toggle(Theme::Light);
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));
        assert_eq!(store.toggle(next), Theme::Light);
        assert_eq!(store.load(), Some(Theme::Light));
    }

    #[test]
    fn test_toml_representation() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }
        let w: Wrapper = toml::from_str(r#"theme = "dark""#).unwrap();
        assert_eq!(w.theme, Theme::Dark);
    }
}
