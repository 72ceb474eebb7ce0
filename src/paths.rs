//! Filesystem layout for persisted settings and the autocomplete cache
//!
//! Everything lives under a single base directory:
//! `settings/api.json`, `settings/script.json`, `autocomplete/currencies.json`.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Resolved paths under the configured base directory
#[derive(Debug, Clone)]
pub struct Paths {
    base: PathBuf,
}

impl Paths {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    pub fn settings_dir(&self) -> PathBuf {
        self.base.join("settings")
    }

    pub fn api_settings(&self) -> PathBuf {
        self.settings_dir().join("api.json")
    }

    pub fn script_settings(&self) -> PathBuf {
        self.settings_dir().join("script.json")
    }

    pub fn autocomplete_dir(&self) -> PathBuf {
        self.base.join("autocomplete")
    }

    pub fn currencies_cache(&self) -> PathBuf {
        self.autocomplete_dir().join("currencies.json")
    }

    /// Create the settings and autocomplete directories if missing
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(self.settings_dir())?;
        std::fs::create_dir_all(self.autocomplete_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_layout() {
        let paths = Paths::new("/tmp/disperser");
        assert_eq!(
            paths.api_settings(),
            PathBuf::from("/tmp/disperser/settings/api.json")
        );
        assert_eq!(
            paths.script_settings(),
            PathBuf::from("/tmp/disperser/settings/script.json")
        );
        assert_eq!(
            paths.currencies_cache(),
            PathBuf::from("/tmp/disperser/autocomplete/currencies.json")
        );
    }

    #[test]
    fn test_ensure_dirs() {
        let dir = tempdir().unwrap();
        let paths = Paths::new(dir.path());
        paths.ensure_dirs().unwrap();
        assert!(paths.settings_dir().is_dir());
        assert!(paths.autocomplete_dir().is_dir());
    }
}
