//! Path resolution for twenty's persisted settings.
//!
//! All twenty data is stored in `~/.twenty/`:
//! - `settings.json` - Persisted timer durations and auto-start flag

use std::path::PathBuf;

use crate::error::TwentyError;

/// Paths to twenty's configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.twenty/`
    pub root: PathBuf,
    /// Settings file: `~/.twenty/settings.json`
    pub settings_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TwentyError> {
        let home = std::env::var("HOME")
            .map_err(|_| TwentyError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".twenty")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            settings_file: root.join("settings.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TwentyError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TwentyError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".twenty"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-twenty");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.settings_file, root.join("settings.json"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".twenty"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
