//! Path Utilities
//!
//! Functions for resolving application directories across platforms.

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Code Intel directory (~/.code-intel/)
pub fn code_intel_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".code-intel"))
}

/// Get the config file path (~/.code-intel/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(code_intel_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_under_code_intel_dir() {
        let dir = code_intel_dir().unwrap();
        let config = config_path().unwrap();
        assert!(dir.ends_with(".code-intel"));
        assert_eq!(config.parent(), Some(dir.as_path()));
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent
        ensure_dir(&nested).unwrap();
    }
}
