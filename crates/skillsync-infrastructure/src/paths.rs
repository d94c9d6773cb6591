//! Unified path management for SkillSync data files.
//!
//! All configuration and store directories are resolved here so every
//! repository agrees on where data lives.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for SkillSync.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/skillsync/         # Config directory
/// └── config.toml              # Match settings
///
/// ~/.local/share/skillsync/    # Data directory
/// └── store/                   # JSON repositories
///     ├── users/
///     ├── user_skills/
///     ├── skills/
///     ├── mentorships/
///     └── opportunities/
/// ```
pub struct SkillSyncPaths;

impl SkillSyncPaths {
    /// Returns the SkillSync configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("skillsync"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path of the configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the SkillSync data directory.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("skillsync"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the base directory of the JSON store.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_config_dir() {
        let dir = SkillSyncPaths::config_dir().unwrap();
        let file = SkillSyncPaths::config_file().unwrap();
        assert!(file.starts_with(&dir));
        assert_eq!(file.file_name().unwrap(), "config.toml");
    }
}
