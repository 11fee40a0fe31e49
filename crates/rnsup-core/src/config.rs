//! Project-local settings stored under `.rnsup/`

use crate::error::{Error, Result};
use crate::package_manager::{Navigation, PackageManager};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directory holding rnsup state inside a project
pub const STATE_DIR: &str = ".rnsup";

const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the default `view` depth
pub const TREE_DEPTH_ENV: &str = "RNSUP_TREE_DEPTH";

/// Choices made during `setup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub package_manager: PackageManager,
    pub navigation: Vec<Navigation>,
    pub svg: bool,
    pub lucide: bool,
}

/// Path of the config file for a project
pub fn config_path(root: &Path) -> PathBuf {
    root.join(STATE_DIR).join(CONFIG_FILE)
}

impl ProjectConfig {
    /// Persist to `.rnsup/config.json`
    pub async fn save(&self, root: &Path) -> Result<()> {
        let dir = root.join(STATE_DIR);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::io(&dir, e))?;

        let path = config_path(root);
        let content = serde_json::to_string_pretty(self).map_err(|e| Error::json(&path, e))?;
        fs::write(&path, content)
            .await
            .map_err(|e| Error::io(&path, e))
    }

    /// Load `.rnsup/config.json`, or `None` if setup never ran
    pub async fn load(root: &Path) -> Result<Option<Self>> {
        let path = config_path(root);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;
        let config = serde_json::from_str(&content).map_err(|e| Error::json(&path, e))?;
        Ok(Some(config))
    }
}

/// Package manager chosen by a previous setup, or the default
pub async fn saved_package_manager(root: &Path) -> PackageManager {
    match ProjectConfig::load(root).await {
        Ok(Some(config)) => config.package_manager,
        Ok(None) => PackageManager::default(),
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring unreadable project config");
            PackageManager::default()
        }
    }
}

/// Tree depth for `view`: explicit flag, then `RNSUP_TREE_DEPTH`, then the default
pub fn tree_depth(flag: Option<usize>, default: usize) -> usize {
    flag.or_else(|| {
        std::env::var(TREE_DEPTH_ENV)
            .ok()
            .and_then(|value| value.trim().parse().ok())
    })
    .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        assert_eq!(ProjectConfig::load(dir.path()).await.unwrap(), None);

        let config = ProjectConfig {
            package_manager: PackageManager::Yarn,
            navigation: vec![Navigation::Stack, Navigation::Tabs],
            svg: true,
            lucide: false,
        };
        config.save(dir.path()).await.unwrap();

        let raw = std::fs::read_to_string(config_path(dir.path())).unwrap();
        assert!(raw.contains("\"packageManager\": \"yarn\""));
        assert!(raw.contains("\"tabs\""));

        assert_eq!(ProjectConfig::load(dir.path()).await.unwrap(), Some(config));
    }

    #[tokio::test]
    async fn test_corrupt_config_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(STATE_DIR)).unwrap();
        std::fs::write(config_path(dir.path()), "not json").unwrap();
        assert!(matches!(
            ProjectConfig::load(dir.path()).await,
            Err(Error::Json { .. })
        ));
    }

    #[tokio::test]
    async fn test_saved_package_manager() {
        let dir = tempdir().unwrap();
        assert_eq!(saved_package_manager(dir.path()).await, PackageManager::Yarn);

        ProjectConfig {
            package_manager: PackageManager::Pnpm,
            navigation: vec![Navigation::Stack],
            svg: false,
            lucide: false,
        }
        .save(dir.path())
        .await
        .unwrap();
        assert_eq!(saved_package_manager(dir.path()).await, PackageManager::Pnpm);

        std::fs::write(config_path(dir.path()), "not json").unwrap();
        assert_eq!(saved_package_manager(dir.path()).await, PackageManager::Yarn);
    }

    #[test]
    fn test_tree_depth_prefers_flag() {
        assert_eq!(tree_depth(Some(3), 10), 3);
    }
}
