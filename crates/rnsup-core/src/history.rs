//! Append-only action log in `.rnsup/history.json`

use crate::config::STATE_DIR;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

const HISTORY_FILE: &str = "history.json";

/// One recorded action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: String,
    pub date: DateTime<Utc>,
}

pub fn history_path(root: &Path) -> PathBuf {
    root.join(STATE_DIR).join(HISTORY_FILE)
}

/// Read the history; a missing or unreadable file yields an empty list
pub async fn read_history(root: &Path) -> Vec<HistoryEntry> {
    let path = history_path(root);
    match fs::read_to_string(&path).await {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "Resetting unreadable history");
            Vec::new()
        }),
        Err(_) => Vec::new(),
    }
}

/// Append `action` with the current time
pub async fn add_history(root: &Path, action: impl Into<String>) -> Result<()> {
    let dir = root.join(STATE_DIR);
    fs::create_dir_all(&dir)
        .await
        .map_err(|e| Error::io(&dir, e))?;

    let mut entries = read_history(root).await;
    entries.push(HistoryEntry {
        action: action.into(),
        date: Utc::now(),
    });

    let path = history_path(root);
    let content = serde_json::to_string_pretty(&entries).map_err(|e| Error::json(&path, e))?;
    fs::write(&path, content)
        .await
        .map_err(|e| Error::io(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_history_appends() {
        let dir = tempdir().unwrap();
        add_history(dir.path(), "Generated screen HomeScreen (basic)")
            .await
            .unwrap();
        add_history(dir.path(), "Created folder src/payments").await.unwrap();

        let entries = read_history(dir.path()).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, "Generated screen HomeScreen (basic)");
        assert!(entries[0].date <= entries[1].date);
    }

    #[tokio::test]
    async fn test_corrupt_history_is_reset() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(STATE_DIR)).unwrap();
        std::fs::write(history_path(dir.path()), "{broken").unwrap();

        add_history(dir.path(), "Project setup completed").await.unwrap();

        let entries = read_history(dir.path()).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "Project setup completed");
    }
}
