//! React Native project detection and file scaffolding

use crate::error::{Error, Result};
use crate::templates::{self, BABEL_CONFIG, SETUP_FILES};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Folders every configured project gets, relative to the project root
pub const BASE_FOLDERS: &[&str] = &[
    "src",
    "src/components",
    "src/features",
    "src/services",
    "src/hooks",
    "src/utils",
    "src/store",
    "src/theme",
    "src/assets",
];

const GESTURE_HANDLER_IMPORT: &str = "import 'react-native-gesture-handler';\n";

/// A React Native CLI project has `package.json`, `android/` and `ios/`
pub fn is_react_native_project(root: &Path) -> bool {
    root.join("package.json").is_file() && root.join("android").is_dir() && root.join("ios").is_dir()
}

/// Fail unless `root` looks like a React Native CLI project
pub fn ensure_react_native_project(root: &Path) -> Result<()> {
    if is_react_native_project(root) {
        Ok(())
    } else {
        Err(Error::NotReactNativeProject(root.to_path_buf()))
    }
}

/// Create a directory and all of its parents
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Create the standard `src/` layout
pub async fn create_base_folders(root: &Path) -> Result<()> {
    for folder in BASE_FOLDERS {
        ensure_dir(&root.join(folder)).await?;
    }
    Ok(())
}

/// Write `contents` to `path`, creating parent directories
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }
    fs::write(path, contents)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Write the static setup files (types, responsive helpers, API client, guide).
///
/// Returns the paths that were written.
pub async fn write_setup_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (relative, contents) in SETUP_FILES {
        let path = root.join(relative);
        write_file(&path, contents).await?;
        written.push(path);
    }
    Ok(written)
}

/// Replace `babel.config.js` with the alias-aware config, if the file exists
pub async fn write_babel_config(root: &Path) -> Result<bool> {
    let path = root.join("babel.config.js");
    if !path.exists() {
        return Ok(false);
    }
    write_file(&path, BABEL_CONFIG).await?;
    Ok(true)
}

/// Prepend the gesture-handler import to `index.js` once.
///
/// Returns `true` when the file was changed.
pub async fn patch_index_file(root: &Path) -> Result<bool> {
    let path = root.join("index.js");
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| Error::io(&path, e))?;

    if content.contains("react-native-gesture-handler") {
        return Ok(false);
    }

    write_file(&path, &format!("{}{}", GESTURE_HANDLER_IMPORT, content)).await?;
    Ok(true)
}

/// Add a barrel export for `name` to `dir/index.ts`, creating the file if needed.
///
/// Nothing is written when the index already mentions `name`.
pub async fn append_index_export(dir: &Path, name: &str) -> Result<bool> {
    let index = dir.join("index.ts");
    let line = templates::index_export_line(name);

    if index.exists() {
        let existing = fs::read_to_string(&index)
            .await
            .map_err(|e| Error::io(&index, e))?;
        if existing.contains(name) {
            return Ok(false);
        }

        let mut updated = existing;
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(&line);
        write_file(&index, &updated).await?;
    } else {
        write_file(&index, &line).await?;
    }

    Ok(true)
}

/// Create `dir/index.ts` with a placeholder comment unless it exists
pub async fn create_placeholder_index(dir: &Path) -> Result<bool> {
    let index = dir.join("index.ts");
    if index.exists() {
        return Ok(false);
    }
    write_file(&index, "// Add your exports here\n").await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_detects_react_native_project() {
        let dir = tempdir().unwrap();
        assert!(!is_react_native_project(dir.path()));

        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::create_dir(dir.path().join("android")).unwrap();
        assert!(!is_react_native_project(dir.path()));
        assert!(matches!(
            ensure_react_native_project(dir.path()),
            Err(Error::NotReactNativeProject(_))
        ));

        std::fs::create_dir(dir.path().join("ios")).unwrap();
        assert!(is_react_native_project(dir.path()));
    }

    #[tokio::test]
    async fn test_create_base_folders() {
        let dir = tempdir().unwrap();
        create_base_folders(dir.path()).await.unwrap();
        for folder in BASE_FOLDERS {
            assert!(dir.path().join(folder).is_dir(), "{folder}");
        }
    }

    #[tokio::test]
    async fn test_append_index_export_is_idempotent() {
        let dir = tempdir().unwrap();

        assert!(append_index_export(dir.path(), "HomeScreen").await.unwrap());
        assert!(append_index_export(dir.path(), "ProfileScreen").await.unwrap());
        assert!(!append_index_export(dir.path(), "HomeScreen").await.unwrap());

        let index = std::fs::read_to_string(dir.path().join("index.ts")).unwrap();
        assert_eq!(
            index,
            "export { default as HomeScreen } from './HomeScreen';\n\
             export { default as ProfileScreen } from './ProfileScreen';\n"
        );
    }

    #[tokio::test]
    async fn test_patch_index_file_once() {
        let dir = tempdir().unwrap();
        assert!(!patch_index_file(dir.path()).await.unwrap());

        std::fs::write(dir.path().join("index.js"), "import App from './App';\n").unwrap();
        assert!(patch_index_file(dir.path()).await.unwrap());
        assert!(!patch_index_file(dir.path()).await.unwrap());

        let content = std::fs::read_to_string(dir.path().join("index.js")).unwrap();
        assert!(content.starts_with("import 'react-native-gesture-handler';\nimport App"));
    }

    #[tokio::test]
    async fn test_setup_files_and_babel() {
        let dir = tempdir().unwrap();
        let written = write_setup_files(dir.path()).await.unwrap();
        assert_eq!(written.len(), SETUP_FILES.len());
        assert!(dir.path().join("src/services/api/client.ts").is_file());

        assert!(!write_babel_config(dir.path()).await.unwrap());
        std::fs::write(dir.path().join("babel.config.js"), "module.exports = {};").unwrap();
        assert!(write_babel_config(dir.path()).await.unwrap());
        let babel = std::fs::read_to_string(dir.path().join("babel.config.js")).unwrap();
        assert!(babel.contains("module-resolver"));
    }

    #[tokio::test]
    async fn test_placeholder_index_not_overwritten() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.ts"), "export {};\n").unwrap();
        assert!(!create_placeholder_index(dir.path()).await.unwrap());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.ts")).unwrap(),
            "export {};\n"
        );
    }
}
