//! Package manager detection and dependency installation

use crate::error::{Error, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Dependencies installed by every setup
pub const BASE_DEPENDENCIES: &[&str] = &[
    "@react-navigation/native",
    "react-native-screens",
    "react-native-advanced-checkbox",
    "react-native-gesture-handler",
    "react-native-reanimated",
    "react-native-worklets",
    "react-native-vector-icons",
    "zustand",
    "axios",
    "@tanstack/react-query",
    "react-native-mmkv",
];

/// Dev dependencies installed by every setup
pub const DEV_DEPENDENCIES: &[&str] = &["babel-plugin-module-resolver"];

/// Supported package managers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    #[default]
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
    ];

    /// Binary name
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// How to install this package manager globally
    pub fn install_hint(&self) -> &'static str {
        match self {
            PackageManager::Npm => "https://nodejs.org",
            PackageManager::Yarn => "npm install -g yarn",
            PackageManager::Pnpm => "npm install -g pnpm",
        }
    }

    /// Check if the package manager is available; npm ships with Node.js
    pub fn is_installed(&self) -> bool {
        match self {
            PackageManager::Npm => true,
            _ => std::process::Command::new(self.name())
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|status| status.success())
                .unwrap_or(false),
        }
    }

    /// Fail with an install hint unless the package manager is available
    pub fn ensure_installed(&self) -> Result<()> {
        if self.is_installed() {
            Ok(())
        } else {
            Err(Error::PackageManagerMissing {
                manager: self.name(),
                hint: self.install_hint(),
            })
        }
    }

    /// Arguments for adding `packages`
    pub fn install_args(&self, packages: &[String], dev: bool) -> Vec<String> {
        let mut args = vec![match self {
            PackageManager::Npm => "install".to_string(),
            PackageManager::Yarn | PackageManager::Pnpm => "add".to_string(),
        }];
        args.extend(packages.iter().cloned());
        if dev {
            args.push(match self {
                PackageManager::Npm => "--save-dev".to_string(),
                PackageManager::Yarn | PackageManager::Pnpm => "-D".to_string(),
            });
        }
        args
    }

    /// Lockfile left behind by the other managers that conflicts with this one
    fn conflicting_lockfile(&self) -> Option<&'static str> {
        match self {
            PackageManager::Yarn => Some("package-lock.json"),
            PackageManager::Npm => Some("yarn.lock"),
            PackageManager::Pnpm => None,
        }
    }

    /// Remove the lockfile of a competing package manager.
    ///
    /// Returns the removed path, if any.
    pub async fn fix_lock_file(&self, root: &Path) -> Result<Option<PathBuf>> {
        let Some(name) = self.conflicting_lockfile() else {
            return Ok(None);
        };

        let path = root.join(name);
        if !path.exists() {
            return Ok(None);
        }

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;
        Ok(Some(path))
    }

    /// Install `packages` in `root`, streaming the package manager output.
    ///
    /// An empty package list is a no-op.
    pub async fn install(&self, root: &Path, packages: &[String], dev: bool) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let args = self.install_args(packages, dev);
        let command = format!("{} {}", self.name(), args.join(" "));
        println!();
        println!("{} {}", "Running:".dimmed(), command.yellow());
        println!();

        let status = TokioCommand::new(self.name())
            .args(&args)
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Error::io(root, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::InstallFailed {
                command,
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Navigation flavours offered during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    Stack,
    Tabs,
    Drawer,
}

impl Navigation {
    pub const ALL: [Navigation; 3] = [Navigation::Stack, Navigation::Tabs, Navigation::Drawer];

    pub fn display_name(&self) -> &'static str {
        match self {
            Navigation::Stack => "Stack",
            Navigation::Tabs => "Bottom Tabs",
            Navigation::Drawer => "Drawer",
        }
    }

    /// Extra package needed for this navigator
    pub fn package(&self) -> &'static str {
        match self {
            Navigation::Stack => "@react-navigation/native-stack",
            Navigation::Tabs => "@react-navigation/bottom-tabs",
            Navigation::Drawer => "@react-navigation/drawer",
        }
    }
}

/// Optional libraries picked during setup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalLibraries {
    pub svg: bool,
    pub lucide: bool,
}

/// Full dependency list for a setup selection
pub fn collect_dependencies(navigation: &[Navigation], extras: OptionalLibraries) -> Vec<String> {
    let mut deps: Vec<String> = BASE_DEPENDENCIES.iter().map(|d| d.to_string()).collect();

    for nav in Navigation::ALL {
        if navigation.contains(&nav) {
            deps.push(nav.package().to_string());
        }
    }

    if extras.svg {
        deps.push("react-native-svg".to_string());
    }
    if extras.lucide {
        deps.push("lucide-react-native".to_string());
    }

    deps
}
