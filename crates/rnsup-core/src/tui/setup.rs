//! `setup` flow: dependencies, folders, aliases and scaffold files

use super::prompts::{cancelled, confirm};
use crate::alias;
use crate::config::{self, ProjectConfig};
use crate::history::add_history;
use crate::package_manager::{collect_dependencies, Navigation, OptionalLibraries, PackageManager, DEV_DEPENDENCIES};
use crate::project;
use anyhow::Result;
use std::path::Path;

/// Arguments for `setup`
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Package manager; prompted for when missing
    pub package_manager: Option<PackageManager>,

    /// Navigation flavours; prompted for when missing
    pub navigation: Option<Vec<Navigation>>,

    /// Install react-native-svg; prompted for when missing
    pub svg: Option<bool>,

    /// Install lucide-react-native; prompted for when missing
    pub lucide: Option<bool>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

const NEXT_STEPS: &[&str] = &[
    "cd ios && pod install (only macOS)",
    "npx react-native start --reset-cache",
    "npx react-native run-android",
];

fn select_package_manager(
    specified: Option<PackageManager>,
    saved: PackageManager,
    yes: bool,
) -> Result<PackageManager> {
    if let Some(pm) = specified {
        cliclack::log::info(format!("Using package manager: {}", pm))?;
        return Ok(pm);
    }
    if yes {
        return Ok(saved);
    }

    let mut select = cliclack::select("Select package manager").initial_value(saved);
    for pm in PackageManager::ALL {
        select = select.item(pm, pm.name(), "");
    }
    Ok(select.interact()?)
}

fn select_navigation(specified: Option<Vec<Navigation>>, yes: bool) -> Result<Vec<Navigation>> {
    match specified {
        Some(navigation) if !navigation.is_empty() => return Ok(navigation),
        _ if yes => return Ok(vec![Navigation::Stack]),
        _ => {}
    }

    let mut multi = cliclack::multiselect("Select navigation types")
        .initial_values(vec![Navigation::Stack]);
    for nav in Navigation::ALL {
        multi = multi.item(nav, nav.display_name(), nav.package());
    }
    Ok(multi.required(true).interact()?)
}

fn select_library(specified: Option<bool>, prompt: &str, yes: bool) -> Result<bool> {
    match specified {
        Some(choice) => Ok(choice),
        None => confirm(prompt, true, yes),
    }
}

fn print_next_steps() -> Result<()> {
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Project setup completed.")?;
    Ok(())
}

/// Configure the React Native project at `root`
pub async fn run_setup(root: &Path, args: SetupArgs) -> Result<()> {
    cliclack::intro("rnsup setup")?;

    project::ensure_react_native_project(root)?;
    cliclack::log::success("React Native CLI project detected")?;

    let saved = config::saved_package_manager(root).await;
    let pm = select_package_manager(args.package_manager, saved, args.yes)?;
    pm.ensure_installed()?;

    if let Some(removed) = pm.fix_lock_file(root).await? {
        cliclack::log::warning(format!(
            "Removed conflicting lockfile {}",
            removed.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
        ))?;
    }

    let navigation = select_navigation(args.navigation, args.yes)?;
    let extras = OptionalLibraries {
        svg: select_library(args.svg, "Install react-native-svg?", args.yes)?,
        lucide: select_library(args.lucide, "Install lucide-react-native icons?", args.yes)?,
    };

    let dependencies = collect_dependencies(&navigation, extras);
    let dev_dependencies: Vec<String> = DEV_DEPENDENCIES.iter().map(|d| d.to_string()).collect();

    cliclack::note(
        "Packages",
        format!(
            "{}\n\ndev: {}",
            dependencies.join("\n"),
            dev_dependencies.join(", ")
        ),
    )?;

    if !confirm(format!("Install with {}?", pm), true, args.yes)? {
        return cancelled();
    }

    let spinner = cliclack::spinner();
    spinner.start("Creating base folders...");
    project::create_base_folders(root).await?;
    spinner.stop(format!(
        "Created {} base folders",
        project::BASE_FOLDERS.len()
    ));

    pm.install(root, &dependencies, false).await?;
    pm.install(root, &dev_dependencies, true).await?;
    cliclack::log::success("Dependencies installed")?;

    if alias::setup_ts_alias(root).await? {
        cliclack::log::success("tsconfig.json aliases configured")?;
    }
    if project::write_babel_config(root).await? {
        cliclack::log::success("babel.config.js updated")?;
    }
    if project::patch_index_file(root).await? {
        cliclack::log::success("Gesture handler import added to index.js")?;
    }

    let written = project::write_setup_files(root).await?;
    tracing::debug!(count = written.len(), "setup files written");
    cliclack::log::success(format!("Wrote {} scaffold files", written.len()))?;

    ProjectConfig {
        package_manager: pm,
        navigation,
        svg: extras.svg,
        lucide: extras.lucide,
    }
    .save(root)
    .await?;
    add_history(root, "Project setup completed").await?;

    print_next_steps()
}
