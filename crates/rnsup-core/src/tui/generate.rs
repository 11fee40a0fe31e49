//! `generate screen|component|folder` flows

use super::prompts::{cancelled, confirm, details};
use crate::alias::{self, AliasChange};
use crate::history::add_history;
use crate::naming::{resolve_component_name, resolve_folder_path, resolve_screen_name, ParsedTarget};
use crate::project;
use crate::templates::{self, ComponentKind, ScreenKind};
use anyhow::Result;
use std::path::Path;

/// Arguments for `generate screen`
#[derive(Debug, Clone, Default)]
pub struct ScreenArgs {
    /// Screen name, optionally with a folder path
    pub name: String,

    /// Screen template; prompted for when missing
    pub kind: Option<ScreenKind>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Arguments for `generate component`
#[derive(Debug, Clone, Default)]
pub struct ComponentArgs {
    /// Component name, optionally with a folder path
    pub name: String,

    /// Component template; prompted for when missing
    pub kind: Option<ComponentKind>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Arguments for `generate folder`
#[derive(Debug, Clone, Default)]
pub struct FolderArgs {
    /// Folder path relative to the project root
    pub path: String,

    /// Whether to create an `index.ts`; prompted for when missing
    pub index: Option<bool>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

fn report_alias(change: Option<AliasChange>) -> Result<()> {
    if let Some(change) = change.filter(AliasChange::changed) {
        if change.tsconfig_updated {
            cliclack::log::info(format!("Alias added in tsconfig: {}", change.alias))?;
        }
        if change.babel_updated {
            cliclack::log::info(format!("Alias added in babel: {}", change.alias))?;
        }
    }
    Ok(())
}

/// Write the module, its alias and its barrel export
async fn write_module(root: &Path, target: &ParsedTarget, source: &str) -> Result<()> {
    project::ensure_dir(&target.target_dir).await?;
    report_alias(alias::register_alias(root, &target.relative_dir).await?)?;
    project::write_file(&target.file_path(), source).await?;
    project::append_index_export(&target.target_dir, &target.entity_name).await?;
    tracing::debug!(path = %target.file_path().display(), "module written");
    Ok(())
}

/// Ask before overwriting an existing module; `false` means stop
fn confirm_overwrite(target: &ParsedTarget, yes: bool) -> Result<bool> {
    if !target.file_path().exists() {
        return Ok(true);
    }
    confirm(
        format!("{} already exists. Overwrite?", target.entity_name),
        false,
        yes,
    )
}

fn select_screen_kind(specified: Option<ScreenKind>) -> Result<ScreenKind> {
    if let Some(kind) = specified {
        return Ok(kind);
    }
    let mut select = cliclack::select("Select screen type").initial_value(ScreenKind::Basic);
    for kind in ScreenKind::ALL {
        select = select.item(kind, kind.as_str(), kind.description());
    }
    Ok(select.interact()?)
}

fn select_component_kind(specified: Option<ComponentKind>) -> Result<ComponentKind> {
    if let Some(kind) = specified {
        return Ok(kind);
    }
    let mut select =
        cliclack::select("Select component type").initial_value(ComponentKind::Presentational);
    for kind in ComponentKind::ALL {
        select = select.item(kind, kind.as_str(), kind.description());
    }
    Ok(select.interact()?)
}

/// Generate a screen module under `root`
pub async fn run_generate_screen(root: &Path, args: ScreenArgs) -> Result<()> {
    cliclack::intro("Generate screen")?;

    let target = resolve_screen_name(root, &args.name);
    target.validate()?;

    let kind = if args.yes {
        args.kind.unwrap_or_default()
    } else {
        select_screen_kind(args.kind)?
    };

    cliclack::note(
        "Screen Creation Details",
        details(&[
            ("Name", target.entity_name.clone()),
            ("Type", kind.to_string()),
            ("Location", target.relative_dir.clone()),
            ("Files", format!("{}, index.ts", target.file_name())),
        ]),
    )?;

    if !target.target_dir.exists()
        && !confirm(
            format!("Directory {} does not exist. Create it?", target.relative_dir),
            true,
            args.yes,
        )?
    {
        return cancelled();
    }

    if !confirm_overwrite(&target, args.yes)? {
        return cancelled();
    }

    if !confirm(
        format!("Create {} ({})?", target.entity_name, kind),
        true,
        args.yes,
    )? {
        return cancelled();
    }

    write_module(
        root,
        &target,
        &templates::screen_template(&target.entity_name, kind),
    )
    .await?;
    add_history(
        root,
        format!("Generated screen {} ({})", target.entity_name, kind),
    )
    .await?;

    cliclack::outro(format!(
        "Screen {} created in {}",
        target.entity_name, target.relative_dir
    ))?;
    Ok(())
}

/// Generate a component module under `root`
pub async fn run_generate_component(root: &Path, args: ComponentArgs) -> Result<()> {
    cliclack::intro("Generate component")?;

    let target = resolve_component_name(root, &args.name);
    target.validate()?;

    let kind = if args.yes {
        args.kind.unwrap_or_default()
    } else {
        select_component_kind(args.kind)?
    };

    cliclack::note(
        "Component Details",
        details(&[
            ("Name", target.entity_name.clone()),
            ("Type", kind.to_string()),
            ("Directory", target.relative_dir.clone()),
        ]),
    )?;

    if !confirm_overwrite(&target, args.yes)? {
        return cancelled();
    }

    if !confirm(
        format!("Create {} in {}?", target.entity_name, target.relative_dir),
        true,
        args.yes,
    )? {
        return cancelled();
    }

    write_module(
        root,
        &target,
        &templates::component_template(&target.entity_name, kind),
    )
    .await?;
    add_history(root, format!("Generated component {}", target.entity_name)).await?;

    cliclack::outro(format!("{} created successfully.", target.entity_name))?;
    Ok(())
}

/// Create a folder under `root`, with an optional placeholder `index.ts`
pub async fn run_generate_folder(root: &Path, args: FolderArgs) -> Result<()> {
    cliclack::intro("Generate folder")?;

    let folder = resolve_folder_path(root, &args.path)?;

    cliclack::note(
        "Folder Creation Details",
        details(&[
            ("Folder Name", folder.folder_name.clone()),
            ("Location", folder.relative_dir.clone()),
            ("Full Path", folder.target_dir.display().to_string()),
        ]),
    )?;

    if folder.target_dir.exists() {
        cliclack::log::warning(format!("Folder {} already exists.", folder.relative_dir))?;
        if !confirm("Do you want to continue anyway?", false, args.yes)? {
            return cancelled();
        }
    }

    let create_index = match args.index {
        Some(index) => index,
        None => confirm("Create index.ts file?", true, args.yes)?,
    };

    if !confirm(
        format!("Create folder {}?", folder.folder_name),
        true,
        args.yes,
    )? {
        return cancelled();
    }

    project::ensure_dir(&folder.target_dir).await?;

    if folder.is_under_source_root() {
        report_alias(alias::register_alias(root, &folder.relative_dir).await?)?;
    }

    if create_index {
        project::create_placeholder_index(&folder.target_dir).await?;
    }

    add_history(root, format!("Created folder {}", folder.relative_dir)).await?;

    cliclack::outro(format!(
        "Folder {} created in {}",
        folder.folder_name, folder.relative_dir
    ))?;
    Ok(())
}
