//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod generate;
#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
mod setup;
#[cfg(feature = "tui")]
mod view;

#[cfg(feature = "tui")]
pub use generate::{
    run_generate_component, run_generate_folder, run_generate_screen, ComponentArgs, FolderArgs,
    ScreenArgs,
};
#[cfg(feature = "tui")]
pub use setup::{run_setup, SetupArgs};
#[cfg(feature = "tui")]
pub use view::{run_view, ViewArgs};
