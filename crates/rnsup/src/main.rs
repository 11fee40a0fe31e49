//! rnsup - React Native project setup, generators and tree views

use anyhow::Result;
use clap::{Parser, Subcommand};
use rnsup_core::package_manager::{Navigation, PackageManager};
use rnsup_core::templates::{ComponentKind, ScreenKind};
use rnsup_core::tui::{ComponentArgs, FolderArgs, ScreenArgs, SetupArgs, ViewArgs};
use rnsup_core::ViewTarget;

#[derive(Parser, Debug)]
#[command(name = "rnsup")]
#[command(about = "React Native support CLI: project setup, generators and tree views")]
#[command(version)]
pub struct Args {
    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure a React Native CLI project
    Setup(CliSetupArgs),
    /// Generate a screen, component or folder
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        target: GenerateCommand,
    },
    /// Print the project tree
    View(CliViewArgs),
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommand {
    /// Generate a screen in src/screens (or a nested feature folder)
    #[command(visible_alias = "s")]
    Screen {
        /// Screen name, e.g. `profile` or `auth/login`
        name: String,

        /// Screen template
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<ScreenKind>,
    },
    /// Generate a component in src/components
    #[command(visible_alias = "c")]
    Component {
        /// Component name, e.g. `button` or `forms/input`
        name: String,

        /// Component template
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<ComponentKind>,
    },
    /// Generate a folder relative to the project root
    #[command(visible_alias = "f")]
    Folder {
        /// Folder path, e.g. `src/payments`
        path: String,

        /// Skip creating index.ts
        #[arg(long = "no-index")]
        no_index: bool,
    },
}

#[derive(Parser, Debug)]
pub struct CliSetupArgs {
    /// Package manager to install with
    #[arg(long = "pm", value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Navigation types (comma-separated: stack,tabs,drawer)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub navigation: Option<Vec<Navigation>>,

    /// Install react-native-svg
    #[arg(long)]
    pub svg: Option<bool>,

    /// Install lucide-react-native
    #[arg(long)]
    pub lucide: Option<bool>,
}

#[derive(Parser, Debug)]
pub struct CliViewArgs {
    /// Icons, colors and file sizes
    #[arg(short, long)]
    pub pretty: bool,

    /// Show modification times
    #[arg(long)]
    pub time: bool,

    /// Part of the project to show
    #[arg(long, value_enum)]
    pub target: Option<ViewTarget>,

    /// Maximum depth (overrides RNSUP_TREE_DEPTH)
    #[arg(short, long)]
    pub depth: Option<usize>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

async fn dispatch(args: Args) -> Result<()> {
    let root = std::env::current_dir()?;
    let yes = args.yes;

    match args.command {
        Command::Setup(setup) => {
            rnsup_core::tui::run_setup(
                &root,
                SetupArgs {
                    package_manager: setup.package_manager,
                    navigation: setup.navigation,
                    svg: setup.svg,
                    lucide: setup.lucide,
                    yes,
                },
            )
            .await
        }
        Command::Generate { target } => match target {
            GenerateCommand::Screen { name, kind } => {
                rnsup_core::tui::run_generate_screen(&root, ScreenArgs { name, kind, yes }).await
            }
            GenerateCommand::Component { name, kind } => {
                rnsup_core::tui::run_generate_component(&root, ComponentArgs { name, kind, yes })
                    .await
            }
            GenerateCommand::Folder { path, no_index } => {
                let index = if no_index { Some(false) } else { None };
                rnsup_core::tui::run_generate_folder(&root, FolderArgs { path, index, yes }).await
            }
        },
        Command::View(view) => {
            rnsup_core::tui::run_view(
                &root,
                ViewArgs {
                    target: view.target,
                    pretty: view.pretty,
                    time: view.time,
                    depth: view.depth,
                    yes,
                },
            )
            .await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let result = dispatch(Args::parse()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
