use crate::app_options::LogLevel;
use crate::commands::add::AddArgs;
use crate::commands::install::InstallArgs;
use crate::commands::remove::RemoveArgs;
use crate::commands::run::RunArgs;
use clap::builder::styling::{Color, Style, Styles};
use clap::{Parser, Subcommand};
use depman_common::color::Color as ColorType;
use depman_common::consts::{BIN_NAME, LOG_ENV_VAR};
use depman_package_manager::PackageManagerType;
use std::path::PathBuf;

/// Result of a command, with an optional exit code to exit with.
pub type AppResult = miette::Result<Option<u8>>;

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    // depman install
    #[command(
        name = "install",
        alias = "i",
        about = "Install all dependencies of the project."
    )]
    Install(InstallArgs),

    // depman add <...names>
    #[command(
        name = "add",
        about = "Add dependencies to the project, or install all when none are provided."
    )]
    Add(AddArgs),

    // depman remove <...names>
    #[command(
        name = "remove",
        alias = "rm",
        about = "Remove dependencies from the project."
    )]
    Remove(RemoveArgs),

    // depman run <script>
    #[command(name = "run", about = "Run a script defined in package.json.")]
    Run(RunArgs),

    // depman workspace-root
    #[command(
        name = "workspace-root",
        about = "Print the root of the workspace the project belongs to.",
        long_about = "Print the root of the workspace the project belongs to. If the project is not within a workspace, this will return a non-zero exit code with no value."
    )]
    WorkspaceRoot,

    // depman which
    #[command(
        name = "which",
        about = "Print the package manager that will be used for the project."
    )]
    Which,

    // depman version
    #[command(
        name = "version",
        about = "Print the version of the package manager binary."
    )]
    Version,
}

fn fg(ty: ColorType) -> Style {
    Style::new().fg_color(Some(Color::from(ty as u8)))
}

fn create_styles() -> Styles {
    Styles::default()
        .error(fg(ColorType::Red))
        .header(Style::new().bold())
        .invalid(fg(ColorType::Yellow))
        .literal(fg(ColorType::Purple)) // args, options, etc
        .placeholder(fg(ColorType::GrayLight))
        .usage(fg(ColorType::Pink).bold())
        .valid(fg(ColorType::Green))
}

#[derive(Clone, Debug, Parser)]
#[command(
    bin_name = BIN_NAME,
    name = "depman",
    about = "One interface for npm, pnpm, and Yarn.",
    version,
    disable_help_subcommand = true,
    next_line_help = false,
    propagate_version = true,
    styles = create_styles()
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "DEPMAN_CWD",
        help = "Directory of the project to run in"
    )]
    pub cwd: Option<PathBuf>,

    #[arg(
        value_enum,
        long,
        global = true,
        env = LOG_ENV_VAR,
        help = "Lowest log level to output",
        default_value_t
    )]
    pub log: LogLevel,

    #[arg(
        long,
        short = 'm',
        global = true,
        env = "DEPMAN_MANAGER",
        help = "Package manager to use, instead of detecting it"
    )]
    pub manager: Option<PackageManagerType>,

    #[arg(
        long,
        global = true,
        help = "Run Yarn in offline mode without probing the network"
    )]
    pub offline: bool,

    #[arg(
        long,
        short = 'q',
        global = true,
        env = "DEPMAN_QUIET",
        help = "Don't print package manager command lines before running them"
    )]
    pub quiet: bool,

    #[arg(
        long,
        short = 's',
        global = true,
        help = "Capture package manager output instead of streaming it"
    )]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}
