use depman_common::{Style, Stylize};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PackageManagerError {
    #[diagnostic(
        code(package_manager::missing_cwd),
        help = "Set a working directory with the cwd option."
    )]
    #[error(
        "Unable to {} with {}, no working directory has been configured.",
        .context.style(Style::Symbol),
        .bin.style(Style::Shell),
    )]
    MissingCwd { bin: String, context: String },

    #[diagnostic(code(package_manager::unknown_type))]
    #[error(
        "Unknown package manager {}. Expected one of npm, pnpm, or yarn.",
        .0.style(Style::Id),
    )]
    UnknownType(String),
}
