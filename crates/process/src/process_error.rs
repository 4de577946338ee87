use depman_common::{Style, Stylize};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ProcessError {
    #[diagnostic(code(process::capture::failed))]
    #[error("Failed to execute {} and capture output.", .bin.style(Style::Shell))]
    Capture {
        bin: String,
        #[source]
        error: Box<std::io::Error>,
    },

    #[diagnostic(code(process::failed))]
    #[error(
        "Process {} failed with a {} exit code.",
        .bin.style(Style::Shell),
        .code.style(Style::Symbol),
    )]
    ExitNonZero { bin: String, code: i32 },

    #[diagnostic(code(process::failed))]
    #[error(
        "Process {} failed with a {} exit code.\n\n{}",
        .bin.style(Style::Shell),
        .code.style(Style::Symbol),
        .output.style(Style::MutedLight),
    )]
    ExitNonZeroWithOutput {
        bin: String,
        code: i32,
        output: String,
    },

    #[diagnostic(code(process::stream::failed))]
    #[error("Failed to execute {} and stream output.", .bin.style(Style::Shell))]
    Stream {
        bin: String,
        #[source]
        error: Box<std::io::Error>,
    },
}

impl ProcessError {
    /// Exit code of the failed process, if it ran to completion.
    pub fn get_exit_code(&self) -> Option<i32> {
        match self {
            Self::ExitNonZero { code, .. } | Self::ExitNonZeroWithOutput { code, .. } => {
                Some(*code)
            }
            _ => None,
        }
    }
}
