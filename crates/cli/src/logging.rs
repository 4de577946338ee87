use crate::app_options::LogLevel;
use depman_common::is_test_env;
use miette::IntoDiagnostic;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const FILTER_MODULES: [&str; 5] = [
    "depman_cli",
    "depman_common",
    "depman_lang_node",
    "depman_package_manager",
    "depman_process",
];

/// Only log from our own crates, at the requested level.
pub fn create_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(
        FILTER_MODULES
            .iter()
            .map(|module| format!("{module}={level}"))
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Write logs to stderr, so that stdout only contains command output.
pub fn setup_tracing(level: LogLevel) -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(create_filter(level))
        .with(
            fmt::layer()
                .with_ansi(!is_test_env())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .into_diagnostic()
}
