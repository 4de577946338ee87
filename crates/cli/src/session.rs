use crate::app::Cli;
use depman_common::color;
use depman_lang_node::workspace::normalize_path;
use depman_package_manager::{PackageManager, PackageManagerOptions, StaticOfflineProbe};
use miette::IntoDiagnostic;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct CliSession {
    pub cli: Cli,
}

impl CliSession {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn get_working_dir(&self) -> miette::Result<PathBuf> {
        match &self.cli.cwd {
            Some(cwd) => normalize_path(cwd),
            None => env::current_dir().into_diagnostic(),
        }
    }

    pub fn get_package_manager_options(&self) -> PackageManagerOptions {
        PackageManagerOptions::default()
            .with_log(!self.cli.quiet)
            .with_silent(self.cli.silent)
    }

    pub fn get_package_manager(&self) -> miette::Result<PackageManager> {
        let working_dir = self.get_working_dir()?;

        debug!(working_dir = ?working_dir, "Loading package manager");

        let mut package_manager = PackageManager::for_project(
            &working_dir,
            self.get_package_manager_options(),
            self.cli.manager,
        )?;

        if self.cli.offline {
            debug!(
                "Forcing offline mode with {}",
                color::shell("--offline")
            );

            package_manager =
                package_manager.with_offline_probe(Arc::new(StaticOfflineProbe(true)));
        }

        Ok(package_manager)
    }
}
