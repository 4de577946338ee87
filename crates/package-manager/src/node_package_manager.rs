use crate::package_manager_error::PackageManagerError;
use crate::package_manager_options::PackageManagerOptions;
use crate::pending_command::PendingCommand;
use async_trait::async_trait;
use depman_common::color;
use depman_lang_node::NODE_MODULES_DIR;
use depman_process::{Command, Output, output_to_trimmed_string};
use starbase_utils::fs;
use std::fmt::Debug;
use std::path::Path;
use tracing::debug;

/// Environment variables that silence install-time banners.
pub const DEFAULT_ENV_VARS: [(&str, &str); 2] = [("ADBLOCK", "1"), ("DISABLE_OPENCOLLECTIVE", "1")];

#[async_trait]
pub trait NodePackageManager: Debug + Send + Sync {
    /// Return the display name of the package manager.
    fn get_name(&self) -> &'static str;

    /// Return the name of the executable to spawn.
    fn get_bin(&self) -> &'static str;

    /// Return the name of the lockfile that identifies this package manager.
    fn get_lock_filename(&self) -> &'static str;

    /// Return the options this instance was created with.
    fn get_options(&self) -> &PackageManagerOptions;

    /// Return the configured working directory, or fail if there is none.
    fn ensure_cwd_defined(&self, context: &str) -> Result<&Path, PackageManagerError> {
        self.get_options()
            .cwd
            .as_deref()
            .ok_or_else(|| PackageManagerError::MissingCwd {
                bin: self.get_bin().to_owned(),
                context: context.to_owned(),
            })
    }

    /// Create a command that runs the binary with the provided arguments,
    /// inheriting the working directory, environment, and output options.
    fn create_command(&self, args: Vec<String>) -> PendingCommand {
        let options = self.get_options();
        let mut command = Command::new(self.get_bin());

        command.args(args);
        command.envs(DEFAULT_ENV_VARS);
        command.envs(&options.env);
        command.set_print_command(options.log && !options.silent);

        if let Some(cwd) = &options.cwd {
            command.cwd(cwd);
        }

        PendingCommand::new(command, options.silent)
    }

    /// Run the binary with the provided arguments.
    async fn execute(&self, args: Vec<String>) -> miette::Result<Output> {
        self.create_command(args).exec().await
    }

    /// Return a new instance rooted at the workspace root that contains
    /// the current working directory, or `None` if there is no workspace.
    fn workspace_root(&self) -> miette::Result<Option<Self>>
    where
        Self: Sized;

    async fn run_command(&self, script: &str, args: &[String]) -> PendingCommand;

    async fn install_command(&self, flags: &[String]) -> PendingCommand;

    async fn add_command(&self, names: &[String]) -> PendingCommand;

    async fn add_dev_command(&self, names: &[String]) -> PendingCommand;

    async fn add_global_command(&self, names: &[String]) -> PendingCommand;

    async fn remove_command(&self, names: &[String]) -> PendingCommand;

    async fn remove_dev_command(&self, names: &[String]) -> PendingCommand;

    async fn remove_global_command(&self, names: &[String]) -> PendingCommand;

    /// Run a script defined in `package.json`.
    async fn run(&self, script: &str, args: &[String]) -> miette::Result<Output> {
        self.run_command(script, args).await.exec().await
    }

    /// Install all dependencies.
    async fn install(&self, flags: &[String]) -> miette::Result<Output> {
        self.install_command(flags).await.exec().await
    }

    /// Add production dependencies, or install when none are provided.
    async fn add(&self, names: &[String]) -> miette::Result<Output> {
        self.add_command(names).await.exec().await
    }

    /// Add development dependencies, or install when none are provided.
    async fn add_dev(&self, names: &[String]) -> miette::Result<Output> {
        self.add_dev_command(names).await.exec().await
    }

    /// Add global packages, or install when none are provided.
    async fn add_global(&self, names: &[String]) -> miette::Result<Output> {
        self.add_global_command(names).await.exec().await
    }

    async fn remove(&self, names: &[String]) -> miette::Result<Output> {
        self.remove_command(names).await.exec().await
    }

    async fn remove_dev(&self, names: &[String]) -> miette::Result<Output> {
        self.remove_dev_command(names).await.exec().await
    }

    async fn remove_global(&self, names: &[String]) -> miette::Result<Output> {
        self.remove_global_command(names).await.exec().await
    }

    /// Return the version reported by the binary.
    async fn version(&self) -> miette::Result<String> {
        let mut command = self.create_command(vec!["--version".into()]);
        command.set_silent(true);

        let output = command.exec().await?;

        Ok(output_to_trimmed_string(&output.stdout))
    }

    /// Return a value from the package manager's config, if it has been set.
    async fn get_config(&self, key: &str) -> miette::Result<Option<String>> {
        let mut command =
            self.create_command(vec!["config".into(), "get".into(), key.to_owned()]);
        command.set_silent(true);

        let output = command.exec().await?;
        let value = output_to_trimmed_string(&output.stdout);

        Ok(match value.as_str() {
            "" | "undefined" | "null" => None,
            _ => Some(value),
        })
    }

    /// Delete the lockfile in the working directory, returning whether
    /// a file was removed.
    async fn remove_lockfile(&self) -> miette::Result<bool> {
        let lockfile = self
            .ensure_cwd_defined("remove lockfile")?
            .join(self.get_lock_filename());

        if !lockfile.exists() {
            return Ok(false);
        }

        debug!("Removing lockfile {}", color::path(&lockfile));

        fs::remove_file(&lockfile)?;

        Ok(true)
    }

    /// Delete `node_modules` in the working directory, returning whether
    /// a directory was removed.
    async fn uninstall(&self) -> miette::Result<bool> {
        let modules_dir = self
            .ensure_cwd_defined("uninstall")?
            .join(NODE_MODULES_DIR);

        if !modules_dir.exists() {
            return Ok(false);
        }

        debug!("Removing {}", color::path(&modules_dir));

        fs::remove_dir_all(&modules_dir)?;

        Ok(true)
    }
}
