use crate::node_package_manager::NodePackageManager;
use crate::offline_probe::{NetworkOfflineProbe, OfflineProbe};
use crate::package_manager_options::PackageManagerOptions;
use crate::pending_command::PendingCommand;
use async_trait::async_trait;
use depman_lang_node::YARN;
use depman_lang_node::workspace::find_yarn_or_npm_workspace_root;
use std::sync::Arc;
use tracing::debug;

/// Yarn (v1) package manager, invoked through the `yarnpkg` binary.
#[derive(Clone, Debug)]
pub struct YarnPackageManager {
    options: PackageManagerOptions,

    offline_probe: Arc<dyn OfflineProbe>,
}

impl YarnPackageManager {
    pub fn new(options: PackageManagerOptions) -> Self {
        Self {
            options,
            offline_probe: Arc::new(NetworkOfflineProbe::default()),
        }
    }

    pub fn with_offline_probe(mut self, probe: Arc<dyn OfflineProbe>) -> Self {
        self.offline_probe = probe;
        self
    }

    /// Append `--offline` when the probe reports that we're offline.
    async fn with_offline_flag(&self, mut args: Vec<String>) -> Vec<String> {
        if self.offline_probe.is_offline().await {
            debug!("No internet connection, running yarn with --offline");

            args.push("--offline".into());
        }

        args
    }
}

#[async_trait]
impl NodePackageManager for YarnPackageManager {
    fn get_name(&self) -> &'static str {
        "yarn"
    }

    fn get_bin(&self) -> &'static str {
        YARN.binary
    }

    fn get_lock_filename(&self) -> &'static str {
        YARN.lock_filename
    }

    fn get_options(&self) -> &PackageManagerOptions {
        &self.options
    }

    fn workspace_root(&self) -> miette::Result<Option<Self>> {
        let cwd = self.ensure_cwd_defined("find workspace root")?;

        Ok(find_yarn_or_npm_workspace_root(cwd)?.map(|root| Self {
            options: self.options.clone().with_cwd(root),
            offline_probe: Arc::clone(&self.offline_probe),
        }))
    }

    async fn run_command(&self, script: &str, args: &[String]) -> PendingCommand {
        let mut list = vec!["run".to_owned(), script.to_owned()];
        list.extend_from_slice(args);

        self.create_command(list)
    }

    async fn install_command(&self, flags: &[String]) -> PendingCommand {
        let mut args = self.with_offline_flag(vec!["install".into()]).await;
        args.extend_from_slice(flags);

        self.create_command(args)
    }

    async fn add_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        let mut args = vec!["add".to_owned()];
        args.extend_from_slice(names);

        self.create_command(self.with_offline_flag(args).await)
    }

    async fn add_dev_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        let mut args = vec!["add".to_owned(), "--dev".to_owned()];
        args.extend_from_slice(names);

        self.create_command(self.with_offline_flag(args).await)
    }

    async fn add_global_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        let mut args = vec!["global".to_owned(), "add".to_owned()];
        args.extend_from_slice(names);

        self.create_command(self.with_offline_flag(args).await)
    }

    async fn remove_command(&self, names: &[String]) -> PendingCommand {
        let mut args = vec!["remove".to_owned()];
        args.extend_from_slice(names);

        self.create_command(args)
    }

    // Yarn has no dev specific remove, it removes from all dependency groups
    async fn remove_dev_command(&self, names: &[String]) -> PendingCommand {
        self.remove_command(names).await
    }

    async fn remove_global_command(&self, names: &[String]) -> PendingCommand {
        let mut args = vec!["global".to_owned(), "remove".to_owned()];
        args.extend_from_slice(names);

        self.create_command(args)
    }
}
