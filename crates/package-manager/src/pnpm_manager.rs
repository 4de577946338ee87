use crate::node_package_manager::NodePackageManager;
use crate::package_manager_options::PackageManagerOptions;
use crate::pending_command::PendingCommand;
use async_trait::async_trait;
use depman_common::is_ci;
use depman_lang_node::PNPM;
use depman_lang_node::workspace::find_pnpm_workspace_root;

#[derive(Clone, Debug)]
pub struct PnpmPackageManager {
    options: PackageManagerOptions,
}

impl PnpmPackageManager {
    pub fn new(options: PackageManagerOptions) -> Self {
        Self { options }
    }

    fn create_command_with<const N: usize>(
        &self,
        leading: [&str; N],
        names: &[String],
    ) -> PendingCommand {
        let mut args = leading.map(String::from).to_vec();
        args.extend_from_slice(names);

        self.create_command(args)
    }
}

/// pnpm enables a frozen lockfile by default in CI, which fails when
/// dependencies were added or changed. Opt out unless the caller chose.
pub(crate) fn get_install_flags(flags: &[String], ci: bool) -> Vec<String> {
    let mut list = vec![];

    if ci
        && !flags.iter().any(|flag| {
            flag.starts_with("--frozen-lockfile") || flag.starts_with("--no-frozen-lockfile")
        })
    {
        list.push("--no-frozen-lockfile".to_owned());
    }

    list.extend_from_slice(flags);
    list
}

#[async_trait]
impl NodePackageManager for PnpmPackageManager {
    fn get_name(&self) -> &'static str {
        "pnpm"
    }

    fn get_bin(&self) -> &'static str {
        PNPM.binary
    }

    fn get_lock_filename(&self) -> &'static str {
        PNPM.lock_filename
    }

    fn get_options(&self) -> &PackageManagerOptions {
        &self.options
    }

    fn workspace_root(&self) -> miette::Result<Option<Self>> {
        let cwd = self.ensure_cwd_defined("find workspace root")?;

        Ok(find_pnpm_workspace_root(cwd)?
            .map(|root| Self::new(self.options.clone().with_cwd(root))))
    }

    async fn run_command(&self, script: &str, args: &[String]) -> PendingCommand {
        let mut list = vec!["run".to_owned(), script.to_owned()];
        list.extend_from_slice(args);

        self.create_command(list)
    }

    async fn install_command(&self, flags: &[String]) -> PendingCommand {
        self.create_command_with(["install"], &get_install_flags(flags, is_ci()))
    }

    async fn add_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        self.create_command_with(["add"], names)
    }

    async fn add_dev_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        self.create_command_with(["add", "--save-dev"], names)
    }

    async fn add_global_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        self.create_command_with(["add", "--global"], names)
    }

    async fn remove_command(&self, names: &[String]) -> PendingCommand {
        self.create_command_with(["remove"], names)
    }

    async fn remove_dev_command(&self, names: &[String]) -> PendingCommand {
        self.create_command_with(["remove", "--save-dev"], names)
    }

    async fn remove_global_command(&self, names: &[String]) -> PendingCommand {
        self.create_command_with(["remove", "--global"], names)
    }
}
