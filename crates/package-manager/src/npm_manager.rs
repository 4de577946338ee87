use crate::node_package_manager::NodePackageManager;
use crate::package_manager_options::PackageManagerOptions;
use crate::pending_command::PendingCommand;
use async_trait::async_trait;
use depman_lang_node::NPM;
use depman_lang_node::workspace::find_yarn_or_npm_workspace_root;

#[derive(Clone, Debug)]
pub struct NpmPackageManager {
    options: PackageManagerOptions,
}

impl NpmPackageManager {
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

#[async_trait]
impl NodePackageManager for NpmPackageManager {
    fn get_name(&self) -> &'static str {
        "npm"
    }

    fn get_bin(&self) -> &'static str {
        NPM.binary
    }

    fn get_lock_filename(&self) -> &'static str {
        NPM.lock_filename
    }

    fn get_options(&self) -> &PackageManagerOptions {
        &self.options
    }

    fn workspace_root(&self) -> miette::Result<Option<Self>> {
        let cwd = self.ensure_cwd_defined("find workspace root")?;

        Ok(find_yarn_or_npm_workspace_root(cwd)?
            .map(|root| Self::new(self.options.clone().with_cwd(root))))
    }

    // npm consumes flags placed after the script name, unless separated
    async fn run_command(&self, script: &str, args: &[String]) -> PendingCommand {
        let mut list = vec!["run".to_owned(), script.to_owned()];

        if !args.is_empty() {
            list.push("--".into());
            list.extend_from_slice(args);
        }

        self.create_command(list)
    }

    async fn install_command(&self, flags: &[String]) -> PendingCommand {
        self.create_command_with(["install"], flags)
    }

    async fn add_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        self.create_command_with(["install", "--save"], names)
    }

    async fn add_dev_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        self.create_command_with(["install", "--save-dev"], names)
    }

    async fn add_global_command(&self, names: &[String]) -> PendingCommand {
        if names.is_empty() {
            return self.install_command(&[]).await;
        }

        self.create_command_with(["install", "--global"], names)
    }

    async fn remove_command(&self, names: &[String]) -> PendingCommand {
        self.create_command_with(["uninstall"], names)
    }

    async fn remove_dev_command(&self, names: &[String]) -> PendingCommand {
        self.create_command_with(["uninstall", "--save-dev"], names)
    }

    async fn remove_global_command(&self, names: &[String]) -> PendingCommand {
        self.create_command_with(["uninstall", "--global"], names)
    }
}
