use crate::node_package_manager::NodePackageManager;
use crate::npm_manager::NpmPackageManager;
use crate::offline_probe::OfflineProbe;
use crate::package_manager_error::PackageManagerError;
use crate::package_manager_options::PackageManagerOptions;
use crate::pending_command::PendingCommand;
use crate::pnpm_manager::PnpmPackageManager;
use crate::resolve::resolve_package_manager;
use crate::yarn_manager::YarnPackageManager;
use async_trait::async_trait;
use depman_common::color;
use depman_lang_node::{NPM, PNPM, YARN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerType {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManagerType {
    pub fn get_bin_name(&self) -> &'static str {
        match self {
            Self::Npm => NPM.binary,
            Self::Pnpm => PNPM.binary,
            Self::Yarn => YARN.binary,
        }
    }

    pub fn get_lock_filename(&self) -> &'static str {
        match self {
            Self::Npm => NPM.lock_filename,
            Self::Pnpm => PNPM.lock_filename,
            Self::Yarn => YARN.lock_filename,
        }
    }
}

impl fmt::Display for PackageManagerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Npm => "npm",
                Self::Pnpm => "pnpm",
                Self::Yarn => "yarn",
            }
        )
    }
}

impl FromStr for PackageManagerType {
    type Err = PackageManagerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" | "yarnpkg" => Ok(Self::Yarn),
            _ => Err(PackageManagerError::UnknownType(value.to_owned())),
        }
    }
}

/// A package manager adapter, selected at construction time.
#[derive(Clone, Debug)]
pub enum PackageManager {
    Npm(NpmPackageManager),
    Pnpm(PnpmPackageManager),
    Yarn(YarnPackageManager),
}

macro_rules! delegate {
    ($self:ident, $pm:ident => $expr:expr) => {
        match $self {
            PackageManager::Npm($pm) => $expr,
            PackageManager::Pnpm($pm) => $expr,
            PackageManager::Yarn($pm) => $expr,
        }
    };
}

impl PackageManager {
    pub fn new(type_of: PackageManagerType, options: PackageManagerOptions) -> Self {
        match type_of {
            PackageManagerType::Npm => Self::Npm(NpmPackageManager::new(options)),
            PackageManagerType::Pnpm => Self::Pnpm(PnpmPackageManager::new(options)),
            PackageManagerType::Yarn => Self::Yarn(YarnPackageManager::new(options)),
        }
    }

    /// Create a package manager for the project, rooted at the project.
    /// An explicit preference always wins, otherwise the package manager
    /// is detected from the workspace, falling back to npm.
    pub fn for_project<P: AsRef<Path>>(
        project_root: P,
        options: PackageManagerOptions,
        preferred: Option<PackageManagerType>,
    ) -> miette::Result<Self> {
        let project_root = project_root.as_ref();

        let type_of = match preferred {
            Some(preferred) => preferred,
            None => resolve_package_manager(project_root, None)?.unwrap_or_default(),
        };

        debug!(
            project_root = ?project_root,
            "Using {} as the package manager",
            color::shell(type_of.to_string())
        );

        Ok(Self::new(type_of, options.with_cwd(project_root)))
    }

    pub fn get_type(&self) -> PackageManagerType {
        match self {
            Self::Npm(_) => PackageManagerType::Npm,
            Self::Pnpm(_) => PackageManagerType::Pnpm,
            Self::Yarn(_) => PackageManagerType::Yarn,
        }
    }

    /// Replace the offline probe. Only Yarn consults it.
    pub fn with_offline_probe(self, probe: Arc<dyn OfflineProbe>) -> Self {
        match self {
            Self::Yarn(yarn) => Self::Yarn(yarn.with_offline_probe(probe)),
            other => other,
        }
    }
}

#[async_trait]
impl NodePackageManager for PackageManager {
    fn get_name(&self) -> &'static str {
        delegate!(self, pm => pm.get_name())
    }

    fn get_bin(&self) -> &'static str {
        delegate!(self, pm => pm.get_bin())
    }

    fn get_lock_filename(&self) -> &'static str {
        delegate!(self, pm => pm.get_lock_filename())
    }

    fn get_options(&self) -> &PackageManagerOptions {
        delegate!(self, pm => pm.get_options())
    }

    fn workspace_root(&self) -> miette::Result<Option<Self>> {
        Ok(match self {
            Self::Npm(pm) => pm.workspace_root()?.map(Self::Npm),
            Self::Pnpm(pm) => pm.workspace_root()?.map(Self::Pnpm),
            Self::Yarn(pm) => pm.workspace_root()?.map(Self::Yarn),
        })
    }

    async fn run_command(&self, script: &str, args: &[String]) -> PendingCommand {
        delegate!(self, pm => pm.run_command(script, args).await)
    }

    async fn install_command(&self, flags: &[String]) -> PendingCommand {
        delegate!(self, pm => pm.install_command(flags).await)
    }

    async fn add_command(&self, names: &[String]) -> PendingCommand {
        delegate!(self, pm => pm.add_command(names).await)
    }

    async fn add_dev_command(&self, names: &[String]) -> PendingCommand {
        delegate!(self, pm => pm.add_dev_command(names).await)
    }

    async fn add_global_command(&self, names: &[String]) -> PendingCommand {
        delegate!(self, pm => pm.add_global_command(names).await)
    }

    async fn remove_command(&self, names: &[String]) -> PendingCommand {
        delegate!(self, pm => pm.remove_command(names).await)
    }

    async fn remove_dev_command(&self, names: &[String]) -> PendingCommand {
        delegate!(self, pm => pm.remove_dev_command(names).await)
    }

    async fn remove_global_command(&self, names: &[String]) -> PendingCommand {
        delegate!(self, pm => pm.remove_global_command(names).await)
    }
}
