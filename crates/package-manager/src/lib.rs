mod node_package_manager;
mod npm_manager;
mod offline_probe;
mod package_manager;
mod package_manager_error;
mod package_manager_options;
mod pending_command;
mod pnpm_manager;
mod resolve;
mod yarn_manager;

pub use async_trait::async_trait;
pub use node_package_manager::*;
pub use npm_manager::*;
pub use offline_probe::*;
pub use package_manager::*;
pub use package_manager_error::*;
pub use package_manager_options::*;
pub use pending_command::*;
pub use pnpm_manager::*;
pub use resolve::*;
pub use yarn_manager::*;
