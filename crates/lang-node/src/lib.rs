pub mod package_json;
pub mod pnpm_workspace;
pub mod workspace;

pub use package_json::*;
pub use pnpm_workspace::*;

pub const NODE_MODULES_DIR: &str = "node_modules";

/// Files and binaries that identify a Node.js package manager.
#[derive(Debug, PartialEq)]
pub struct DependencyManager {
    pub binary: &'static str,
    pub lock_filename: &'static str,
    pub manifest_filename: &'static str,
    pub workspace_filename: Option<&'static str>,
}

pub const NPM: DependencyManager = DependencyManager {
    binary: "npm",
    lock_filename: "package-lock.json",
    manifest_filename: "package.json",
    workspace_filename: None,
};

pub const PNPM: DependencyManager = DependencyManager {
    binary: "pnpm",
    lock_filename: "pnpm-lock.yaml",
    manifest_filename: "package.json",
    workspace_filename: Some("pnpm-workspace.yaml"),
};

// `yarnpkg` avoids clashing with Hadoop's `yarn` binary
pub const YARN: DependencyManager = DependencyManager {
    binary: "yarnpkg",
    lock_filename: "yarn.lock",
    manifest_filename: "package.json",
    workspace_filename: None,
};
