// package.json

use crate::NPM;
use serde::{Deserialize, Serialize};
use starbase_utils::json;
use std::path::Path;

// Only define fields we interact with and care about!
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspaces: Option<PackageWorkspaces>,
}

impl PackageJson {
    /// Read the `package.json` within the provided directory, if it exists.
    pub fn read<P: AsRef<Path>>(dir: P) -> miette::Result<Option<PackageJson>> {
        let path = dir.as_ref().join(NPM.manifest_filename);

        if !path.is_file() {
            return Ok(None);
        }

        Ok(Some(json::read_file(path)?))
    }

    /// Return the workspace globs, regardless of which form they were declared in.
    pub fn get_workspace_globs(&self) -> Option<Vec<String>> {
        match self.workspaces.as_ref()? {
            PackageWorkspaces::Array(globs) => Some(globs.to_owned()),
            PackageWorkspaces::Object(expanded) => {
                Some(expanded.packages.clone().unwrap_or_default())
            }
        }
    }

    /// Split the `packageManager` field (`yarn@1.22.19+sha224.abc`)
    /// into its name and optional version.
    pub fn get_package_manager_spec(&self) -> Option<(&str, Option<&str>)> {
        let spec = self.package_manager.as_deref()?.trim();

        if spec.is_empty() {
            return None;
        }

        // Scoped names don't apply here, so the first `@` is the separator
        match spec.split_once('@') {
            Some((name, version)) => {
                let version = version.split('+').next().unwrap_or(version);

                Some((name, if version.is_empty() { None } else { Some(version) }))
            }
            None => Some((spec, None)),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PackageWorkspacesExpanded {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nohoist: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PackageWorkspaces {
    Array(Vec<String>),
    Object(PackageWorkspacesExpanded),
}
