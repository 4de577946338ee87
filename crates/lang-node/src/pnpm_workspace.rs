// pnpm-workspace.yaml

use crate::PNPM;
use serde::{Deserialize, Serialize};
use starbase_utils::yaml;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PnpmWorkspace {
    pub packages: Vec<String>,
}

impl PnpmWorkspace {
    /// Read the `pnpm-workspace.yaml` within the provided directory, if it exists.
    pub fn read<P: AsRef<Path>>(dir: P) -> miette::Result<Option<PnpmWorkspace>> {
        let Some(filename) = PNPM.workspace_filename else {
            return Ok(None);
        };

        let path = dir.as_ref().join(filename);

        if !path.is_file() {
            return Ok(None);
        }

        Ok(Some(yaml::read_file(path)?))
    }
}
