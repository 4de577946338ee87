use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options shared by every package manager adapter, and forwarded
/// to each spawned process.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageManagerOptions {
    /// Directory to run commands in. Falls back to the current
    /// process directory when spawning.
    pub cwd: Option<PathBuf>,

    /// Extra environment variables, applied over the defaults.
    pub env: FxHashMap<String, String>,

    /// Print each command before it runs.
    pub log: bool,

    /// Capture output instead of streaming it to the terminal.
    pub silent: bool,
}

impl PackageManagerOptions {
    pub fn with_cwd<P: AsRef<Path>>(mut self, cwd: P) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    pub fn with_env<K: AsRef<str>, V: AsRef<str>>(mut self, key: K, value: V) -> Self {
        self.env
            .insert(key.as_ref().to_owned(), value.as_ref().to_owned());
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}
