use crate::package_json::PackageJson;
use crate::pnpm_workspace::PnpmWorkspace;
use crate::{NPM, PNPM, YARN};
use depman_common::color;
use miette::IntoDiagnostic;
use starbase_utils::glob::GlobSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// Return true if the starting directory, relative to the workspace root,
/// is matched by the workspace package globs.
pub fn is_dir_in_workspace(
    start_dir: &Path,
    workspace_root: &Path,
    globs: &[String],
) -> miette::Result<bool> {
    let Ok(relative_dir) = start_dir.strip_prefix(workspace_root) else {
        return Ok(false);
    };

    if relative_dir.as_os_str().is_empty() {
        return Ok(true);
    }

    let globs = globs
        .iter()
        .map(|glob| glob.trim_start_matches("./").to_owned())
        .collect::<Vec<_>>();

    if globs.is_empty() {
        return Ok(false);
    }

    let relative_dir = relative_dir
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Ok(GlobSet::new(&globs)?.matches(relative_dir.as_str()))
}

/// Make the path absolute and fold `.` and `..` components lexically,
/// without touching the file system or following symlinks.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> miette::Result<PathBuf> {
    let path = std::path::absolute(path.as_ref()).into_diagnostic()?;
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    Ok(normalized)
}

fn find_root_upwards<F>(
    start_dir: &Path,
    lock_filenames: &[&str],
    load_workspace_globs: F,
) -> miette::Result<Option<PathBuf>>
where
    F: Fn(&Path) -> miette::Result<Option<Vec<String>>>,
{
    let start_dir = normalize_path(start_dir)?;
    let mut current_dir = Some(start_dir.as_path());

    while let Some(dir) = current_dir {
        if let Some(globs) = load_workspace_globs(dir)? {
            if is_dir_in_workspace(&start_dir, dir, &globs)? {
                debug!(root = ?dir, "Found workspace root");

                return Ok(Some(dir.to_path_buf()));
            }

            // A workspace that doesn't include us ends the search,
            // as any root above it would not include us either
            trace!(
                "Workspace at {} does not include {}, aborting search",
                color::path(dir),
                color::path(&start_dir),
            );

            return Ok(None);
        }

        if let Some(lock_filename) = lock_filenames
            .iter()
            .find(|lock_filename| dir.join(lock_filename).exists())
        {
            debug!(
                root = ?dir,
                "Found workspace root from lockfile {}",
                color::file(lock_filename)
            );

            return Ok(Some(dir.to_path_buf()));
        }

        current_dir = dir.parent();
    }

    Ok(None)
}

/// Find the root of a Yarn or npm workspace, starting from the provided
/// directory and traversing upwards. A directory qualifies if its `package.json`
/// declares `workspaces` that include the starting directory, or if it
/// contains a `yarn.lock` or `package-lock.json`.
pub fn find_yarn_or_npm_workspace_root<P: AsRef<Path>>(
    start_dir: P,
) -> miette::Result<Option<PathBuf>> {
    find_root_upwards(
        start_dir.as_ref(),
        &[YARN.lock_filename, NPM.lock_filename],
        |dir| Ok(PackageJson::read(dir)?.and_then(|package| package.get_workspace_globs())),
    )
}

/// Find the root of a pnpm workspace, starting from the provided directory
/// and traversing upwards. A directory qualifies if its `pnpm-workspace.yaml`
/// includes the starting directory, or if it contains a `pnpm-lock.yaml`.
pub fn find_pnpm_workspace_root<P: AsRef<Path>>(start_dir: P) -> miette::Result<Option<PathBuf>> {
    find_root_upwards(start_dir.as_ref(), &[PNPM.lock_filename], |dir| {
        Ok(PnpmWorkspace::read(dir)?.map(|workspace| workspace.packages))
    })
}

/// Find the workspace root for any supported package manager.
pub fn find_workspace_root<P: AsRef<Path>>(start_dir: P) -> miette::Result<Option<PathBuf>> {
    let start_dir = start_dir.as_ref();

    if let Some(root) = find_yarn_or_npm_workspace_root(start_dir)? {
        return Ok(Some(root));
    }

    find_pnpm_workspace_root(start_dir)
}
