use crate::package_manager::PackageManagerType;
use depman_common::color;
use depman_lang_node::PackageJson;
use depman_lang_node::workspace::find_workspace_root;
use std::path::Path;
use tracing::{debug, trace};

const DETECTION_ORDER: [PackageManagerType; 3] = [
    PackageManagerType::Yarn,
    PackageManagerType::Npm,
    PackageManagerType::Pnpm,
];

/// Detect which package manager a project uses, by inspecting the lockfiles
/// and `package.json` of its workspace root (or the project itself when
/// it's not part of a workspace). A preferred package manager is only
/// returned when its lockfile exists.
pub fn resolve_package_manager(
    project_root: &Path,
    preferred: Option<PackageManagerType>,
) -> miette::Result<Option<PackageManagerType>> {
    let root = find_workspace_root(project_root)?.unwrap_or_else(|| project_root.to_path_buf());
    let has_lockfile = |type_of: &PackageManagerType| root.join(type_of.get_lock_filename()).exists();

    trace!(root = ?root, "Resolving package manager");

    if let Some(preferred) = preferred {
        if has_lockfile(&preferred) {
            return Ok(Some(preferred));
        }

        debug!(
            "Preferred package manager {} has no {} in {}",
            color::shell(preferred.to_string()),
            color::file(preferred.get_lock_filename()),
            color::path(&root),
        );
    }

    if let Some(type_of) = DETECTION_ORDER.into_iter().find(has_lockfile) {
        debug!(
            "Detected {} from {}",
            color::shell(type_of.to_string()),
            color::file(type_of.get_lock_filename())
        );

        return Ok(Some(type_of));
    }

    let Some(package) = PackageJson::read(&root)? else {
        return Ok(None);
    };

    let Some((name, _)) = package.get_package_manager_spec() else {
        return Ok(None);
    };

    match name.parse::<PackageManagerType>() {
        Ok(type_of) => {
            debug!(
                "Detected {} from the {} field",
                color::shell(type_of.to_string()),
                color::property("packageManager")
            );

            Ok(Some(type_of))
        }
        Err(_) => {
            debug!("Unsupported package manager {}, ignoring", color::shell(name));

            Ok(None)
        }
    }
}
