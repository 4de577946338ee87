use crate::app::AppResult;
use crate::session::CliSession;
use depman_package_manager::NodePackageManager;

pub async fn workspace_root(session: &CliSession) -> AppResult {
    let Some(root) = session.get_package_manager()?.workspace_root()? else {
        return Ok(Some(1));
    };

    if let Some(cwd) = &root.get_options().cwd {
        println!("{}", cwd.display());
    }

    Ok(None)
}
