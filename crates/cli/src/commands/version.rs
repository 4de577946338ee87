use crate::app::AppResult;
use crate::session::CliSession;
use depman_package_manager::NodePackageManager;

pub async fn version(session: &CliSession) -> AppResult {
    let version = session.get_package_manager()?.version().await?;

    println!("{version}");

    Ok(None)
}
