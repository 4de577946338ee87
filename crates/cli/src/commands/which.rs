use crate::app::AppResult;
use crate::session::CliSession;
use depman_package_manager::NodePackageManager;

pub async fn which(session: &CliSession) -> AppResult {
    let package_manager = session.get_package_manager()?;

    println!("{} ({})", package_manager.get_type(), package_manager.get_bin());

    Ok(None)
}
