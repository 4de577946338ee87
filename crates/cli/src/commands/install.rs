use crate::app::AppResult;
use crate::session::CliSession;
use clap::Args;
use depman_package_manager::NodePackageManager;

#[derive(Args, Clone, Debug)]
pub struct InstallArgs {
    #[arg(last = true, help = "Flags to pass through to the package manager")]
    pub flags: Vec<String>,
}

pub async fn install(session: &CliSession, args: InstallArgs) -> AppResult {
    session
        .get_package_manager()?
        .install(&args.flags)
        .await?;

    Ok(None)
}
