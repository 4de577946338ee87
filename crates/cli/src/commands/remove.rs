use crate::app::AppResult;
use crate::session::CliSession;
use clap::Args;
use depman_package_manager::NodePackageManager;

#[derive(Args, Clone, Debug)]
pub struct RemoveArgs {
    #[arg(required = true, help = "Names of the packages to remove")]
    pub names: Vec<String>,

    #[arg(long, short = 'D', help = "Remove from development dependencies")]
    pub dev: bool,

    #[arg(
        long,
        short = 'g',
        conflicts_with = "dev",
        help = "Remove globally installed packages"
    )]
    pub global: bool,
}

pub async fn remove(session: &CliSession, args: RemoveArgs) -> AppResult {
    let package_manager = session.get_package_manager()?;

    if args.global {
        package_manager.remove_global(&args.names).await?;
    } else if args.dev {
        package_manager.remove_dev(&args.names).await?;
    } else {
        package_manager.remove(&args.names).await?;
    }

    Ok(None)
}
