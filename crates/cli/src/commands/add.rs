use crate::app::AppResult;
use crate::session::CliSession;
use clap::Args;
use depman_package_manager::NodePackageManager;

#[derive(Args, Clone, Debug)]
pub struct AddArgs {
    #[arg(help = "Names of the packages to add")]
    pub names: Vec<String>,

    #[arg(long, short = 'D', help = "Add as development dependencies")]
    pub dev: bool,

    #[arg(
        long,
        short = 'g',
        conflicts_with = "dev",
        help = "Add as globally installed packages"
    )]
    pub global: bool,
}

pub async fn add(session: &CliSession, args: AddArgs) -> AppResult {
    let package_manager = session.get_package_manager()?;

    if args.global {
        package_manager.add_global(&args.names).await?;
    } else if args.dev {
        package_manager.add_dev(&args.names).await?;
    } else {
        package_manager.add(&args.names).await?;
    }

    Ok(None)
}
