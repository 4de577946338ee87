use crate::app::AppResult;
use crate::session::CliSession;
use clap::Args;
use depman_package_manager::NodePackageManager;

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    #[arg(help = "Name of the script to run")]
    pub script: String,

    #[arg(last = true, help = "Arguments to pass through to the script")]
    pub passthrough: Vec<String>,
}

pub async fn run(session: &CliSession, args: RunArgs) -> AppResult {
    session
        .get_package_manager()?
        .run(&args.script, &args.passthrough)
        .await?;

    Ok(None)
}
