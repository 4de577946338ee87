pub mod app;
pub mod app_options;
pub mod commands;
pub mod logging;
pub mod session;

pub use app::*;
pub use app_options::*;
pub use session::*;

use tracing::debug;

pub async fn run_cli(cli: Cli) -> AppResult {
    let command = cli.command.clone();
    let session = CliSession::new(cli);

    debug!(command = ?command, "Running command");

    match command {
        Commands::Add(args) => commands::add::add(&session, args).await,
        Commands::Install(args) => commands::install::install(&session, args).await,
        Commands::Remove(args) => commands::remove::remove(&session, args).await,
        Commands::Run(args) => commands::run::run(&session, args).await,
        Commands::Version => commands::version::version(&session).await,
        Commands::Which => commands::which::which(&session).await,
        Commands::WorkspaceRoot => commands::workspace_root::workspace_root(&session).await,
    }
}
