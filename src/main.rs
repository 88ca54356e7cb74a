//! Entry point: parse CLI and dispatch to command handlers.

use awards_pool::{
    cli::{AwardsPool, Commands},
    commands::{
        reconcile::{handle_reconcile, ReconcileParams},
        rescore::handle_rescore,
    },
    Result,
};
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = AwardsPool::parse();

    match app.command {
        Commands::Reconcile {
            event,
            sources,
            dry_run,
            offline,
            verbose,
        } => {
            handle_reconcile(ReconcileParams {
                event,
                sources,
                dry_run,
                offline,
                verbose,
            })
            .await?
        }

        Commands::Rescore { event, verbose } => handle_rescore(event, verbose).await?,
    }

    Ok(())
}
