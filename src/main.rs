//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nhl_roster::{
    cli::{Commands, NhlRoster},
    commands::{
        fetch::handle_fetch, load::handle_load, open_database, resolve_api_config,
        run::handle_run, serve::handle_serve, snapshot_store, transform::handle_transform,
    },
    logging::setup_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let app = NhlRoster::parse();
    setup_logging(app.verbose).context("Failed to initialise logging")?;

    match app.command {
        Commands::Fetch { api, snapshots } => {
            let config = resolve_api_config(&api)?;
            let path = handle_fetch(&config, &snapshot_store(&snapshots))
                .await
                .context("Failed to complete player data fetch")?;
            println!("{}", path.display());
        }

        Commands::Transform { input, snapshots } => {
            let path = handle_transform(input.as_deref(), &snapshot_store(&snapshots))
                .context("Processing failed")?;
            println!("{}", path.display());
        }

        Commands::Load {
            input,
            snapshots,
            clear_db,
        } => {
            let mut db = open_database(app.db.as_ref()).context("Failed to open database")?;
            let report = handle_load(
                &mut db,
                input.as_deref(),
                &snapshot_store(&snapshots),
                clear_db,
            )
            .context("Load failed")?;
            println!("Successfully added {} players", report.inserted.len());
        }

        Commands::Run {
            api,
            snapshots,
            no_snapshots,
            clear_db,
        } => {
            let config = resolve_api_config(&api)?;
            let snapshots = (!no_snapshots).then(|| snapshot_store(&snapshots));
            let mut db = open_database(app.db.as_ref()).context("Failed to open database")?;
            let report = handle_run(config, snapshots, &mut db, clear_db)
                .await
                .context("Pipeline aborted")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Serve { addr } => {
            let db = open_database(app.db.as_ref()).context("Failed to open database")?;
            handle_serve(addr, db).await.context("Server stopped")?;
        }
    }

    Ok(())
}
