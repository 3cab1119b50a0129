use jobtrack::{Config, JobStore};

use crate::cli::Commands;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod ports;
pub mod seed;
pub mod show;
pub mod stats;

pub fn dispatch(command: Commands, store: &mut JobStore, config: &Config) -> anyhow::Result<()> {
    tracing::debug!(?command, jobs = store.len(), "dispatching command");
    match command {
        Commands::List(args) => list::handle(&args, store, config),
        Commands::Show { id } => show::handle(id, store),
        Commands::Add(args) => add::handle(args, store),
        Commands::Edit(args) => edit::handle(args, store),
        Commands::Delete { id, yes } => delete::handle(id, yes, store),
        Commands::Stats(args) => stats::handle(&args, store),
        Commands::Seed => seed::handle(store),
        Commands::Ports => {
            ports::handle();
            Ok(())
        }
    }
}
