use super::args::{ActivityCommand, Cli, Commands, OfferCommand, ProjectCommand};
use super::handlers;
use crate::config::{Config, resolve_data_dir};
use crate::store::RecordStore;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_from(&data_dir.join("config.toml"))?;
    let store = RecordStore::new(data_dir, config.exports.clone());

    match cli.command {
        Commands::Offer { command } => match command {
            OfferCommand::List {
                phase,
                company,
                sort,
                direction,
                limit,
                input,
            } => handlers::offer_list::handle(
                &store,
                &config,
                phase,
                company,
                sort,
                direction,
                limit,
                input.as_deref(),
                cli.format,
            ),
            OfferCommand::Summary { company, input } => handlers::offer_summary::handle(
                &store,
                &config,
                company,
                input.as_deref(),
                cli.format,
            ),
        },

        Commands::Project { command } => match command {
            ProjectCommand::List {
                phase,
                company,
                sort,
                direction,
                limit,
                input,
            } => handlers::project_list::handle(
                &store,
                &config,
                phase,
                company,
                sort,
                direction,
                limit,
                input.as_deref(),
                cli.format,
            ),
        },

        Commands::Activity { command } => match command {
            ActivityCommand::Feed { limit, input } => {
                handlers::activity_feed::handle(&store, limit, input.as_deref(), cli.format)
            }
        },
    }
}
