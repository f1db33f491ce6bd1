use crate::config::Config;
use crate::presentation::formatters::summary::PipelineSummaryView;
use crate::store::RecordStore;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use std::path::Path;
use tavle_engine::{ListFilter, filter_items, summarize_offers};

pub fn handle(
    store: &RecordStore,
    config: &Config,
    company: Option<String>,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let filter = ListFilter {
        phase: None,
        company: super::resolve_company(company, config)?,
    };

    let offers = store.load_offers(input)?;
    // Same visibility rules as the list view, then aggregate.
    let offers = filter_items(offers, &filter);
    let summary = summarize_offers(&offers);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Csv => bail!("csv output is not supported for summaries"),
        OutputFormat::Plain => {
            let colors = std::io::stdout().is_terminal();
            print!("{}", PipelineSummaryView::new(summary, colors));
        }
    }

    Ok(())
}
