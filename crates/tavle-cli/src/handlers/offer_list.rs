use crate::config::Config;
use crate::presentation::formatters::offer_list::OfferListView;
use crate::store::RecordStore;
use crate::types::{OutputFormat, SortDirectionArg};
use anyhow::Result;
use is_terminal::IsTerminal;
use std::path::Path;
use tavle_engine::{ListFilter, SortConfig, build_list};
use tavle_types::{Offer, OfferPhase};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    store: &RecordStore,
    config: &Config,
    phase: Option<String>,
    company: Option<String>,
    sort: Option<String>,
    direction: SortDirectionArg,
    limit: usize,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let known_phases: Vec<&str> = OfferPhase::ALL.iter().map(|p| p.as_key()).collect();
    let filter = ListFilter {
        phase: super::resolve_phase(phase, &known_phases)?,
        company: super::resolve_company(company, config)?,
    };
    let sort_config = sort.map(|key| SortConfig {
        key,
        direction: direction.into(),
    });

    let offers = store.load_offers(input)?;
    let mut offers = build_list(offers, &filter, sort_config.as_ref());
    offers.truncate(limit);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&offers)?),
        OutputFormat::Csv => write_csv(&offers)?,
        OutputFormat::Plain => {
            let colors = std::io::stdout().is_terminal();
            print!("{}", OfferListView::new(offers, colors));
        }
    }

    Ok(())
}

fn write_csv(offers: &[Offer]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record([
        "id",
        "title",
        "customerName",
        "phase",
        "companyId",
        "value",
        "probability",
        "dueDate",
        "updatedAt",
    ])?;
    for offer in offers {
        let value = offer.value.map(|v| v.to_string()).unwrap_or_default();
        let probability = offer.probability.map(|p| p.to_string()).unwrap_or_default();
        writer.write_record([
            offer.id.as_str(),
            offer.title.as_str(),
            offer.customer_name.as_deref().unwrap_or(""),
            offer.phase.as_key(),
            offer.company_id.as_key(),
            value.as_str(),
            probability.as_str(),
            offer.due_date.as_deref().unwrap_or(""),
            offer.updated_at.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
