use crate::config::Config;
use crate::presentation::formatters::project_list::ProjectListView;
use crate::store::RecordStore;
use crate::types::{OutputFormat, SortDirectionArg};
use anyhow::Result;
use is_terminal::IsTerminal;
use std::path::Path;
use tavle_engine::{ListFilter, SortConfig, build_list};
use tavle_types::{Project, ProjectPhase};

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
    let known_phases: Vec<&str> = ProjectPhase::ALL.iter().map(|p| p.as_key()).collect();
    let filter = ListFilter {
        phase: super::resolve_phase(phase, &known_phases)?,
        company: super::resolve_company(company, config)?,
    };
    let sort_config = sort.map(|key| SortConfig {
        key,
        direction: direction.into(),
    });

    let projects = store.load_projects(input)?;
    let mut projects = build_list(projects, &filter, sort_config.as_ref());
    projects.truncate(limit);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projects)?),
        OutputFormat::Csv => write_csv(&projects)?,
        OutputFormat::Plain => {
            let colors = std::io::stdout().is_terminal();
            print!("{}", ProjectListView::new(projects, colors));
        }
    }

    Ok(())
}

fn write_csv(projects: &[Project]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record([
        "id",
        "name",
        "customerName",
        "phase",
        "companyId",
        "contractValue",
        "completion",
        "health",
        "updatedAt",
    ])?;
    for project in projects {
        let value = project.contract_value.map(|v| v.to_string()).unwrap_or_default();
        let completion = project.completion.map(|c| c.to_string()).unwrap_or_default();
        writer.write_record([
            project.id.as_str(),
            project.name.as_str(),
            project.customer_name.as_deref().unwrap_or(""),
            project.phase.as_key(),
            project.company_id.as_key(),
            value.as_str(),
            completion.as_str(),
            project.health.map(|h| h.as_key()).unwrap_or(""),
            project.updated_at.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
