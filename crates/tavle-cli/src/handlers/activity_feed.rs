use crate::presentation::formatters::activity::ActivityFeedView;
use crate::store::RecordStore;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use serde::Serialize;
use std::path::Path;
use tavle_engine::{Segment, interpret_body};
use tavle_types::ActivityRecord;

/// JSON shape for one interpreted feed entry.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivityEntry {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    segments: Vec<Segment>,
}

pub fn handle(
    store: &RecordStore,
    limit: usize,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let mut records = store.load_activities(input)?;
    records.truncate(limit);

    match format {
        OutputFormat::Json => {
            let entries: Vec<ActivityEntry> = records
                .into_iter()
                .map(|record: ActivityRecord| ActivityEntry {
                    segments: interpret_body(&record.body),
                    title: record.title,
                    user_name: record.user_name,
                    created_at: record.created_at,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Csv => bail!("csv output is not supported for the activity feed"),
        OutputFormat::Plain => {
            let colors = std::io::stdout().is_terminal();
            print!("{}", ActivityFeedView::new(records, colors));
        }
    }

    Ok(())
}
