use super::{badge, number, text, time};
use owo_colors::OwoColorize;
use std::fmt;
use tavle_engine::Badge;
use tavle_types::Project;

pub struct ProjectListView {
    projects: Vec<Project>,
    colors: bool,
}

impl ProjectListView {
    pub fn new(projects: Vec<Project>, colors: bool) -> Self {
        Self { projects, colors }
    }
}

impl fmt::Display for ProjectListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for project in &self.projects {
            let name = text::truncate(&project.name, 32);
            let customer = text::truncate(project.customer_name.as_deref().unwrap_or("-"), 20);

            let phase = badge::render_badge(
                &Badge::ProjectPhase {
                    key: project.phase.as_key().to_string(),
                },
                self.colors,
            );

            let health = project
                .health
                .map(|status| badge::render_badge(&Badge::Health { status }, self.colors))
                .unwrap_or_else(|| "-".to_string());

            let completion = project
                .completion
                .map(|c| format!("{} %", c))
                .unwrap_or_else(|| "-".to_string());

            let value = project
                .contract_value
                .map(number::format_nok)
                .unwrap_or_else(|| "-".to_string());

            let updated = project
                .updated_at
                .as_deref()
                .map(time::format_relative_time)
                .unwrap_or_else(|| "ukjent".to_string());
            let updated = if self.colors {
                updated.bright_black().to_string()
            } else {
                updated
            };

            writeln!(
                f,
                "{:<32}  {:<20}  {}  {}  {:>5}  {}  {}",
                name, customer, phase, health, completion, value, updated
            )?;
        }
        Ok(())
    }
}
