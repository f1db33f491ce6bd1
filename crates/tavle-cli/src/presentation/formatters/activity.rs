use super::{badge, time};
use owo_colors::OwoColorize;
use std::fmt;
use tavle_engine::interpret_body;
use tavle_types::ActivityRecord;

pub struct ActivityFeedView {
    records: Vec<ActivityRecord>,
    colors: bool,
}

impl ActivityFeedView {
    pub fn new(records: Vec<ActivityRecord>, colors: bool) -> Self {
        Self { records, colors }
    }
}

impl fmt::Display for ActivityFeedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            let title = if self.colors {
                record.title.bold().to_string()
            } else {
                record.title.clone()
            };

            let mut header = title;
            if let Some(user) = record.user_name.as_deref() {
                header.push_str(&format!(" ({})", user));
            }
            if let Some(ts) = record.created_at.as_deref() {
                let when = time::format_relative_time(ts);
                let when = if self.colors {
                    when.bright_black().to_string()
                } else {
                    when
                };
                header.push_str(&format!("  {}", when));
            }

            writeln!(f, "{}", header)?;
            let segments = interpret_body(&record.body);
            writeln!(f, "  {}", badge::render_segments(&segments, self.colors))?;
        }
        Ok(())
    }
}
