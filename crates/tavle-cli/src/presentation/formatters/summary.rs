use super::{badge, number};
use std::fmt;
use tavle_engine::{Badge, PipelineSummary};

pub struct PipelineSummaryView {
    summary: PipelineSummary,
    colors: bool,
}

impl PipelineSummaryView {
    pub fn new(summary: PipelineSummary, colors: bool) -> Self {
        Self { summary, colors }
    }
}

impl fmt::Display for PipelineSummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} tilbud, totalt {} (vektet {})",
            self.summary.offer_count,
            number::format_nok(self.summary.total_value),
            number::format_nok(self.summary.weighted_value)
        )?;

        for slice in &self.summary.phases {
            let phase = badge::render_badge(
                &Badge::Phase {
                    key: slice.phase.as_key().to_string(),
                },
                self.colors,
            );
            writeln!(
                f,
                "  {}  {} tilbud  {}  (vektet {})",
                phase,
                slice.count,
                number::format_nok(slice.total_value),
                number::format_nok(slice.weighted_value)
            )?;
        }
        Ok(())
    }
}
