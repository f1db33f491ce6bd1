use super::number;
use owo_colors::OwoColorize;
use tavle_engine::{Badge, Segment};
use tavle_types::{HealthStatus, OfferPhase, ProjectPhase};

/// Render interpreted segments as a single line, badges in brackets.
pub fn render_segments(segments: &[Segment], colors: bool) -> String {
    segments
        .iter()
        .map(|segment| render_segment(segment, colors))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_segment(segment: &Segment, colors: bool) -> String {
    match segment {
        Segment::Text { text } => text.clone(),
        Segment::Arrow => "→".to_string(),
        Segment::Badge { badge } => render_badge(badge, colors),
    }
}

pub fn render_badge(badge: &Badge, colors: bool) -> String {
    let label = badge_label(badge);
    if !colors {
        return format!("[{}]", label);
    }

    let colored = match badge {
        Badge::Phase { key } => phase_color(&label, key),
        Badge::ProjectPhase { .. } => label.blue().to_string(),
        Badge::Health { status } => health_color(&label, *status),
        Badge::Currency { .. } => label.cyan().to_string(),
        Badge::Percent { .. } => label.blue().to_string(),
        Badge::Plain { .. } => label.yellow().to_string(),
        Badge::Empty => label.bright_black().to_string(),
    };
    format!("[{}]", colored)
}

/// Uncolored display label for a badge. Unknown phase keys fall back to
/// the raw key rather than disappearing.
pub fn badge_label(badge: &Badge) -> String {
    match badge {
        Badge::Phase { key } => OfferPhase::from_key(key)
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| key.clone()),
        Badge::ProjectPhase { key } => ProjectPhase::from_key(key)
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| key.clone()),
        Badge::Health { status } => status.label().to_string(),
        Badge::Currency { amount } => number::format_nok(*amount),
        Badge::Percent { value } => format!("{} %", value),
        Badge::Plain { value } => value.clone(),
        Badge::Empty => "(ingen)".to_string(),
    }
}

fn phase_color(label: &str, key: &str) -> String {
    match OfferPhase::from_key(key) {
        Some(OfferPhase::Won) => label.green().to_string(),
        Some(OfferPhase::Lost) => label.red().to_string(),
        Some(OfferPhase::Sent) => label.blue().to_string(),
        Some(OfferPhase::Negotiation) => label.yellow().to_string(),
        Some(OfferPhase::Draft) => label.bright_black().to_string(),
        None => label.to_string(),
    }
}

fn health_color(label: &str, status: HealthStatus) -> String {
    match status {
        HealthStatus::OnTrack => label.green().to_string(),
        HealthStatus::AtRisk => label.yellow().to_string(),
        HealthStatus::Delayed => label.red().to_string(),
        HealthStatus::OverBudget => label.magenta().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavle_engine::interpret_body;

    #[test]
    fn renders_currency_badges_in_nok() {
        let segments = interpret_body("Fakturert endret fra 980000.00 til 12000000.00");
        assert_eq!(
            render_segments(&segments, false),
            "Fakturert endret fra [kr 980 000] til [kr 12 000 000]"
        );
    }

    #[test]
    fn renders_phase_labels_from_keys() {
        let segments = interpret_body("Oppdatert (fase: sent -> won)");
        assert_eq!(
            render_segments(&segments, false),
            "Oppdatert [Sendt] → [Vunnet]"
        );
    }

    #[test]
    fn unknown_phase_key_falls_back_to_raw_key() {
        let badge = Badge::Phase {
            key: "pending".to_string(),
        };
        assert_eq!(render_badge(&badge, false), "[pending]");
    }

    #[test]
    fn empty_value_badge_is_placeholder() {
        assert_eq!(render_badge(&Badge::Empty, false), "[(ingen)]");
    }
}
