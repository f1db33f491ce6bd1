//! Activity narrative interpreter.
//!
//! The backend writes activity bodies as Norwegian sentences following a
//! small set of templates ("Helse endret fra 'on_track' til 'at_risk'").
//! This module classifies a body against the known templates, in a fixed
//! priority order with first match wins, and produces typed segments so the
//! presentation layer can render badges instead of raw text. A body that
//! matches nothing renders verbatim; the interpreter never errors.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tavle_types::HealthStatus;

/// Rendered in place of an empty body.
pub const EMPTY_BODY_PLACEHOLDER: &str = "Ingen beskrivelse";

/// One piece of an interpreted activity body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Arrow,
    Badge { badge: Badge },
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text { text: text.into() }
    }

    pub fn badge(badge: Badge) -> Self {
        Segment::Badge { badge }
    }

    fn phase(key: &str) -> Self {
        Segment::badge(Badge::Phase {
            key: key.to_lowercase(),
        })
    }
}

/// Typed badge extracted from a matched template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Badge {
    Phase { key: String },
    ProjectPhase { key: String },
    Health { status: HealthStatus },
    Currency { amount: f64 },
    Percent { value: i64 },
    Plain { value: String },
    /// Stands in for an empty old/new value ("(ingen)").
    Empty,
}

type Rule = fn(&str) -> Option<Vec<Segment>>;

// Priority order is part of the backend contract: earlier templates are
// more specific. First match wins.
const RULES: &[Rule] = &[
    phase_transition_parenthesized,
    phase_transition_inline,
    reopen_phrase,
    health_change,
    currency_change,
    percent_change,
    project_phase_change,
    quoted_value_change,
];

/// Interpret an activity body into render-ready segments.
///
/// Total function: an empty body yields the fixed placeholder, an
/// unmatched body yields itself as a single text segment.
pub fn interpret_body(body: &str) -> Vec<Segment> {
    if body.is_empty() {
        return vec![Segment::text(EMPTY_BODY_PLACEHOLDER)];
    }

    for rule in RULES {
        if let Some(segments) = rule(body) {
            return segments;
        }
    }

    vec![Segment::text(body)]
}

static PHASE_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(fase:\s*([^\s)]+)\s*(?:->|→)\s*([^\s)]+)\s*\)").unwrap());

// Text after the parenthetical is dropped. The backend never emits trailing
// text in this template shape, and the web client discarded it as well, so
// the truncation is kept for parity with the inline variant below which
// does preserve trailing text.
fn phase_transition_parenthesized(body: &str) -> Option<Vec<Segment>> {
    let caps = PHASE_PAREN.captures(body)?;
    let matched = caps.get(0)?;

    let mut segments = Vec::new();
    let before = body[..matched.start()].trim();
    if !before.is_empty() {
        segments.push(Segment::text(before));
    }
    segments.push(Segment::phase(&caps[1]));
    segments.push(Segment::Arrow);
    segments.push(Segment::phase(&caps[2]));
    Some(segments)
}

static PHASE_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)fase:\s*(\S+)\s*(?:->|→)\s*(\S+)").unwrap());

fn phase_transition_inline(body: &str) -> Option<Vec<Segment>> {
    let caps = PHASE_INLINE.captures(body)?;
    let matched = caps.get(0)?;

    let mut segments = Vec::new();
    let before = body[..matched.start()].trim();
    if !before.is_empty() {
        segments.push(Segment::text(before));
    }
    segments.push(Segment::phase(&caps[1]));
    segments.push(Segment::Arrow);
    segments.push(Segment::phase(&caps[2]));
    let after = body[matched.end()..].trim();
    if !after.is_empty() {
        segments.push(Segment::text(after));
    }
    Some(segments)
}

static REOPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)gjenåpnet fra (\S+) til (\S+)").unwrap());

fn reopen_phrase(body: &str) -> Option<Vec<Segment>> {
    let caps = REOPEN.captures(body)?;
    Some(vec![
        Segment::text(format!("{}gjenåpnet fra", &caps[1])),
        Segment::phase(&caps[2]),
        Segment::text("til"),
        Segment::phase(&caps[3]),
    ])
}

static HEALTH_CHANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Helse endret fra '([^']+)' til '([^']+)'$").unwrap());

fn health_change(body: &str) -> Option<Vec<Segment>> {
    let caps = HEALTH_CHANGE.captures(body)?;
    // Both sides must be known health keys, otherwise this is some other
    // quoted value change and the generic rule takes it.
    let from = HealthStatus::from_key(&caps[1])?;
    let to = HealthStatus::from_key(&caps[2])?;
    Some(vec![
        Segment::text("Helse endret fra"),
        Segment::badge(Badge::Health { status: from }),
        Segment::text("til"),
        Segment::badge(Badge::Health { status: to }),
    ])
}

static NUMERIC_CHANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?) endret fra (-?\d[\d\s.,]*?) til (-?\d[\d\s.,]*?)$").unwrap());

/// Strip everything except digits, dot and minus, then parse as f64.
/// A string that does not survive the parse counts as "not a number".
fn parse_cleaned_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    if value.is_nan() { None } else { Some(value) }
}

fn currency_change(body: &str) -> Option<Vec<Segment>> {
    let caps = NUMERIC_CHANGE.captures(body)?;
    let from = parse_cleaned_number(&caps[2])?;
    let to = parse_cleaned_number(&caps[3])?;
    // Small numbers are percentages or counters, not amounts.
    if from < 1000.0 && to < 1000.0 {
        return None;
    }
    Some(vec![
        Segment::text(format!("{} endret fra", &caps[1])),
        Segment::badge(Badge::Currency { amount: from }),
        Segment::text("til"),
        Segment::badge(Badge::Currency { amount: to }),
    ])
}

static PERCENT_CHANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Ferdigstillelse|Sannsynlighet) endret fra (\d+) til (\d+)$").unwrap()
});

fn percent_change(body: &str) -> Option<Vec<Segment>> {
    let caps = PERCENT_CHANGE.captures(body)?;
    let from: i64 = caps[2].parse().ok()?;
    let to: i64 = caps[3].parse().ok()?;
    Some(vec![
        Segment::text(format!("{} endret fra", &caps[1])),
        Segment::badge(Badge::Percent { value: from }),
        Segment::text("til"),
        Segment::badge(Badge::Percent { value: to }),
    ])
}

static PROJECT_PHASE_CHANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Prosjektfase endret fra '([^']+)' til '([^']+)'$").unwrap());

fn project_phase_change(body: &str) -> Option<Vec<Segment>> {
    let caps = PROJECT_PHASE_CHANGE.captures(body)?;
    Some(vec![
        Segment::text("Prosjektfase endret fra"),
        Segment::badge(Badge::ProjectPhase {
            key: caps[1].to_lowercase(),
        }),
        Segment::text("til"),
        Segment::badge(Badge::ProjectPhase {
            key: caps[2].to_lowercase(),
        }),
    ])
}

static QUOTED_CHANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?) endret fra '([^']*)' til '([^']*)'$").unwrap());

fn value_badge(raw: &str) -> Badge {
    if raw.is_empty() {
        Badge::Empty
    } else {
        Badge::Plain {
            value: raw.to_string(),
        }
    }
}

// Catch-all for any other field change the backend phrases with quotes.
fn quoted_value_change(body: &str) -> Option<Vec<Segment>> {
    let caps = QUOTED_CHANGE.captures(body)?;
    Some(vec![
        Segment::text(format!("{} endret fra", &caps[1])),
        Segment::badge(value_badge(&caps[2])),
        Segment::text("til"),
        Segment::badge(value_badge(&caps[3])),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badges(segments: &[Segment]) -> Vec<&Badge> {
        segments
            .iter()
            .filter_map(|s| match s {
                Segment::Badge { badge } => Some(badge),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_body_renders_placeholder() {
        assert_eq!(
            interpret_body(""),
            vec![Segment::text(EMPTY_BODY_PLACEHOLDER)]
        );
    }

    #[test]
    fn unmatched_body_renders_verbatim() {
        let body = "Kommentar lagt til av Kari";
        assert_eq!(interpret_body(body), vec![Segment::text(body)]);
    }

    #[test]
    fn parenthesized_phase_transition_drops_trailing_text() {
        let segments = interpret_body("Tilbud oppdatert (fase: sent -> won) av Ola");
        assert_eq!(
            segments,
            vec![
                Segment::text("Tilbud oppdatert"),
                Segment::phase("sent"),
                Segment::Arrow,
                Segment::phase("won"),
            ]
        );
    }

    #[test]
    fn parenthesized_phase_transition_accepts_unicode_arrow() {
        let segments = interpret_body("Oppdatert (fase: draft → sent)");
        assert_eq!(badges(&segments).len(), 2);
        assert_eq!(segments[2], Segment::Arrow);
    }

    #[test]
    fn inline_phase_transition_preserves_trailing_text() {
        let segments = interpret_body("Status fase: sent -> won etter befaring");
        assert_eq!(
            segments,
            vec![
                Segment::text("Status"),
                Segment::phase("sent"),
                Segment::Arrow,
                Segment::phase("won"),
                Segment::text("etter befaring"),
            ]
        );
    }

    #[test]
    fn phase_keys_are_lowercased() {
        let segments = interpret_body("Oppdatert (fase: Sent -> Won)");
        assert_eq!(
            badges(&segments),
            vec![
                &Badge::Phase {
                    key: "sent".to_string()
                },
                &Badge::Phase {
                    key: "won".to_string()
                },
            ]
        );
    }

    #[test]
    fn reopen_phrase_keeps_prefix_in_leading_text() {
        let segments = interpret_body("Tilbud gjenåpnet fra lost til sent");
        assert_eq!(
            segments,
            vec![
                Segment::text("Tilbud gjenåpnet fra"),
                Segment::phase("lost"),
                Segment::text("til"),
                Segment::phase("sent"),
            ]
        );
    }

    #[test]
    fn health_change_with_known_keys() {
        let segments = interpret_body("Helse endret fra 'on_track' til 'at_risk'");
        assert_eq!(
            badges(&segments),
            vec![
                &Badge::Health {
                    status: HealthStatus::OnTrack
                },
                &Badge::Health {
                    status: HealthStatus::AtRisk
                },
            ]
        );
    }

    #[test]
    fn health_change_with_unknown_key_falls_through_to_generic_rule() {
        let segments = interpret_body("Helse endret fra 'bogus' til 'at_risk'");
        assert_eq!(
            badges(&segments),
            vec![
                &Badge::Plain {
                    value: "bogus".to_string()
                },
                &Badge::Plain {
                    value: "at_risk".to_string()
                },
            ]
        );
    }

    #[test]
    fn currency_change_requires_one_side_at_least_thousand() {
        // Both below 1000 and unquoted: no rule matches, verbatim fallback.
        let body = "Fakturert endret fra 500 til 800";
        assert_eq!(interpret_body(body), vec![Segment::text(body)]);
    }

    #[test]
    fn currency_change_formats_both_sides_as_amounts() {
        let segments = interpret_body("Fakturert endret fra 980000.00 til 12000000.00");
        assert_eq!(
            segments,
            vec![
                Segment::text("Fakturert endret fra"),
                Segment::badge(Badge::Currency { amount: 980000.0 }),
                Segment::text("til"),
                Segment::badge(Badge::Currency { amount: 12000000.0 }),
            ]
        );
    }

    #[test]
    fn percent_change_only_fires_below_currency_threshold() {
        let segments = interpret_body("Sannsynlighet endret fra 50 til 80");
        assert_eq!(
            badges(&segments),
            vec![&Badge::Percent { value: 50 }, &Badge::Percent { value: 80 }]
        );
    }

    #[test]
    fn completion_change_renders_percent_badges() {
        let segments = interpret_body("Ferdigstillelse endret fra 35 til 60");
        assert_eq!(
            badges(&segments),
            vec![&Badge::Percent { value: 35 }, &Badge::Percent { value: 60 }]
        );
    }

    #[test]
    fn project_phase_change_renders_project_phase_badges() {
        let segments = interpret_body("Prosjektfase endret fra 'planning' til 'execution'");
        assert_eq!(
            badges(&segments),
            vec![
                &Badge::ProjectPhase {
                    key: "planning".to_string()
                },
                &Badge::ProjectPhase {
                    key: "execution".to_string()
                },
            ]
        );
    }

    #[test]
    fn generic_quoted_change_uses_placeholder_for_empty_values() {
        let segments = interpret_body("Ansvarlig endret fra '' til 'Kari Nordmann'");
        assert_eq!(
            segments,
            vec![
                Segment::text("Ansvarlig endret fra"),
                Segment::badge(Badge::Empty),
                Segment::text("til"),
                Segment::badge(Badge::Plain {
                    value: "Kari Nordmann".to_string()
                }),
            ]
        );
    }

    #[test]
    fn cleaned_number_parsing() {
        assert_eq!(parse_cleaned_number("980000.00"), Some(980000.0));
        assert_eq!(parse_cleaned_number("kr 1500"), Some(1500.0));
        assert_eq!(parse_cleaned_number("-250"), Some(-250.0));
        assert_eq!(parse_cleaned_number("abc"), None);
    }
}
