use chrono::{DateTime, Utc};

/// Format an RFC3339 timestamp as Norwegian relative time ("5 min siden",
/// "i går"). Unparseable input passes through unchanged.
pub fn format_relative_time(ts: &str) -> String {
    let parsed = match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return ts.to_string(),
    };

    let now = Utc::now();
    let duration = now.signed_duration_since(parsed);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "akkurat nå".to_string()
    } else if minutes < 60 {
        format!("{} min siden", minutes)
    } else if hours < 24 {
        format!("{} t siden", hours)
    } else if days == 1 {
        "i går".to_string()
    } else if days < 7 {
        format!("{} d siden", days)
    } else if days < 30 {
        format!("{} u siden", days / 7)
    } else if days < 365 {
        format!("{} mnd siden", days / 30)
    } else {
        format!("{} år siden", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_timestamp_is_just_now() {
        let ts = Utc::now().to_rfc3339();
        assert_eq!(format_relative_time(&ts), "akkurat nå");
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_relative_time("ukjent"), "ukjent");
    }

    #[test]
    fn minutes_resolution() {
        let ts = (Utc::now() - chrono::Duration::minutes(5)).to_rfc3339();
        assert_eq!(format_relative_time(&ts), "5 min siden");
    }
}
