use serde::{Deserialize, Serialize};

use crate::Result;

/// Activity-log entry as exported by the backend. `body` is an opaque,
/// backend-authored Norwegian sentence following one of a handful of
/// templates; the interpreter in tavle-engine classifies it for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Deserialize an activity export (JSON array of records).
pub fn parse_activities(bytes: &[u8]) -> Result<Vec<ActivityRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_defaults_to_empty_string() {
        let json = r#"[{"title": "Tilbud opprettet"}]"#;
        let records = parse_activities(json.as_bytes()).unwrap();
        assert_eq!(records[0].body, "");
    }
}
