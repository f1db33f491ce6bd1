use serde::{Deserialize, Serialize};

/// Project health as reported in status updates. Closed set: the activity
/// interpreter only treats a value change as a health change when both
/// sides resolve through [`HealthStatus::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    OnTrack,
    AtRisk,
    Delayed,
    OverBudget,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::OnTrack,
        HealthStatus::AtRisk,
        HealthStatus::Delayed,
        HealthStatus::OverBudget,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            HealthStatus::OnTrack => "on_track",
            HealthStatus::AtRisk => "at_risk",
            HealthStatus::Delayed => "delayed",
            HealthStatus::OverBudget => "over_budget",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|h| h.as_key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::OnTrack => "I rute",
            HealthStatus::AtRisk => "Risiko",
            HealthStatus::Delayed => "Forsinket",
            HealthStatus::OverBudget => "Over budsjett",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_accepts_only_known_keys() {
        assert_eq!(HealthStatus::from_key("at_risk"), Some(HealthStatus::AtRisk));
        assert_eq!(HealthStatus::from_key("bogus"), None);
        assert_eq!(HealthStatus::from_key("AT_RISK"), None);
    }
}
