use serde::{Deserialize, Serialize};

use super::company::CompanyId;
use super::health::HealthStatus;
use crate::Result;

/// Execution phase of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    Planning,
    Execution,
    Warranty,
    Completed,
}

impl ProjectPhase {
    pub const ALL: [ProjectPhase; 4] = [
        ProjectPhase::Planning,
        ProjectPhase::Execution,
        ProjectPhase::Warranty,
        ProjectPhase::Completed,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            ProjectPhase::Planning => "planning",
            ProjectPhase::Execution => "execution",
            ProjectPhase::Warranty => "warranty",
            ProjectPhase::Completed => "completed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectPhase::Planning => "Planlegging",
            ProjectPhase::Execution => "Utførelse",
            ProjectPhase::Warranty => "Garanti",
            ProjectPhase::Completed => "Avsluttet",
        }
    }
}

/// Project record as exported by the backend list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub responsible_user_name: Option<String>,
    pub phase: ProjectPhase,
    pub company_id: CompanyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Deserialize a project export (JSON array of records).
pub fn parse_projects(bytes: &[u8]) -> Result<Vec<Project>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_project_with_health() {
        let json = r#"[{
            "id": "p-1",
            "name": "Fjellhallen",
            "phase": "execution",
            "companyId": "anlegg",
            "contractValue": 48000000.0,
            "completion": 35,
            "health": "at_risk",
            "updatedAt": "2024-03-01T12:00:00Z"
        }]"#;

        let projects = parse_projects(json.as_bytes()).unwrap();
        assert_eq!(projects[0].health, Some(HealthStatus::AtRisk));
        assert_eq!(projects[0].phase, ProjectPhase::Execution);
    }
}
