use serde::{Deserialize, Serialize};

/// Organizational unit of the group. The set is static; the backend
/// identifies units by these keys in every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyId {
    Bygg,
    Anlegg,
    Eiendom,
    Industri,
}

impl CompanyId {
    pub const ALL: [CompanyId; 4] = [
        CompanyId::Bygg,
        CompanyId::Anlegg,
        CompanyId::Eiendom,
        CompanyId::Industri,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            CompanyId::Bygg => "bygg",
            CompanyId::Anlegg => "anlegg",
            CompanyId::Eiendom => "eiendom",
            CompanyId::Industri => "industri",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_key() == key)
    }

    /// Display name used in tables and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            CompanyId::Bygg => "Bygg",
            CompanyId::Anlegg => "Anlegg",
            CompanyId::Eiendom => "Eiendom",
            CompanyId::Industri => "Industri",
        }
    }
}
