use serde::{Deserialize, Serialize};

use super::company::CompanyId;
use crate::Result;

/// Pipeline phase of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferPhase {
    Draft,
    Sent,
    Negotiation,
    Won,
    Lost,
}

impl OfferPhase {
    pub const ALL: [OfferPhase; 5] = [
        OfferPhase::Draft,
        OfferPhase::Sent,
        OfferPhase::Negotiation,
        OfferPhase::Won,
        OfferPhase::Lost,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            OfferPhase::Draft => "draft",
            OfferPhase::Sent => "sent",
            OfferPhase::Negotiation => "negotiation",
            OfferPhase::Won => "won",
            OfferPhase::Lost => "lost",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OfferPhase::Draft => "Utkast",
            OfferPhase::Sent => "Sendt",
            OfferPhase::Negotiation => "Forhandling",
            OfferPhase::Won => "Vunnet",
            OfferPhase::Lost => "Tapt",
        }
    }
}

/// Lifecycle status of an offer record. Only active offers are listable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Active,
    Archived,
}

/// Offer record as exported by the backend list endpoint (camelCase JSON).
/// Read-only on this side; the CLI never mutates or re-uploads offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub responsible_user_name: Option<String>,
    pub phase: OfferPhase,
    pub status: OfferStatus,
    pub company_id: CompanyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Deserialize an offer export (JSON array of records).
pub fn parse_offers(bytes: &[u8]) -> Result<Vec<Offer>> {
    Ok(serde_json::from_slice(bytes)?)
}
