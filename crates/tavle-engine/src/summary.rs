//! Pipeline aggregates over an offer list, as shown on the dashboard.

use serde::Serialize;
use tavle_types::{Offer, OfferPhase};

#[derive(Debug, Clone, Serialize)]
pub struct PhaseSlice {
    pub phase: OfferPhase,
    pub count: usize,
    pub total_value: f64,
    /// Value weighted by win probability (missing probability counts as 0).
    pub weighted_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub offer_count: usize,
    pub total_value: f64,
    pub weighted_value: f64,
    pub phases: Vec<PhaseSlice>,
}

/// Aggregate the given offers per phase, in pipeline order. Phases with no
/// offers are omitted. The caller decides what is in scope; list-view
/// exclusions are not re-applied here.
pub fn summarize_offers(offers: &[Offer]) -> PipelineSummary {
    let mut phases = Vec::new();
    let mut total_value = 0.0;
    let mut weighted_value = 0.0;

    for phase in OfferPhase::ALL {
        let slice: Vec<&Offer> = offers.iter().filter(|o| o.phase == phase).collect();
        if slice.is_empty() {
            continue;
        }

        let phase_total: f64 = slice.iter().filter_map(|o| o.value).sum();
        let phase_weighted: f64 = slice
            .iter()
            .filter_map(|o| {
                let value = o.value?;
                Some(value * f64::from(o.probability.unwrap_or(0)) / 100.0)
            })
            .sum();

        total_value += phase_total;
        weighted_value += phase_weighted;
        phases.push(PhaseSlice {
            phase,
            count: slice.len(),
            total_value: phase_total,
            weighted_value: phase_weighted,
        });
    }

    PipelineSummary {
        offer_count: offers.len(),
        total_value,
        weighted_value,
        phases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavle_types::{CompanyId, OfferStatus};

    fn offer(phase: OfferPhase, value: Option<f64>, probability: Option<u8>) -> Offer {
        Offer {
            id: "o".to_string(),
            title: "Tilbud".to_string(),
            customer_name: None,
            responsible_user_name: None,
            phase,
            status: OfferStatus::Active,
            company_id: CompanyId::Bygg,
            value,
            probability,
            due_date: None,
            updated_at: None,
        }
    }

    #[test]
    fn aggregates_per_phase_in_pipeline_order() {
        let offers = vec![
            offer(OfferPhase::Won, Some(500_000.0), Some(100)),
            offer(OfferPhase::Sent, Some(1_000_000.0), Some(40)),
            offer(OfferPhase::Sent, Some(200_000.0), None),
        ];

        let summary = summarize_offers(&offers);
        assert_eq!(summary.offer_count, 3);
        assert_eq!(summary.total_value, 1_700_000.0);
        assert_eq!(summary.weighted_value, 900_000.0);

        assert_eq!(summary.phases.len(), 2);
        assert_eq!(summary.phases[0].phase, OfferPhase::Sent);
        assert_eq!(summary.phases[0].count, 2);
        assert_eq!(summary.phases[0].weighted_value, 400_000.0);
        assert_eq!(summary.phases[1].phase, OfferPhase::Won);
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        let summary = summarize_offers(&[]);
        assert_eq!(summary.offer_count, 0);
        assert!(summary.phases.is_empty());
        assert_eq!(summary.total_value, 0.0);
    }
}
