use super::{badge, number, text, time};
use owo_colors::OwoColorize;
use std::fmt;
use tavle_engine::Badge;
use tavle_types::Offer;

pub struct OfferListView {
    offers: Vec<Offer>,
    colors: bool,
}

impl OfferListView {
    pub fn new(offers: Vec<Offer>, colors: bool) -> Self {
        Self { offers, colors }
    }
}

impl fmt::Display for OfferListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for offer in &self.offers {
            let title = text::truncate(&offer.title, 32);
            let customer = text::truncate(offer.customer_name.as_deref().unwrap_or("-"), 20);

            let phase = badge::render_badge(
                &Badge::Phase {
                    key: offer.phase.as_key().to_string(),
                },
                self.colors,
            );

            let value = offer
                .value
                .map(number::format_nok)
                .unwrap_or_else(|| "-".to_string());

            let updated = offer
                .updated_at
                .as_deref()
                .map(time::format_relative_time)
                .unwrap_or_else(|| "ukjent".to_string());
            let updated = if self.colors {
                updated.bright_black().to_string()
            } else {
                updated
            };

            writeln!(
                f,
                "{:<32}  {:<20}  {}  {}  {}",
                title, customer, phase, value, updated
            )?;
        }
        Ok(())
    }
}
