//! Filter on the parsed total price.

use crate::traits::OfferFilter;
use anyhow::Result;
use offer_data::FlightOffer;

/// Keeps offers whose `price.total` parses and lies within an inclusive range.
///
/// An offer whose amount string does not parse fails any installed price
/// filter; only the fully unconstrained default (no filter installed at all)
/// lets it through.
pub struct PriceRangeFilter {
    min: f64,
    max: f64,
}

impl PriceRangeFilter {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl OfferFilter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn apply(&self, offers: Vec<FlightOffer>) -> Result<Vec<FlightOffer>> {
        let filtered = offers
            .into_iter()
            .filter(|offer| match offer.price_total() {
                Some(price) => price >= self.min && price <= self.max,
                None => false,
            })
            .collect();
        Ok(filtered)
    }
}
