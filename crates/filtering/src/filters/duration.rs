//! Filter on outbound elapsed time.

use crate::traits::OfferFilter;
use anyhow::Result;
use offer_data::FlightOffer;

/// Keeps offers whose outbound itinerary duration lies within an inclusive
/// range of minutes.
///
/// An unparseable duration string counts as 0 minutes, so such an offer
/// passes any range whose lower bound is 0.
pub struct DurationFilter {
    min: u32,
    max: u32,
}

impl DurationFilter {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl OfferFilter for DurationFilter {
    fn name(&self) -> &str {
        "DurationFilter"
    }

    fn apply(&self, offers: Vec<FlightOffer>) -> Result<Vec<FlightOffer>> {
        let filtered = offers
            .into_iter()
            .filter(|offer| {
                let minutes = offer.outbound_minutes();
                minutes >= self.min && minutes <= self.max
            })
            .collect();
        Ok(filtered)
    }
}
