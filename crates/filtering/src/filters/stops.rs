//! Filter on the stop-count bucket.

use crate::traits::OfferFilter;
use anyhow::Result;
use offer_data::{FlightOffer, StopBucket};
use std::collections::HashSet;

/// Keeps offers whose outbound stop bucket is in the accepted set.
///
/// Buckets already absorb everything above one stop into `TwoPlusStops`, so
/// a 2-stop and a 4-stop itinerary are treated identically here.
pub struct StopsFilter {
    allowed: HashSet<StopBucket>,
}

impl StopsFilter {
    pub fn new(allowed: HashSet<StopBucket>) -> Self {
        Self { allowed }
    }
}

impl OfferFilter for StopsFilter {
    fn name(&self) -> &str {
        "StopsFilter"
    }

    fn apply(&self, offers: Vec<FlightOffer>) -> Result<Vec<FlightOffer>> {
        let filtered = offers
            .into_iter()
            .filter(|offer| match offer.stop_bucket() {
                Some(bucket) => self.allowed.contains(&bucket),
                None => false,
            })
            .collect();
        Ok(filtered)
    }
}
