//! Badge queries for the presentation layer.
//!
//! "Lowest Price" and "Best Value" badges are derived from the currently
//! visible batch, not the unfiltered universe, using the same primitives as
//! the ranking itself. Both queries are O(n) and answer `None` on an empty
//! batch; ties go to the earliest offer.

use crate::score::best_value_scores;
use offer_data::FlightOffer;

/// The offer with the lowest parseable price in the batch.
///
/// Offers whose amount does not parse never win the badge.
pub fn cheapest_of(offers: &[FlightOffer]) -> Option<&FlightOffer> {
    let mut best: Option<(f64, &FlightOffer)> = None;
    for offer in offers {
        let Some(price) = offer.price_total() else {
            continue;
        };
        match best {
            Some((lowest, _)) if price >= lowest => {}
            _ => best = Some((price, offer)),
        }
    }
    best.map(|(_, offer)| offer)
}

/// The offer with the lowest best-value score in the batch.
pub fn best_value_of(offers: &[FlightOffer]) -> Option<&FlightOffer> {
    let scores = best_value_scores(offers);
    let mut best: Option<(f64, usize)> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((lowest, _)) if score >= lowest => {}
            _ => best = Some((score, index)),
        }
    }
    best.map(|(_, index)| &offers[index])
}
