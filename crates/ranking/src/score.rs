//! Best-value scoring.
//!
//! A score blends the offer's price and outbound duration after normalizing
//! each to [0, 1] over the batch being ranked. Lower is better: the
//! relatively cheap and relatively fast offers score near 0.

use offer_data::{min_max, FlightOffer};
use rayon::prelude::*;

/// Weight of the normalized price component. Fixed design constant, not
/// user-configurable.
pub const PRICE_WEIGHT: f64 = 0.6;
/// Weight of the normalized duration component.
pub const DURATION_WEIGHT: f64 = 0.4;

/// Best-value score per offer, in batch order. Lower ranks first.
///
/// Scores are relative to the batch passed in, not some unfiltered universe:
/// min/max are computed once over `offers` up front, never per comparison.
/// When every offer shares one price (or duration) that component is 0 for
/// all of them. An offer whose price does not parse gets the worst price
/// component in the batch.
pub fn best_value_scores(offers: &[FlightOffer]) -> Vec<f64> {
    if offers.is_empty() {
        return Vec::new();
    }

    let prices: Vec<Option<f64>> = offers.iter().map(|offer| offer.price_total()).collect();
    let durations: Vec<f64> = offers
        .iter()
        .map(|offer| f64::from(offer.outbound_minutes()))
        .collect();

    let known_prices: Vec<f64> = prices.iter().flatten().copied().collect();
    let price_bounds = min_max(&known_prices);
    let duration_bounds = min_max(&durations);

    prices
        .par_iter()
        .zip(durations.par_iter())
        .map(|(price, &duration)| {
            let price_component = match (price, price_bounds) {
                (Some(price), Some((lo, hi))) => normalize(*price, lo, hi),
                (None, Some(_)) => 1.0,
                _ => 0.0,
            };
            let duration_component = match duration_bounds {
                Some((lo, hi)) => normalize(duration, lo, hi),
                None => 0.0,
            };
            PRICE_WEIGHT * price_component + DURATION_WEIGHT * duration_component
        })
        .collect()
}

/// Position of `value` within [lo, hi]; 0 when the range is degenerate.
fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        (value - lo) / (hi - lo)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offer_data::{Itinerary, LocationTime, Price, Segment};

    fn offer(id: &str, total: &str, duration: &str) -> FlightOffer {
        FlightOffer {
            id: id.to_string(),
            one_way: false,
            number_of_bookable_seats: 1,
            itineraries: vec![Itinerary {
                duration: duration.to_string(),
                segments: vec![Segment {
                    departure: LocationTime {
                        iata_code: "AAA".to_string(),
                        at: "2025-08-01T08:00:00".to_string(),
                    },
                    arrival: LocationTime {
                        iata_code: "BBB".to_string(),
                        at: "2025-08-01T12:00:00".to_string(),
                    },
                    carrier_code: "BA".to_string(),
                    number: None,
                    duration: None,
                }],
            }],
            price: Price {
                currency: "USD".to_string(),
                total: total.to_string(),
                base: None,
                grand_total: None,
            },
        }
    }

    #[test]
    fn test_single_offer_scores_zero() {
        let scores = best_value_scores(&[offer("only", "500.00", "PT5H")]);
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_extremes_score_zero_and_one() {
        // Cheapest and fastest at once scores 0; priciest and slowest scores 1
        let offers = vec![
            offer("best", "300.00", "PT2H"),
            offer("worst", "800.00", "PT8H"),
        ];
        let scores = best_value_scores(&offers);
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_are_sixty_forty() {
        // Middle offer: price halfway, duration at the max
        let offers = vec![
            offer("a", "300.00", "PT2H"),
            offer("b", "550.00", "PT8H"),
            offer("c", "800.00", "PT2H"),
        ];
        let scores = best_value_scores(&offers);
        // 0.6 * 0.5 + 0.4 * 1.0
        assert!((scores[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_shared_price_contributes_nothing() {
        let offers = vec![
            offer("slow", "400.00", "PT9H"),
            offer("fast", "400.00", "PT3H"),
        ];
        let scores = best_value_scores(&offers);
        assert!((scores[0] - DURATION_WEIGHT).abs() < 1e-12);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_unparseable_price_gets_worst_component() {
        let offers = vec![
            offer("cheap", "300.00", "PT4H"),
            offer("broken", "N/A", "PT4H"),
            offer("mid", "450.00", "PT4H"),
            offer("pricey", "600.00", "PT4H"),
        ];
        let scores = best_value_scores(&offers);
        // Shared duration contributes nothing, so the broken price scores
        // the full price weight, tied with the batch maximum
        assert!((scores[1] - PRICE_WEIGHT).abs() < 1e-12);
        assert!(scores[1] > scores[2]);
        assert!((scores[1] - scores[3]).abs() < 1e-12);
    }

    #[test]
    fn test_empty_batch() {
        assert!(best_value_scores(&[]).is_empty());
    }
}
