//! Filter on operating carriers.

use crate::traits::OfferFilter;
use anyhow::Result;
use offer_data::{CarrierCode, FlightOffer};
use std::collections::HashSet;

/// Keeps offers where any outbound segment is flown by an accepted carrier.
///
/// OR semantics within the set: one matching leg is enough, so a mixed
/// EK/FZ connection survives a filter for EK.
pub struct AirlineFilter {
    allowed: HashSet<CarrierCode>,
}

impl AirlineFilter {
    pub fn new(allowed: HashSet<CarrierCode>) -> Self {
        Self { allowed }
    }
}

impl OfferFilter for AirlineFilter {
    fn name(&self) -> &str {
        "AirlineFilter"
    }

    fn apply(&self, offers: Vec<FlightOffer>) -> Result<Vec<FlightOffer>> {
        let filtered = offers
            .into_iter()
            .filter(|offer| offer.carriers().any(|code| self.allowed.contains(code)))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offer_data::{Itinerary, LocationTime, Price, Segment};

    fn offer(id: &str, carriers: &[&str]) -> FlightOffer {
        let segments = carriers
            .iter()
            .map(|carrier| Segment {
                departure: LocationTime {
                    iata_code: "AAA".to_string(),
                    at: "2025-08-01T07:00:00".to_string(),
                },
                arrival: LocationTime {
                    iata_code: "BBB".to_string(),
                    at: "2025-08-01T09:00:00".to_string(),
                },
                carrier_code: carrier.to_string(),
                number: None,
                duration: None,
            })
            .collect();

        FlightOffer {
            id: id.to_string(),
            one_way: false,
            number_of_bookable_seats: 1,
            itineraries: vec![Itinerary {
                duration: "PT4H".to_string(),
                segments,
            }],
            price: Price {
                currency: "USD".to_string(),
                total: "500.00".to_string(),
                base: None,
                grand_total: None,
            },
        }
    }

    #[test]
    fn test_any_segment_carrier_matches() {
        let filter = AirlineFilter::new(["EK".to_string()].into());
        let offers = vec![
            offer("direct", &["EK"]),
            offer("mixed", &["FZ", "EK"]),
            offer("other", &["QR", "QR"]),
        ];

        let kept = filter.apply(offers).unwrap();
        let ids: Vec<&str> = kept.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["direct", "mixed"]);
    }

    #[test]
    fn test_no_match_excludes() {
        let filter = AirlineFilter::new(["BA".to_string(), "LH".to_string()].into());
        let kept = filter.apply(vec![offer("x", &["EK"])]).unwrap();
        assert!(kept.is_empty());
    }
}
