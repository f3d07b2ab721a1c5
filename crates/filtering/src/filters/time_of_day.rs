//! Filters on departure and arrival time-of-day buckets.
//!
//! Departure reads the first outbound segment, arrival the last one. Buckets
//! come from the locally-interpreted timestamp hour (see `offer_data::parse`).

use crate::traits::OfferFilter;
use anyhow::Result;
use offer_data::{FlightOffer, TimeOfDay};
use std::collections::HashSet;

/// Keeps offers whose first outbound departure falls in an accepted bucket.
pub struct DepartureTimeFilter {
    allowed: HashSet<TimeOfDay>,
}

impl DepartureTimeFilter {
    pub fn new(allowed: HashSet<TimeOfDay>) -> Self {
        Self { allowed }
    }
}

impl OfferFilter for DepartureTimeFilter {
    fn name(&self) -> &str {
        "DepartureTimeFilter"
    }

    fn apply(&self, offers: Vec<FlightOffer>) -> Result<Vec<FlightOffer>> {
        let filtered = offers
            .into_iter()
            .filter(|offer| match offer.departure_bucket() {
                Some(bucket) => self.allowed.contains(&bucket),
                None => false,
            })
            .collect();
        Ok(filtered)
    }
}

/// Keeps offers whose last outbound arrival falls in an accepted bucket.
pub struct ArrivalTimeFilter {
    allowed: HashSet<TimeOfDay>,
}

impl ArrivalTimeFilter {
    pub fn new(allowed: HashSet<TimeOfDay>) -> Self {
        Self { allowed }
    }
}

impl OfferFilter for ArrivalTimeFilter {
    fn name(&self) -> &str {
        "ArrivalTimeFilter"
    }

    fn apply(&self, offers: Vec<FlightOffer>) -> Result<Vec<FlightOffer>> {
        let filtered = offers
            .into_iter()
            .filter(|offer| match offer.arrival_bucket() {
                Some(bucket) => self.allowed.contains(&bucket),
                None => false,
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offer_data::{Itinerary, LocationTime, Price, Segment};

    fn offer(id: &str, legs: &[(&str, &str)]) -> FlightOffer {
        let segments = legs
            .iter()
            .map(|(depart_at, arrive_at)| Segment {
                departure: LocationTime {
                    iata_code: "AAA".to_string(),
                    at: (*depart_at).to_string(),
                },
                arrival: LocationTime {
                    iata_code: "BBB".to_string(),
                    at: (*arrive_at).to_string(),
                },
                carrier_code: "TK".to_string(),
                number: None,
                duration: None,
            })
            .collect();

        FlightOffer {
            id: id.to_string(),
            one_way: false,
            number_of_bookable_seats: 1,
            itineraries: vec![Itinerary {
                duration: "PT8H".to_string(),
                segments,
            }],
            price: Price {
                currency: "USD".to_string(),
                total: "700.00".to_string(),
                base: None,
                grand_total: None,
            },
        }
    }

    #[test]
    fn test_departure_reads_first_segment() {
        // First leg departs in the morning, second in the evening
        let connecting = offer(
            "c",
            &[
                ("2025-08-01T08:30:00", "2025-08-01T12:00:00"),
                ("2025-08-01T18:30:00", "2025-08-01T22:00:00"),
            ],
        );

        let morning = DepartureTimeFilter::new([TimeOfDay::Morning].into());
        assert_eq!(morning.apply(vec![connecting.clone()]).unwrap().len(), 1);

        let evening = DepartureTimeFilter::new([TimeOfDay::Evening].into());
        assert!(evening.apply(vec![connecting]).unwrap().is_empty());
    }

    #[test]
    fn test_arrival_reads_last_segment() {
        let connecting = offer(
            "c",
            &[
                ("2025-08-01T08:30:00", "2025-08-01T12:00:00"),
                ("2025-08-01T18:30:00", "2025-08-01T22:00:00"),
            ],
        );

        let night = ArrivalTimeFilter::new([TimeOfDay::Night].into());
        assert_eq!(night.apply(vec![connecting.clone()]).unwrap().len(), 1);

        let afternoon = ArrivalTimeFilter::new([TimeOfDay::Afternoon].into());
        assert!(afternoon.apply(vec![connecting]).unwrap().is_empty());
    }

    #[test]
    fn test_multiple_accepted_buckets() {
        let early = offer("early", &[("2025-08-01T06:00:00", "2025-08-01T09:00:00")]);
        let late = offer("late", &[("2025-08-01T23:10:00", "2025-08-02T02:00:00")]);
        let midday = offer("midday", &[("2025-08-01T13:00:00", "2025-08-01T16:00:00")]);

        let filter = DepartureTimeFilter::new([TimeOfDay::Morning, TimeOfDay::Night].into());
        let kept = filter.apply(vec![early, late, midday]).unwrap();
        let ids: Vec<&str> = kept.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }
}
