//! Core domain types for flight offers.
//!
//! These mirror the subset of the upstream flight-offers schema that the
//! engines consult: price, itineraries, segments, and the carrier/timestamp
//! fields the filter predicates read. Field names are camelCase on the wire.

use crate::error::OfferDataError;
use crate::parse;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 2-letter airline code, e.g. "EK"
pub type CarrierCode = String;

/// One bookable offer returned by the upstream provider.
///
/// The engines only consult itinerary index 0 (the outbound direction);
/// return itineraries of a round trip are carried but not separately scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    /// Unique within a single response batch
    pub id: String,
    #[serde(default)]
    pub one_way: bool,
    #[serde(default)]
    pub number_of_bookable_seats: u32,
    pub itineraries: Vec<Itinerary>,
    pub price: Price,
}

/// One direction of travel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Total elapsed time, ISO-8601-like ("PT2H30M", "PT45M", "PT3H")
    pub duration: String,
    /// Flight order = travel order; at least one segment on the wire
    pub segments: Vec<Segment>,
}

/// One flown leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub departure: LocationTime,
    pub arrival: LocationTime,
    pub carrier_code: CarrierCode,
    pub number: Option<String>,
    pub duration: Option<String>,
}

/// Airport code plus a local date-time with no offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTime {
    pub iata_code: String,
    /// ISO date-time, e.g. "2025-08-01T06:15:00"
    pub at: String,
}

/// Monetary amounts, carried as decimal strings like the provider sends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub currency: String,
    pub total: String,
    pub base: Option<String>,
    pub grand_total: Option<String>,
}

/// Top-level shape of a saved flight-offers response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffersResponse {
    pub data: Vec<FlightOffer>,
}

impl FlightOffer {
    /// Parsed total price. `None` when the amount string is malformed.
    pub fn price_total(&self) -> Option<f64> {
        parse::parse_price(&self.price.total)
    }

    /// The outbound itinerary (index 0).
    pub fn outbound(&self) -> Option<&Itinerary> {
        self.itineraries.first()
    }

    /// Outbound elapsed time in minutes; 0 when absent or unparseable.
    pub fn outbound_minutes(&self) -> u32 {
        self.outbound()
            .map(|itinerary| parse::parse_duration_minutes(&itinerary.duration))
            .unwrap_or(0)
    }

    /// Stop-count bucket of the outbound itinerary.
    pub fn stop_bucket(&self) -> Option<StopBucket> {
        self.outbound()
            .map(|itinerary| StopBucket::from_segment_count(itinerary.segments.len()))
    }

    /// Carrier codes across all outbound segments, in travel order.
    pub fn carriers(&self) -> impl Iterator<Item = &str> {
        self.outbound()
            .into_iter()
            .flat_map(|itinerary| itinerary.segments.iter().map(|s| s.carrier_code.as_str()))
    }

    /// Time-of-day bucket of the first outbound departure.
    pub fn departure_bucket(&self) -> Option<TimeOfDay> {
        self.outbound()
            .and_then(|itinerary| itinerary.segments.first())
            .map(|segment| parse::time_of_day(&segment.departure.at))
    }

    /// Time-of-day bucket of the last outbound arrival.
    pub fn arrival_bucket(&self) -> Option<TimeOfDay> {
        self.outbound()
            .and_then(|itinerary| itinerary.segments.last())
            .map(|segment| parse::time_of_day(&segment.arrival.at))
    }
}

/// Time-of-day buckets used by the departure/arrival filters.
///
/// Derived from the hour of the locally-interpreted timestamp, not the
/// airport's time zone; a known simplification carried over on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket for an hour of day (0-23). Inclusive lower, exclusive upper:
    /// morning [6,12), afternoon [12,18), evening [18,21), night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = OfferDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            "night" => Ok(TimeOfDay::Night),
            _ => Err(OfferDataError::InvalidValue {
                field: "time of day".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Stop-count buckets. Any stop count >= 2 is absorbed by `TwoPlusStops`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopBucket {
    Nonstop,
    OneStop,
    TwoPlusStops,
}

impl StopBucket {
    /// Bucket for an itinerary with the given number of segments.
    pub fn from_segment_count(segments: usize) -> Self {
        match segments.saturating_sub(1) {
            0 => StopBucket::Nonstop,
            1 => StopBucket::OneStop,
            _ => StopBucket::TwoPlusStops,
        }
    }
}

impl fmt::Display for StopBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digit = match self {
            StopBucket::Nonstop => "0",
            StopBucket::OneStop => "1",
            StopBucket::TwoPlusStops => "2",
        };
        f.write_str(digit)
    }
}

impl FromStr for StopBucket {
    type Err = OfferDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(StopBucket::Nonstop),
            "1" => Ok(StopBucket::OneStop),
            "2" => Ok(StopBucket::TwoPlusStops),
            _ => Err(OfferDataError::InvalidValue {
                field: "stops".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
