//! User-selected filter criteria.
//!
//! `FlightFilters` is owned and passed in by the caller on every invocation;
//! the engine never reads ambient state. Every field is optional or a set,
//! and empty means unconstrained, so `FlightFilters::default()` filters
//! nothing out.

use crate::filters::{
    AirlineFilter, ArrivalTimeFilter, DepartureTimeFilter, DurationFilter, PriceRangeFilter,
    StopsFilter,
};
use crate::pipeline::FilterPipeline;
use offer_data::{CarrierCode, StopBucket, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange<T> {
    pub min: T,
    pub max: T,
}

/// All filter criteria a user can select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightFilters {
    /// Inclusive price bounds on the parsed `price.total`
    pub price_range: Option<NumericRange<f64>>,
    /// Inclusive outbound duration bounds, in minutes
    pub duration: Option<NumericRange<u32>>,
    /// Accepted stop-count buckets; empty = unconstrained
    pub stops: HashSet<StopBucket>,
    /// Accepted carrier codes; empty = unconstrained
    pub airlines: HashSet<CarrierCode>,
    /// Accepted departure time-of-day buckets; empty = unconstrained
    pub departure_time: HashSet<TimeOfDay>,
    /// Accepted arrival time-of-day buckets; empty = unconstrained
    pub arrival_time: HashSet<TimeOfDay>,
}

impl FlightFilters {
    /// True when no criterion is active (the identity filter).
    pub fn is_unconstrained(&self) -> bool {
        self.price_range.is_none()
            && self.duration.is_none()
            && self.stops.is_empty()
            && self.airlines.is_empty()
            && self.departure_time.is_empty()
            && self.arrival_time.is_empty()
    }

    /// Build a pipeline containing one filter per active criterion.
    ///
    /// Inactive criteria contribute no stage at all, which is what makes
    /// them vacuously true.
    pub fn to_pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();

        if let Some(range) = self.price_range {
            pipeline = pipeline.add_filter(PriceRangeFilter::new(range.min, range.max));
        }
        if let Some(range) = self.duration {
            pipeline = pipeline.add_filter(DurationFilter::new(range.min, range.max));
        }
        if !self.stops.is_empty() {
            pipeline = pipeline.add_filter(StopsFilter::new(self.stops.clone()));
        }
        if !self.airlines.is_empty() {
            pipeline = pipeline.add_filter(AirlineFilter::new(self.airlines.clone()));
        }
        if !self.departure_time.is_empty() {
            pipeline = pipeline.add_filter(DepartureTimeFilter::new(self.departure_time.clone()));
        }
        if !self.arrival_time.is_empty() {
            pipeline = pipeline.add_filter(ArrivalTimeFilter::new(self.arrival_time.clone()));
        }

        pipeline
    }
}
