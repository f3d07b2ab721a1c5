//! The FilterPipeline orchestrates multiple filters.

use crate::criteria::FlightFilters;
use crate::traits::OfferFilter;
use anyhow::Result;
use offer_data::FlightOffer;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PriceRangeFilter::new(0.0, 900.0))
///     .add_filter(StopsFilter::new([StopBucket::Nonstop].into()));
///
/// let visible = pipeline.apply(offers)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn OfferFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl OfferFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the batch.
    ///
    /// Each stage receives the survivors of the previous one, so the result
    /// satisfies every filter (AND across stages) and keeps input order.
    pub fn apply(&self, offers: Vec<FlightOffer>) -> Result<Vec<FlightOffer>> {
        let mut current = offers;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply user-selected criteria to a batch of offers.
///
/// The subset keeps the batch's relative order; unconstrained criteria are
/// vacuously true, so the default `FlightFilters` returns the batch
/// unchanged. The built-in filters cannot fail; should a custom filter ever
/// error through this path the batch degrades to empty rather than
/// panicking, and the error is logged.
pub fn apply_filters(offers: Vec<FlightOffer>, filters: &FlightFilters) -> Vec<FlightOffer> {
    match filters.to_pipeline().apply(offers) {
        Ok(filtered) => filtered,
        Err(error) => {
            tracing::error!("filter pipeline failed: {error:#}");
            Vec::new()
        }
    }
}
