//! Core trait for the filtering pipeline.

use anyhow::Result;
use offer_data::FlightOffer;

/// One filter predicate over a batch of offers.
///
/// Filters take ownership of the batch and return the surviving subset in
/// the same relative order. `Send + Sync` so a host that parallelizes per
/// batch can evaluate filters concurrently; implementations must be
/// read-only over each offer.
pub trait OfferFilter: Send + Sync {
    /// Name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a batch of offers.
    ///
    /// The built-in filters never fail; the `Result` is the seam for
    /// filters that consult fallible collaborators.
    fn apply(&self, offers: Vec<FlightOffer>) -> Result<Vec<FlightOffer>>;
}
