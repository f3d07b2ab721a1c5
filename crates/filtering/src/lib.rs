//! Filtering engine for flight offers.
//!
//! This crate provides:
//! - OfferFilter trait and one implementation per user-facing criterion
//! - FilterPipeline for composing filters
//! - FlightFilters, the all-optional criteria struct, and `apply_filters`
//!
//! ## Architecture
//! Criteria combine with AND semantics across categories and OR semantics
//! within a category (a set of accepted buckets or carriers). An empty or
//! absent criterion is vacuously true, so the default `FlightFilters` is an
//! identity. Filtering preserves input order and never invents an offer.
//!
//! ## Example Usage
//! ```ignore
//! use filtering::{apply_filters, FlightFilters, NumericRange};
//!
//! let mut filters = FlightFilters::default();
//! filters.price_range = Some(NumericRange { min: 0.0, max: 900.0 });
//! filters.airlines.insert("EK".to_string());
//!
//! let visible = apply_filters(offers, &filters);
//! ```

pub mod criteria;
pub mod filters;
pub mod pipeline;
pub mod traits;

// Re-export main types
pub use criteria::{FlightFilters, NumericRange};
pub use pipeline::{apply_filters, FilterPipeline};
pub use traits::OfferFilter;
