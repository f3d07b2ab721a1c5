//! Filter implementations for the offer pipeline.
//!
//! One module per user-facing criterion; all of them read only the outbound
//! itinerary (index 0).

pub mod airlines;
pub mod duration;
pub mod price;
pub mod stops;
pub mod time_of_day;

// Re-export for convenience
pub use airlines::AirlineFilter;
pub use duration::DurationFilter;
pub use price::PriceRangeFilter;
pub use stops::StopsFilter;
pub use time_of_day::{ArrivalTimeFilter, DepartureTimeFilter};
