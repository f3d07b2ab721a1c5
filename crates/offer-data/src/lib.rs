//! # Offer Data Crate
//!
//! This crate holds the flight-offer domain model and the defensive parsing
//! helpers shared by the filtering and ranking engines.
//!
//! ## Main Components
//!
//! - **types**: Wire-faithful offer types (FlightOffer, Itinerary, Segment)
//! - **parse**: Duration/price/timestamp parsing and min-max normalization
//! - **display**: Human-readable labels for durations, stops and carriers
//! - **error**: Error types for loading a saved response batch
//!
//! ## Example Usage
//!
//! ```ignore
//! use offer_data::load_offers;
//! use std::path::Path;
//!
//! let offers = load_offers(Path::new("response.json"))?;
//! for offer in &offers {
//!     println!("{}: {:?} minutes", offer.id, offer.outbound_minutes());
//! }
//! ```
//!
//! The parsing helpers never fail on malformed offer fields: an unparseable
//! duration contributes 0 minutes and an unparseable price becomes `None`.
//! Only loading and decoding a response file can return an error.

// Public modules
pub mod display;
pub mod error;
pub mod parse;
pub mod types;

// Re-export commonly used items for convenience
pub use display::{airline_name, format_duration, stops_label};
pub use error::{OfferDataError, Result};
pub use parse::{load_offers, min_max, parse_duration_minutes, parse_price, time_of_day};
pub use types::{
    // Type aliases
    CarrierCode,
    // Core types
    FlightOffer,
    FlightOffersResponse,
    Itinerary,
    LocationTime,
    Price,
    Segment,
    // Enums
    StopBucket,
    TimeOfDay,
};
