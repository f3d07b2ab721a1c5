//! Ranking engine for flight offers.
//!
//! This crate provides:
//! - SortMode and the stable `rank_offers` ordering
//! - Best-value scoring over normalized price and duration
//! - Badge queries (`cheapest_of`, `best_value_of`) for the presentation layer
//!
//! ## Ordering guarantees
//! Sorting is stable: two offers with numerically equal keys keep their
//! input order. The best-value score is relative to the batch being sorted,
//! with min/max computed exactly once before the sort.
//!
//! ## Example Usage
//! ```ignore
//! use ranking::{best_value_of, cheapest_of, rank_offers, SortMode};
//!
//! let ranked = rank_offers(visible, SortMode::Best);
//! let lowest = cheapest_of(&ranked);
//! let best = best_value_of(&ranked);
//! ```

pub mod badges;
pub mod score;
pub mod sort;

// Re-export main types
pub use badges::{best_value_of, cheapest_of};
pub use score::{best_value_scores, DURATION_WEIGHT, PRICE_WEIGHT};
pub use sort::{rank_offers, SortMode};
