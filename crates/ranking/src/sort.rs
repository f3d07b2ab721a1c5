//! Sort modes and the stable ranking entry point.

use crate::score::best_value_scores;
use offer_data::{FlightOffer, OfferDataError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the visible batch is ordered. No persisted state; recomputed per
/// invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Composite of normalized price and duration, price weighted heavier
    #[default]
    Best,
    /// Ascending parsed total price
    Cheapest,
    /// Ascending outbound minutes
    Fastest,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Best => "best",
            SortMode::Cheapest => "cheapest",
            SortMode::Fastest => "fastest",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = OfferDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(SortMode::Best),
            "cheapest" => Ok(SortMode::Cheapest),
            "fastest" => Ok(SortMode::Fastest),
            _ => Err(OfferDataError::InvalidValue {
                field: "sort".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Return the batch reordered by `mode`.
///
/// The sort is stable: offers with numerically equal keys keep their input
/// order. Keys are computed once up front (decorate, sort, undecorate), so
/// best-value min/max are never recomputed inside a comparison. An offer
/// without a parseable price sorts last under `Cheapest`.
pub fn rank_offers(offers: Vec<FlightOffer>, mode: SortMode) -> Vec<FlightOffer> {
    let keys: Vec<f64> = match mode {
        SortMode::Cheapest => offers
            .iter()
            .map(|offer| offer.price_total().unwrap_or(f64::INFINITY))
            .collect(),
        SortMode::Fastest => offers
            .iter()
            .map(|offer| f64::from(offer.outbound_minutes()))
            .collect(),
        SortMode::Best => best_value_scores(&offers),
    };

    let mut decorated: Vec<(f64, FlightOffer)> = keys.into_iter().zip(offers).collect();
    decorated.sort_by(|a, b| a.0.total_cmp(&b.0));
    decorated.into_iter().map(|(_, offer)| offer).collect()
}
