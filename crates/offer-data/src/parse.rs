//! Defensive parsing and normalization helpers.
//!
//! Offer fields arrive as strings and may be malformed; nothing here raises
//! for a bad field. An unparseable duration contributes 0 minutes, an
//! unparseable price becomes `None`, and an unparseable timestamp buckets as
//! night. Only loading a response file can return an error.

use crate::error::{OfferDataError, Result};
use crate::types::{FlightOffer, FlightOffersResponse, TimeOfDay};
use chrono::{NaiveDateTime, Timelike};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Total minutes from an ISO-8601-like duration string ("PT2H30M", "PT45M").
///
/// Takes the first digit run followed by `H` and the first followed by `M`;
/// a missing component contributes 0, so wholly unparseable input yields 0.
pub fn parse_duration_minutes(duration: &str) -> u32 {
    let hours = first_component(duration, 'H');
    let minutes = first_component(duration, 'M');
    hours * 60 + minutes
}

/// First digit run immediately followed by `marker`; 0 when there is none.
fn first_component(s: &str, marker: char) -> u32 {
    let mut run: Option<u32> = None;
    for ch in s.chars() {
        if let Some(digit) = ch.to_digit(10) {
            run = Some(run.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        } else if ch == marker {
            if let Some(value) = run {
                return value;
            }
        } else {
            run = None;
        }
    }
    0
}

/// Parse a decimal amount string. `None` for anything that is not a
/// non-negative finite number.
pub fn parse_price(amount: &str) -> Option<f64> {
    let value: f64 = amount.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Time-of-day bucket for a local ISO date-time like "2025-08-01T06:15:00".
///
/// The provider sends local times with no offset, so the hour is read off
/// the literal date-time. A malformed timestamp buckets as night, matching
/// the fall-through the range checks would take for an out-of-range hour.
pub fn time_of_day(timestamp: &str) -> TimeOfDay {
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp.trim(), format) {
            return TimeOfDay::from_hour(parsed.hour());
        }
    }
    TimeOfDay::Night
}

/// Smallest and largest value of a batch; `None` on an empty batch.
///
/// Ranking normalization and the summary view both lean on this, so the
/// empty case is an explicit `None` the caller must guard rather than a
/// poisoned sentinel.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Load a saved flight-offers response (`{ "data": [...] }`) from disk.
pub fn load_offers(path: &Path) -> Result<Vec<FlightOffer>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => OfferDataError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => OfferDataError::Io(source),
    })?;

    let response: FlightOffersResponse =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| OfferDataError::Decode {
            path: path.display().to_string(),
            source,
        })?;

    Ok(response.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_full() {
        assert_eq!(parse_duration_minutes("PT2H30M"), 150);
        assert_eq!(parse_duration_minutes("PT11H30M"), 690);
    }

    #[test]
    fn test_parse_duration_partial_components() {
        // Absent component means zero
        assert_eq!(parse_duration_minutes("PT45M"), 45);
        assert_eq!(parse_duration_minutes("PT3H"), 180);
        assert_eq!(parse_duration_minutes("2H30M"), 150);
    }

    #[test]
    fn test_parse_duration_fallback() {
        // Unparseable input degrades to 0 rather than erroring
        assert_eq!(parse_duration_minutes("garbage"), 0);
        assert_eq!(parse_duration_minutes(""), 0);
        assert_eq!(parse_duration_minutes("PTH M"), 0);
    }

    #[test]
    fn test_parse_duration_first_match_wins() {
        assert_eq!(parse_duration_minutes("PT5H10M7H"), 310);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("550.50"), Some(550.50));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price(" 1200 "), Some(1200.0));
    }

    #[test]
    fn test_parse_price_rejects_malformed() {
        assert_eq!(parse_price("N/A"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-10.00"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("NaN"), None);
    }

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(time_of_day("2025-08-01T06:00:00"), TimeOfDay::Morning);
        assert_eq!(time_of_day("2025-08-01T05:59:59"), TimeOfDay::Night);
        assert_eq!(time_of_day("2025-08-01T12:00:00"), TimeOfDay::Afternoon);
        assert_eq!(time_of_day("2025-08-01T18:00:00"), TimeOfDay::Evening);
        assert_eq!(time_of_day("2025-08-01T21:00:00"), TimeOfDay::Night);
    }

    #[test]
    fn test_time_of_day_without_seconds() {
        assert_eq!(time_of_day("2025-08-01T09:30"), TimeOfDay::Morning);
    }

    #[test]
    fn test_time_of_day_malformed_is_night() {
        assert_eq!(time_of_day("not-a-timestamp"), TimeOfDay::Night);
        assert_eq!(time_of_day(""), TimeOfDay::Night);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[500.0, 300.0, 800.0]), Some((300.0, 800.0)));
        assert_eq!(min_max(&[42.0]), Some((42.0, 42.0)));
        assert_eq!(min_max(&[]), None);
    }
}
