//! Human-readable labels derived from offer fields.
//!
//! These feed the presentation layer (cards, summary views) and are computed
//! from the same primitives the engines use.

/// "2h 30m" style label for a minute count.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// "Nonstop" / "1 stop" / "N stops" label for a raw stop count.
pub fn stops_label(stops: usize) -> String {
    match stops {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

/// Display name for a 2-letter carrier code.
///
/// Unknown codes fall back to "{code} Airline".
pub fn airline_name(code: &str) -> String {
    let known = match code {
        "EK" => "Emirates",
        "QR" => "Qatar Airways",
        "SQ" => "Singapore Airlines",
        "LH" => "Lufthansa",
        "BA" => "British Airways",
        "AF" => "Air France",
        "EY" => "Etihad Airways",
        "TK" => "Turkish Airlines",
        "AI" => "Air India",
        "UK" => "Vistara",
        "AA" => "American Airlines",
        "DL" => "Delta Air Lines",
        "UA" => "United Airlines",
        "CX" => "Cathay Pacific",
        _ => return format!("{code} Airline"),
    };
    known.to_string()
}
