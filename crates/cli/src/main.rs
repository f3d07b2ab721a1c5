use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use filtering::{apply_filters, FlightFilters, NumericRange};
use offer_data::{
    airline_name, format_duration, load_offers, min_max, stops_label, FlightOffer, StopBucket,
    TimeOfDay,
};
use ranking::{best_value_of, cheapest_of, rank_offers, SortMode};
use std::path::PathBuf;

/// farelens - filter and rank flight offers from a saved search response
#[derive(Parser)]
#[command(name = "farelens")]
#[command(about = "Filter and rank flight offers client-side", long_about = None)]
struct Cli {
    /// Path to a flight-offers JSON response ({"data": [...]})
    #[arg(short, long)]
    offers: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and rank offers, printing one card per offer
    Rank {
        /// Sort mode: best, cheapest or fastest
        #[arg(long, default_value = "best")]
        sort: SortMode,

        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum number of cards to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Summarize a response batch (price/duration ranges, carriers, stops)
    Summary,
}

/// Filter flags; anything left unset stays unconstrained.
#[derive(Args)]
struct FilterArgs {
    /// Minimum total price
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum total price
    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum outbound duration in minutes
    #[arg(long)]
    min_duration: Option<u32>,

    /// Maximum outbound duration in minutes
    #[arg(long)]
    max_duration: Option<u32>,

    /// Accepted stop buckets (0 = nonstop, 1 = one stop, 2 = two or more)
    #[arg(long, value_delimiter = ',')]
    stops: Vec<StopBucket>,

    /// Accepted 2-letter carrier codes
    #[arg(long, value_delimiter = ',')]
    airlines: Vec<String>,

    /// Accepted departure buckets: morning, afternoon, evening, night
    #[arg(long, value_delimiter = ',')]
    depart: Vec<TimeOfDay>,

    /// Accepted arrival buckets: morning, afternoon, evening, night
    #[arg(long, value_delimiter = ',')]
    arrive: Vec<TimeOfDay>,
}

impl FilterArgs {
    fn to_filters(&self) -> FlightFilters {
        let mut filters = FlightFilters::default();

        if self.min_price.is_some() || self.max_price.is_some() {
            filters.price_range = Some(NumericRange {
                min: self.min_price.unwrap_or(0.0),
                max: self.max_price.unwrap_or(f64::MAX),
            });
        }
        if self.min_duration.is_some() || self.max_duration.is_some() {
            filters.duration = Some(NumericRange {
                min: self.min_duration.unwrap_or(0),
                max: self.max_duration.unwrap_or(u32::MAX),
            });
        }
        filters.stops = self.stops.iter().copied().collect();
        filters.airlines = self.airlines.iter().cloned().collect();
        filters.departure_time = self.depart.iter().copied().collect();
        filters.arrival_time = self.arrive.iter().copied().collect();

        filters
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let offers = load_offers(&cli.offers)
        .with_context(|| format!("Failed to load offers from {}", cli.offers.display()))?;
    tracing::debug!("Loaded {} offers from {}", offers.len(), cli.offers.display());

    match cli.command {
        Commands::Rank {
            sort,
            filters,
            limit,
        } => handle_rank(offers, sort, &filters, limit),
        Commands::Summary => handle_summary(&offers),
    }

    Ok(())
}

/// Handle the 'rank' command
fn handle_rank(offers: Vec<FlightOffer>, sort: SortMode, args: &FilterArgs, limit: usize) {
    let filters = args.to_filters();
    let visible = apply_filters(offers, &filters);

    if visible.is_empty() {
        println!("No offers match the current filters.");
        return;
    }

    let ranked = rank_offers(visible, sort);
    let cheapest_id = cheapest_of(&ranked).map(|offer| offer.id.clone());
    let best_id = best_value_of(&ranked).map(|offer| offer.id.clone());

    println!(
        "{}",
        format!("{} offers, sorted by {}", ranked.len(), sort)
            .bold()
            .blue()
    );
    println!();

    for offer in ranked.iter().take(limit) {
        let badge = if best_id.as_deref() == Some(offer.id.as_str()) {
            Some("Best Value")
        } else if cheapest_id.as_deref() == Some(offer.id.as_str()) {
            Some("Lowest Price")
        } else {
            None
        };
        print_card(offer, badge);
    }
}

/// Print one offer card plus an optional badge line
fn print_card(offer: &FlightOffer, badge: Option<&str>) {
    if let Some(badge) = badge {
        println!("{}", badge.green().bold());
    }

    let Some(itinerary) = offer.outbound() else {
        println!("{}  (no itinerary)", offer.id);
        return;
    };

    let route = match (itinerary.segments.first(), itinerary.segments.last()) {
        (Some(first), Some(last)) => format!(
            "{} {} -> {} {}",
            first.departure.iata_code,
            time_part(&first.departure.at),
            last.arrival.iata_code,
            time_part(&last.arrival.at),
        ),
        _ => format!("{} (no segments)", offer.id),
    };
    let carrier = itinerary
        .segments
        .first()
        .map(|segment| airline_name(&segment.carrier_code))
        .unwrap_or_default();
    let stops = itinerary.segments.len().saturating_sub(1);

    println!(
        "{}  {}  {}  {}  {}",
        route.bold(),
        carrier,
        format_duration(offer.outbound_minutes()),
        stops_label(stops),
        format!("{} {}", offer.price.total, offer.price.currency).yellow(),
    );
    println!();
}

/// "HH:MM" slice of a local ISO date-time, or the raw string when too short
fn time_part(at: &str) -> &str {
    match at.split_once('T') {
        Some((_, time)) => time.get(..5).unwrap_or(time),
        None => at,
    }
}

/// Handle the 'summary' command
fn handle_summary(offers: &[FlightOffer]) {
    println!(
        "{}",
        format!("{} offers in batch", offers.len()).bold().blue()
    );

    let prices: Vec<f64> = offers
        .iter()
        .filter_map(|offer| offer.price_total())
        .collect();
    if let Some((lo, hi)) = min_max(&prices) {
        println!("Price range: {lo:.2} - {hi:.2}");
    }

    let durations: Vec<f64> = offers
        .iter()
        .map(|offer| f64::from(offer.outbound_minutes()))
        .collect();
    if let Some((lo, hi)) = min_max(&durations) {
        println!(
            "Duration range: {} - {}",
            format_duration(lo as u32),
            format_duration(hi as u32)
        );
    }

    let mut carriers: Vec<&str> = offers.iter().flat_map(|offer| offer.carriers()).collect();
    carriers.sort_unstable();
    carriers.dedup();
    if !carriers.is_empty() {
        println!("Carriers:");
        for code in carriers {
            println!("  {} {}", code.cyan(), airline_name(code));
        }
    }

    let mut nonstop = 0usize;
    let mut one_stop = 0usize;
    let mut two_plus = 0usize;
    for offer in offers {
        match offer.stop_bucket() {
            Some(StopBucket::Nonstop) => nonstop += 1,
            Some(StopBucket::OneStop) => one_stop += 1,
            Some(StopBucket::TwoPlusStops) => two_plus += 1,
            None => {}
        }
    }
    println!("Stops: {nonstop} nonstop, {one_stop} one-stop, {two_plus} two-plus");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_to_filters() {
        let args = FilterArgs {
            min_price: None,
            max_price: Some(900.0),
            min_duration: None,
            max_duration: None,
            stops: vec![StopBucket::Nonstop, StopBucket::OneStop],
            airlines: vec!["EK".to_string()],
            depart: vec![TimeOfDay::Morning],
            arrive: Vec::new(),
        };

        let filters = args.to_filters();
        let range = filters.price_range.unwrap();
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 900.0);
        assert!(filters.duration.is_none());
        assert_eq!(filters.stops.len(), 2);
        assert!(filters.airlines.contains("EK"));
        assert!(filters.arrival_time.is_empty());
    }

    #[test]
    fn test_unset_args_stay_unconstrained() {
        let args = FilterArgs {
            min_price: None,
            max_price: None,
            min_duration: None,
            max_duration: None,
            stops: Vec::new(),
            airlines: Vec::new(),
            depart: Vec::new(),
            arrive: Vec::new(),
        };
        assert!(args.to_filters().is_unconstrained());
    }

    #[test]
    fn test_time_part() {
        assert_eq!(time_part("2025-08-01T06:15:00"), "06:15");
        assert_eq!(time_part("2025-08-01T06:15"), "06:15");
        assert_eq!(time_part("garbage"), "garbage");
    }
}
