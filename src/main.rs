// Hotel Room Reservation - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hotel-room-reservation --book 3 --book 5
// ```
//
// Or with random occupancy and JSON output:
//
// ```console
// $ ./target/release/hotel-room-reservation --randomize --seed 42 --book 4 --output-format json --show-snapshot
// ```

use anyhow::{Context, Result};
use clap::Parser;
use hotel_room_reservation::booking::{
    BookingEngine, BookingStatistics, LoggingConfig, LoggingGuard, OccupancySimulator,
    OccupancyStatistics,
};
use hotel_room_reservation::inventory::{generate, Hotel, HotelSnapshot};
use hotel_room_reservation::types::config::CliArgs;
use hotel_room_reservation::types::{HotelConfig, OutputFormat};
use hotel_room_reservation::Allocation;
use serde::Serialize;
use std::process;
use tracing::{error, info};

/// Outcome of one `--book` request as reported to the user
#[derive(Debug, Serialize)]
struct BookingOutcome {
    requested: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    allocation: Option<Allocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Everything a run prints in JSON mode
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    randomized_rooms: Option<usize>,
    bookings: &'a [BookingOutcome],
    statistics: &'a BookingStatistics,
    occupancy: OccupancyStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<HotelSnapshot>,
}

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match HotelConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let _guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        error!("Run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Initialize logging based on CLI flags
fn init_logging(args: &CliArgs) -> Result<LoggingGuard> {
    let guard = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: warnings only, so rejected bookings still show up
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };
    guard.map_err(|e| anyhow::anyhow!(e))
}

fn run(args: CliArgs) -> Result<()> {
    info!("Starting Hotel Room Reservation");

    let randomize = args.randomize;
    let requests = args.book.clone();
    let show_snapshot = args.show_snapshot;
    let dry_run = args.dry_run;

    // Load configuration from CLI arguments and optional config file
    let config = HotelConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let output_format = config
        .get_output_format()
        .map_err(anyhow::Error::msg)
        .context("Configuration validation failed")?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no rooms will be booked.");
        print_configuration_summary(&config);
        return Ok(());
    }

    let mut hotel = generate(&config).context("Failed to generate hotel")?;

    let randomized_rooms = if randomize {
        let mut simulator = OccupancySimulator::from_config(&config);
        let booked = simulator
            .randomize(&mut hotel, config.occupancy_probability)
            .context("Failed to randomize occupancy")?;
        Some(booked)
    } else {
        None
    };

    let mut engine = BookingEngine::from_config(&config);
    let outcomes: Vec<BookingOutcome> = requests
        .iter()
        .map(|&count| match engine.allocate(&mut hotel, count) {
            Ok(allocation) => BookingOutcome { requested: count, allocation: Some(allocation), error: None },
            Err(e) => BookingOutcome { requested: count, allocation: None, error: Some(e.to_string()) },
        })
        .collect();

    let snapshot = hotel.snapshot();
    let occupancy = OccupancyStatistics::from_snapshot(&snapshot, engine.max_book());

    match output_format {
        OutputFormat::Json => {
            let report = RunReport {
                randomized_rooms,
                bookings: &outcomes,
                statistics: engine.statistics(),
                occupancy,
                snapshot: show_snapshot.then_some(snapshot),
            };
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if let Some(booked) = randomized_rooms {
                println!("Randomized occupancy: {} of {} rooms booked", booked, hotel.total_room_count());
            }
            for outcome in &outcomes {
                print_outcome(outcome);
            }
            if show_snapshot {
                println!();
                print_snapshot(&hotel);
                println!();
                println!("{}", occupancy);
            }
            println!();
            println!("{}", engine.statistics());
        }
    }

    info!(summary = %engine.statistics().compact_summary(), "Hotel Room Reservation completed");
    Ok(())
}

fn print_outcome(outcome: &BookingOutcome) {
    match (&outcome.allocation, &outcome.error) {
        (Some(allocation), _) => {
            let rooms: Vec<String> = allocation.room_numbers().iter().map(u32::to_string).collect();
            println!(
                "Book {}: {} ({}, travel time {})",
                outcome.requested,
                rooms.join(", "),
                allocation.strategy,
                allocation.travel_cost
            );
        }
        (None, Some(error)) => println!("Book {}: rejected - {}", outcome.requested, error),
        (None, None) => println!("Book {}: no result", outcome.requested),
    }
}

/// Print floors top-down; booked rooms are shown as `--`
fn print_snapshot(hotel: &Hotel) {
    for floor in hotel.floors.iter().rev() {
        let cells: Vec<String> = floor
            .rooms
            .iter()
            .map(|room| {
                if room.booked {
                    format!("{:>4}", "--")
                } else {
                    format!("{:>4}", room.number)
                }
            })
            .collect();
        println!("Floor {:>2} |{}", floor.number, cells.join(" "));
    }
}

/// Print configuration summary
fn print_configuration_summary(config: &HotelConfig) {
    eprintln!("Configuration:");
    eprintln!("  Floors: {}", config.floor_count);
    eprintln!("  Rooms per Floor: {}", config.rooms_per_floor);
    eprintln!("  Rooms on Last Floor: {}", config.last_floor_room_count);
    eprintln!("  Total Rooms: {}", config.total_rooms());
    eprintln!("  Max Rooms per Booking: {}", config.max_book);
    eprintln!("  Occupancy Probability: {:.1}%", config.occupancy_probability * 100.0);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
}
