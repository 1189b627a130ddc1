//! Configuration structures for the reservation engine
//!
//! This module contains the hotel configuration structure, the command line
//! arguments that override it, and the validation logic that guards the
//! inventory invariants.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of floors in the standard hotel
pub const FLOORS: usize = 10;

/// Rooms on every floor except the top one
pub const ROOMS_PER_FLOOR: usize = 10;

/// Rooms on the top (tenth) floor
pub const ROOMS_FLOOR_10: usize = 7;

/// Upper bound on rooms per booking request
pub const MAX_BOOK: usize = 5;

/// Default per-room probability used by occupancy randomization
pub const DEFAULT_OCCUPANCY_PROBABILITY: f64 = 0.3;

/// Largest room count a floor may hold while `number % 100` still recovers the position
pub const MAX_ROOMS_ON_FLOOR: usize = 99;

/// Largest floor count whose room numbers (`floor * 100 + position`) still fit in a `u32`
pub const MAX_FLOOR_COUNT: usize = ((u32::MAX - MAX_ROOMS_ON_FLOOR as u32) / 100) as usize;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-room-reservation",
    version = "0.1.0",
    about = "Hotel Room Reservation - Allocates nearby rooms from a fixed hotel inventory",
    long_about = "Allocates rooms from a fixed hotel inventory, preferring rooms on a single floor and otherwise the cheapest run of rooms across floors.

EXAMPLES:
    # Book three rooms in a fresh hotel
    hotel-room-reservation --book 3

    # Randomize occupancy reproducibly, then run two bookings
    hotel-room-reservation --randomize --seed 42 --book 4 --book 2

    # Use a configuration file
    hotel-room-reservation --config hotel.json --book 5

    # Generate configuration template
    hotel-room-reservation --print-config > hotel.json

    # Print the final room layout as JSON
    hotel-room-reservation --book 2 --output-format json --show-snapshot

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of floors in the hotel
    #[arg(long, help = "Number of floors")]
    pub floor_count: Option<usize>,

    /// Rooms on every floor except the last
    #[arg(long, help = "Rooms per floor (all floors but the last)")]
    pub rooms_per_floor: Option<usize>,

    /// Rooms on the last floor
    #[arg(long, help = "Rooms on the last floor")]
    pub last_floor_room_count: Option<usize>,

    /// Maximum rooms per booking request
    #[arg(long, help = "Maximum rooms per booking request")]
    pub max_book: Option<usize>,

    /// Per-room occupancy probability used by --randomize (0.0-1.0)
    #[arg(
        long,
        help = "Occupancy probability for --randomize (0.0-1.0)",
        long_help = "Probability that each room is marked booked when occupancy is randomized. Range: 0.0-1.0. Default: 0.3"
    )]
    pub occupancy_probability: Option<f64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format for booking results
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for booking results. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Randomize occupancy before running bookings
    #[arg(long, help = "Randomize occupancy before booking")]
    pub randomize: bool,

    /// Booking requests, executed in order
    #[arg(long, value_name = "COUNT", help = "Book COUNT rooms (repeatable)")]
    pub book: Vec<usize>,

    /// Print the final hotel snapshot
    #[arg(long, help = "Print the final room layout")]
    pub show_snapshot: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without booking
    #[arg(long, help = "Validate configuration without booking")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of floors in the hotel
    pub floor_count: Option<usize>,

    /// Rooms on every floor except the last
    pub rooms_per_floor: Option<usize>,

    /// Rooms on the last floor
    pub last_floor_room_count: Option<usize>,

    /// Maximum rooms per booking request
    pub max_book: Option<usize>,

    /// Per-room occupancy probability for randomization
    pub occupancy_probability: Option<f64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for booking results
    pub output_format: Option<String>,
}

/// Configuration for the hotel inventory and booking limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelConfig {
    /// Number of floors in the hotel
    pub floor_count: usize,

    /// Rooms on every floor except the last
    pub rooms_per_floor: usize,

    /// Rooms on the last floor
    pub last_floor_room_count: usize,

    /// Maximum rooms per booking request
    pub max_book: usize,

    /// Per-room occupancy probability for randomization (0.0-1.0)
    pub occupancy_probability: f64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for booking results
    pub output_format: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for hotel configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Floor count is invalid
    #[error("Floor count must be greater than 0, got {0}")]
    InvalidFloorCount(usize),

    /// Floor count would overflow room numbers
    #[error("Floor count must be at most {max}, got {value}")]
    FloorCountTooLarge {
        /// The rejected floor count
        value: usize,
        /// The largest accepted floor count
        max: usize,
    },

    /// Rooms per floor is invalid
    #[error("Rooms per floor must be between 1 and {max}, got {value}")]
    InvalidRoomsPerFloor {
        /// The rejected room count
        value: usize,
        /// The largest accepted room count
        max: usize,
    },

    /// Last floor room count is invalid
    #[error("Last floor room count must be between 1 and {max}, got {value}")]
    InvalidLastFloorRoomCount {
        /// The rejected room count
        value: usize,
        /// The largest accepted room count
        max: usize,
    },

    /// Maximum booking size is invalid
    #[error("Maximum rooms per booking must be greater than 0, got {0}")]
    InvalidMaxBook(usize),

    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },

    /// Output format is not recognised
    #[error("Unknown output format: {0}")]
    InvalidOutputFormat(String),
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            floor_count: FLOORS,
            rooms_per_floor: ROOMS_PER_FLOOR,
            last_floor_room_count: ROOMS_FLOOR_10,
            max_book: MAX_BOOK,
            occupancy_probability: DEFAULT_OCCUPANCY_PROBABILITY,
            seed: None,
            output_format: "text".to_string(),
        }
    }
}

impl HotelConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            floor_count: config_file.floor_count.unwrap_or(defaults.floor_count),
            rooms_per_floor: config_file.rooms_per_floor.unwrap_or(defaults.rooms_per_floor),
            last_floor_room_count: config_file
                .last_floor_room_count
                .unwrap_or(defaults.last_floor_room_count),
            max_book: config_file.max_book.unwrap_or(defaults.max_book),
            occupancy_probability: config_file
                .occupancy_probability
                .unwrap_or(defaults.occupancy_probability),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.floor_count {
            config.floor_count = value;
        }
        if let Some(value) = args.rooms_per_floor {
            config.rooms_per_floor = value;
        }
        if let Some(value) = args.last_floor_room_count {
            config.last_floor_room_count = value;
        }
        if let Some(value) = args.max_book {
            config.max_book = value;
        }
        if let Some(value) = args.occupancy_probability {
            config.occupancy_probability = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.floor_count == 0 {
            return Err(ConfigValidationError::InvalidFloorCount(self.floor_count));
        }

        if self.floor_count > MAX_FLOOR_COUNT {
            return Err(ConfigValidationError::FloorCountTooLarge {
                value: self.floor_count,
                max: MAX_FLOOR_COUNT,
            });
        }

        // A single-floor hotel only has a "last" floor
        if self.floor_count > 1 && !(1..=MAX_ROOMS_ON_FLOOR).contains(&self.rooms_per_floor) {
            return Err(ConfigValidationError::InvalidRoomsPerFloor {
                value: self.rooms_per_floor,
                max: MAX_ROOMS_ON_FLOOR,
            });
        }

        if !(1..=MAX_ROOMS_ON_FLOOR).contains(&self.last_floor_room_count) {
            return Err(ConfigValidationError::InvalidLastFloorRoomCount {
                value: self.last_floor_room_count,
                max: MAX_ROOMS_ON_FLOOR,
            });
        }

        if self.max_book == 0 {
            return Err(ConfigValidationError::InvalidMaxBook(self.max_book));
        }

        validate_percentage("occupancy_probability", self.occupancy_probability)?;

        self.get_output_format().map_err(|_| {
            ConfigValidationError::InvalidOutputFormat(self.output_format.clone())
        })?;

        Ok(())
    }

    /// Number of rooms on the given 1-indexed floor, or `None` past the top floor
    pub fn rooms_on_floor(&self, floor: usize) -> Option<usize> {
        match floor {
            0 => None,
            f if f < self.floor_count => Some(self.rooms_per_floor),
            f if f == self.floor_count => Some(self.last_floor_room_count),
            _ => None,
        }
    }

    /// Total number of rooms the configuration describes
    pub fn total_rooms(&self) -> usize {
        if self.floor_count == 0 {
            return 0;
        }
        (self.floor_count - 1) * self.rooms_per_floor + self.last_floor_room_count
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}

/// Check that a probability-like value lies in `[0.0, 1.0]`
pub fn validate_percentage(field: &str, value: f64) -> Result<(), ConfigValidationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigValidationError::InvalidPercentage {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_standard_hotel() {
        let config = HotelConfig::default();
        assert_eq!(config.floor_count, 10);
        assert_eq!(config.rooms_per_floor, 10);
        assert_eq!(config.last_floor_room_count, 7);
        assert_eq!(config.max_book, 5);
        assert_eq!(config.occupancy_probability, 0.3);
        assert_eq!(config.total_rooms(), 97);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rooms_on_floor() {
        let config = HotelConfig::default();
        assert_eq!(config.rooms_on_floor(0), None);
        assert_eq!(config.rooms_on_floor(1), Some(10));
        assert_eq!(config.rooms_on_floor(9), Some(10));
        assert_eq!(config.rooms_on_floor(10), Some(7));
        assert_eq!(config.rooms_on_floor(11), None);
    }

    #[test]
    fn test_validation_rejects_zero_floors() {
        let config = HotelConfig { floor_count: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidFloorCount(0)));
        assert_eq!(config.total_rooms(), 0);
    }

    #[test]
    fn test_validation_rejects_floor_count_past_room_number_range() {
        let config = HotelConfig { floor_count: 50_000_000, ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::FloorCountTooLarge {
                value: 50_000_000,
                max: MAX_FLOOR_COUNT,
            })
        );

        let config = HotelConfig { floor_count: MAX_FLOOR_COUNT + 1, ..Default::default() };
        assert!(config.validate().is_err());

        // The highest room on the highest accepted floor still fits
        let top = MAX_FLOOR_COUNT as u64 * 100 + MAX_ROOMS_ON_FLOOR as u64;
        assert!(top <= u64::from(u32::MAX));
        let config = HotelConfig { floor_count: MAX_FLOOR_COUNT, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_oversized_floors() {
        let config = HotelConfig { rooms_per_floor: 100, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidRoomsPerFloor { value: 100, .. })
        ));

        let config = HotelConfig { last_floor_room_count: 0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidLastFloorRoomCount { value: 0, .. })
        ));
    }

    #[test]
    fn test_single_floor_ignores_rooms_per_floor() {
        let config = HotelConfig {
            floor_count: 1,
            rooms_per_floor: 0,
            last_floor_room_count: 4,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.total_rooms(), 4);
    }

    #[test]
    fn test_validation_rejects_bad_probability_and_format() {
        let config = HotelConfig { occupancy_probability: 1.5, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidPercentage { .. })
        ));

        let config = HotelConfig { output_format: "xml".to_string(), ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidOutputFormat("xml".to_string()))
        );

        let config = HotelConfig { max_book: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxBook(0)));
    }

    #[test]
    fn test_config_file_merges_with_defaults() {
        let file = ConfigFile { floor_count: Some(4), seed: Some(9), ..Default::default() };
        let config = HotelConfig::from_config_file(file);
        assert_eq!(config.floor_count, 4);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.rooms_per_floor, ROOMS_PER_FLOOR);
        assert_eq!(config.max_book, MAX_BOOK);
    }
}
