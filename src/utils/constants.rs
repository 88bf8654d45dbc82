/// Station metadata for the synthetic São José dos Campos station
pub const STATION_ID: &str = "A207";
pub const STATION_NAME: &str = "SAO JOSE DOS CAMPOS";
pub const STATION_STATE: &str = "SP";
pub const STATION_REGION: &str = "SE";
pub const STATION_LATITUDE: f64 = -23.2237;
pub const STATION_LONGITUDE: f64 = -45.9009;
pub const STATION_ALTITUDE: f64 = 629.0;

/// Batch defaults
pub const DEFAULT_FIRST_YEAR: i32 = 2020;
pub const DEFAULT_LAST_YEAR: i32 = 2024;
pub const DEFAULT_AS_OF: (i32, u32, u32) = (2024, 8, 11);
pub const DEFAULT_SEED: u64 = 42;

/// Output locations
pub const OUTPUT_DIR: &str = "data";
pub const FILE_PREFIX: &str = "inmet_data";
pub const COMBINED_SUFFIX: &str = "combined";
pub const CSV_EXTENSION: &str = "csv";

/// Hour of the single synthesized reading
pub const RECORD_HOUR: u32 = 12;

/// Seasonal model
pub const SEASON_PHASE_DAY: f64 = 80.0;
pub const SEASON_PERIOD_DAYS: f64 = 365.0;

pub const BASE_TEMP: f64 = 20.0;
pub const TEMP_AMPLITUDE: f64 = 8.0;
pub const TEMP_SPREAD_MEAN: f64 = 5.0;
pub const TEMP_SPREAD_STD: f64 = 2.0;

pub const BASE_HUMIDITY: f64 = 60.0;
pub const HUMIDITY_AMPLITUDE: f64 = 20.0;
pub const HUMIDITY_NOISE_STD: f64 = 10.0;
pub const MIN_HUMIDITY: f64 = 30.0;
pub const MAX_HUMIDITY: f64 = 95.0;

pub const BASE_PRECIP_PROBABILITY: f64 = 0.3;
pub const PRECIP_PROBABILITY_AMPLITUDE: f64 = 0.2;
pub const PRECIP_MEAN_MM: f64 = 5.0;

pub const WIND_GAMMA_SHAPE: f64 = 2.0;
pub const WIND_GAMMA_SCALE: f64 = 2.0;

pub const BASE_PRESSURE: f64 = 1013.0;
pub const PRESSURE_NOISE_STD: f64 = 10.0;
