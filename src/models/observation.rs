use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use validator::Validate;

use crate::error::{GenerationError, Result};
use crate::models::StationMetadata;
use crate::utils::constants::{
    BASE_HUMIDITY, BASE_PRESSURE, BASE_TEMP, HUMIDITY_AMPLITUDE, MAX_HUMIDITY, MIN_HUMIDITY,
    RECORD_HOUR, SEASON_PERIOD_DAYS, SEASON_PHASE_DAY, TEMP_AMPLITUDE,
};
use crate::utils::rounding::{one_decimal, round_to_tenth};

/// One synthesized day, serialized with the INMET column names in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DailyObservation {
    #[serde(rename = "DATA")]
    pub date: NaiveDate,

    #[serde(rename = "HORA", with = "hour_minute")]
    pub time_of_record: NaiveTime,

    #[serde(rename = "ESTACAO")]
    #[validate(length(min = 1))]
    pub station_id: String,

    #[serde(rename = "NOME_DA_ESTACAO")]
    pub station_name: String,

    #[serde(rename = "UF")]
    pub state_code: String,

    #[serde(rename = "REGIAO")]
    pub region_code: String,

    #[serde(rename = "LATITUDE")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[serde(rename = "LONGITUDE")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[serde(rename = "ALTITUDE")]
    pub altitude: f64,

    // Temperatures in °C
    #[serde(rename = "TEMPERATURA_MAXIMA", with = "one_decimal")]
    pub temp_max: f64,

    #[serde(rename = "TEMPERATURA_MINIMA", with = "one_decimal")]
    pub temp_min: f64,

    #[serde(rename = "TEMPERATURA_MEDIA", with = "one_decimal")]
    pub temp_avg: f64,

    // Relative humidity in %
    #[serde(rename = "UMIDADE_RELATIVA", with = "one_decimal")]
    #[validate(range(min = 30.0, max = 95.0))]
    pub humidity: f64,

    // Precipitation in mm
    #[serde(rename = "PRECIPITACAO", with = "one_decimal")]
    #[validate(range(min = 0.0))]
    pub precipitation: f64,

    #[serde(rename = "VELOCIDADE_VENTO", with = "one_decimal")]
    #[validate(range(min = 0.0))]
    pub wind_speed: f64,

    // Pressure in hPa
    #[serde(rename = "PRESSAO_ATMOSFERICA", with = "one_decimal")]
    pub pressure: f64,
}

/// Random inputs consumed for a single day, in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyDraws {
    pub max_spread: f64,
    pub min_spread: f64,
    pub humidity_noise: f64,
    /// Zero on dry days
    pub precipitation: f64,
    pub wind_speed: f64,
    pub pressure_noise: f64,
}

/// Seasonal signal in [-1, 1] shared by temperature, humidity and rain probability.
pub fn seasonal_signal(date: NaiveDate) -> f64 {
    let day_of_year = date.ordinal() as f64;
    (2.0 * PI * (day_of_year - SEASON_PHASE_DAY) / SEASON_PERIOD_DAYS).sin()
}

impl DailyObservation {
    /// Derive the day's fields from its draws.
    ///
    /// `temp_avg` is taken from the unrounded extremes, so it can differ by
    /// 0.1 from the mean of the rounded `temp_max` and `temp_min`.
    pub fn from_draws(date: NaiveDate, station: &StationMetadata, draws: &DailyDraws) -> Self {
        let season = seasonal_signal(date);
        let base_temp = BASE_TEMP + TEMP_AMPLITUDE * season;

        let temp_max = base_temp + draws.max_spread;
        let temp_min = base_temp - draws.min_spread;
        let temp_avg = (temp_max + temp_min) / 2.0;

        let humidity = (BASE_HUMIDITY + HUMIDITY_AMPLITUDE * season + draws.humidity_noise)
            .clamp(MIN_HUMIDITY, MAX_HUMIDITY);

        let pressure = BASE_PRESSURE + draws.pressure_noise;

        Self {
            date,
            time_of_record: record_time(),
            station_id: station.id.clone(),
            station_name: station.name.clone(),
            state_code: station.state.clone(),
            region_code: station.region.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            altitude: station.altitude,
            temp_max: round_to_tenth(temp_max),
            temp_min: round_to_tenth(temp_min),
            temp_avg: round_to_tenth(temp_avg),
            humidity: round_to_tenth(humidity),
            precipitation: round_to_tenth(draws.precipitation),
            wind_speed: round_to_tenth(draws.wind_speed),
            pressure: round_to_tenth(pressure),
        }
    }

    /// Range checks plus the avg/extremes consistency check.
    ///
    /// `temp_min > temp_max` is accepted: the extremes are drawn independently.
    pub fn validate_relationships(&self) -> Result<()> {
        // Rounding the average separately allows one tenth of drift
        let tolerance = 0.1 + 1e-9;
        let midpoint = (self.temp_max + self.temp_min) / 2.0;

        if (self.temp_avg - midpoint).abs() > tolerance {
            return Err(GenerationError::Observation {
                date: self.date.to_string(),
                message: format!(
                    "Avg temperature {} is not the midpoint of {} and {}",
                    self.temp_avg, self.temp_max, self.temp_min
                ),
            });
        }

        self.validate()?;
        Ok(())
    }

    pub fn is_dry(&self) -> bool {
        self.precipitation == 0.0
    }

    pub fn temperature_range(&self) -> f64 {
        self.temp_max - self.temp_min
    }
}

fn record_time() -> NaiveTime {
    NaiveTime::from_hms_opt(RECORD_HOUR, 0, 0).unwrap_or_default()
}

/// `HH:MM` rendering for the record time column.
mod hour_minute {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
