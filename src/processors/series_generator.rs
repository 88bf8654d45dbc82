use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, Exp, Gamma, Normal};
use tracing::{debug, warn};

use crate::error::{GenerationError, Result};
use crate::models::{seasonal_signal, DailyDraws, DailyObservation, StationMetadata};
use crate::utils::constants::{
    BASE_PRECIP_PROBABILITY, HUMIDITY_NOISE_STD, PRECIP_PROBABILITY_AMPLITUDE,
    PRECIP_MEAN_MM, PRESSURE_NOISE_STD, TEMP_SPREAD_MEAN, TEMP_SPREAD_STD, WIND_GAMMA_SCALE,
    WIND_GAMMA_SHAPE,
};

/// Produces one observation per calendar day from an explicitly passed random stream.
///
/// Each day consumes draws in a fixed order: max spread, min spread, humidity
/// noise, rain gate, rain amount (wet days only), wind, pressure noise. Two
/// streams seeded alike therefore yield identical series.
pub struct SeriesGenerator {
    station: StationMetadata,
    temp_spread: Normal<f64>,
    humidity_noise: Normal<f64>,
    rain_amount: Exp<f64>,
    wind_speed: Gamma<f64>,
    pressure_noise: Normal<f64>,
}

impl SeriesGenerator {
    pub fn new(station: StationMetadata) -> Result<Self> {
        Ok(Self {
            station,
            temp_spread: Normal::new(TEMP_SPREAD_MEAN, TEMP_SPREAD_STD)
                .map_err(|e| GenerationError::Distribution(format!("temperature spread: {}", e)))?,
            humidity_noise: Normal::new(0.0, HUMIDITY_NOISE_STD)
                .map_err(|e| GenerationError::Distribution(format!("humidity noise: {}", e)))?,
            rain_amount: Exp::new(1.0 / PRECIP_MEAN_MM)
                .map_err(|e| GenerationError::Distribution(format!("rain amount: {}", e)))?,
            wind_speed: Gamma::new(WIND_GAMMA_SHAPE, WIND_GAMMA_SCALE)
                .map_err(|e| GenerationError::Distribution(format!("wind speed: {}", e)))?,
            pressure_noise: Normal::new(0.0, PRESSURE_NOISE_STD)
                .map_err(|e| GenerationError::Distribution(format!("pressure noise: {}", e)))?,
        })
    }

    /// Generate the inclusive range `[start, end]` in ascending date order.
    ///
    /// An inverted range yields an empty series and leaves `rng` untouched.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        station_label: &str,
        rng: &mut R,
    ) -> Vec<DailyObservation> {
        if start > end {
            warn!(%start, %end, "Start date after end date, generating nothing");
            return Vec::new();
        }

        let station = self.station.with_name(station_label);
        let days = (end - start).num_days() as usize + 1;
        let mut observations = Vec::with_capacity(days);

        for date in start.iter_days().take_while(|date| *date <= end) {
            let draws = self.draw_day(date, rng);
            observations.push(DailyObservation::from_draws(date, &station, &draws));
        }

        debug!(
            station = station_label,
            %start,
            %end,
            rows = observations.len(),
            "Generated series"
        );

        observations
    }

    /// Draw one day's random inputs.
    pub fn draw_day<R: Rng + ?Sized>(&self, date: NaiveDate, rng: &mut R) -> DailyDraws {
        let max_spread = self.temp_spread.sample(rng);
        let min_spread = self.temp_spread.sample(rng);
        let humidity_noise = self.humidity_noise.sample(rng);

        let rain_probability =
            BASE_PRECIP_PROBABILITY + PRECIP_PROBABILITY_AMPLITUDE * seasonal_signal(date);
        let precipitation = if rng.random::<f64>() < rain_probability {
            self.rain_amount.sample(rng)
        } else {
            0.0
        };

        let wind_speed = self.wind_speed.sample(rng);
        let pressure_noise = self.pressure_noise.sample(rng);

        DailyDraws {
            max_spread,
            min_spread,
            humidity_noise,
            precipitation,
            wind_speed,
            pressure_noise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn generator() -> SeriesGenerator {
        SeriesGenerator::new(StationMetadata::default()).unwrap()
    }

    #[test]
    fn test_full_year_row_counts() {
        let gen = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let common = gen.generate(date(2021, 1, 1), date(2021, 12, 31), "SAO JOSE DOS CAMPOS", &mut rng);
        let leap = gen.generate(date(2020, 1, 1), date(2020, 12, 31), "SAO JOSE DOS CAMPOS", &mut rng);

        assert_eq!(common.len(), 365);
        assert_eq!(leap.len(), 366);
    }

    #[test]
    fn test_dates_are_contiguous_and_ascending() {
        let gen = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let series = gen.generate(date(2024, 2, 20), date(2024, 3, 5), "SAO JOSE DOS CAMPOS", &mut rng);

        assert_eq!(series.first().map(|o| o.date), Some(date(2024, 2, 20)));
        assert_eq!(series.last().map(|o| o.date), Some(date(2024, 3, 5)));
        for pair in series.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_single_day_range() {
        let gen = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let series = gen.generate(date(2022, 6, 1), date(2022, 6, 1), "X", &mut rng);

        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let gen = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let untouched = rng.clone();

        let series = gen.generate(date(2021, 12, 31), date(2021, 1, 1), "SAO JOSE DOS CAMPOS", &mut rng);

        assert!(series.is_empty());
        assert_eq!(rng, untouched);
    }

    #[test]
    fn test_same_seed_same_series() {
        let gen = generator();
        let mut first_rng = ChaCha8Rng::seed_from_u64(42);
        let mut second_rng = ChaCha8Rng::seed_from_u64(42);

        let first = gen.generate(date(2020, 1, 1), date(2021, 12, 31), "SAO JOSE DOS CAMPOS", &mut first_rng);
        let second = gen.generate(date(2020, 1, 1), date(2021, 12, 31), "SAO JOSE DOS CAMPOS", &mut second_rng);

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_series() {
        let gen = generator();
        let mut first_rng = ChaCha8Rng::seed_from_u64(42);
        let mut second_rng = ChaCha8Rng::seed_from_u64(43);

        let first = gen.generate(date(2021, 1, 1), date(2021, 1, 31), "SAO JOSE DOS CAMPOS", &mut first_rng);
        let second = gen.generate(date(2021, 1, 1), date(2021, 1, 31), "SAO JOSE DOS CAMPOS", &mut second_rng);

        assert_ne!(first, second);
    }

    #[test]
    fn test_split_generation_matches_single_pass() {
        // One stream threaded through consecutive ranges equals one long range
        let gen = generator();
        let mut split_rng = ChaCha8Rng::seed_from_u64(42);
        let mut whole_rng = ChaCha8Rng::seed_from_u64(42);

        let mut split = gen.generate(date(2020, 1, 1), date(2020, 12, 31), "SAO JOSE DOS CAMPOS", &mut split_rng);
        split.extend(gen.generate(date(2021, 1, 1), date(2021, 6, 30), "SAO JOSE DOS CAMPOS", &mut split_rng));
        let whole = gen.generate(date(2020, 1, 1), date(2021, 6, 30), "SAO JOSE DOS CAMPOS", &mut whole_rng);

        assert_eq!(split, whole);
    }

    #[test]
    fn test_ranges_and_relationships_hold() {
        let gen = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let series = gen.generate(date(2020, 1, 1), date(2024, 8, 11), "SAO JOSE DOS CAMPOS", &mut rng);

        for obs in &series {
            assert!((30.0..=95.0).contains(&obs.humidity), "humidity {}", obs.humidity);
            assert!(obs.precipitation >= 0.0);
            assert!(obs.wind_speed >= 0.0);
            assert!(obs.validate_relationships().is_ok(), "{:?}", obs);
        }
    }

    #[test]
    fn test_station_label_is_applied() {
        let gen = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let series = gen.generate(date(2021, 1, 1), date(2021, 1, 3), "JACAREI", &mut rng);

        assert!(series.iter().all(|o| o.station_name == "JACAREI"));
        assert!(series.iter().all(|o| o.station_id == "A207" && o.state_code == "SP"));
    }

    #[test]
    fn test_dry_days_follow_rain_season() {
        let gen = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let series = gen.generate(date(2020, 1, 1), date(2024, 12, 31), "SAO JOSE DOS CAMPOS", &mut rng);

        let dry_fraction = |lo: u32, hi: u32| {
            let window: Vec<_> = series
                .iter()
                .filter(|o| (lo..=hi).contains(&o.date.ordinal()))
                .collect();
            window.iter().filter(|o| o.is_dry()).count() as f64 / window.len() as f64
        };

        // Rain probability bottoms out near day 354 and peaks near day 171
        let low_season = dry_fraction(330, 365);
        let high_season = dry_fraction(140, 200);

        assert!(low_season > 0.75, "low season dry fraction {}", low_season);
        assert!(high_season < 0.65, "high season dry fraction {}", high_season);
    }
}
