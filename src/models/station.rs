use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::constants::{
    STATION_ALTITUDE, STATION_ID, STATION_LATITUDE, STATION_LONGITUDE, STATION_NAME,
    STATION_REGION, STATION_STATE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StationMetadata {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub name: String,

    pub state: String,

    pub region: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub altitude: f64,
}

impl StationMetadata {
    pub fn new(
        id: String,
        name: String,
        state: String,
        region: String,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Self {
        Self {
            id,
            name,
            state,
            region,
            latitude,
            longitude,
            altitude,
        }
    }

    /// The station reported under a different display name
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    /// Lowercase, underscore-joined name used in output file names
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl Default for StationMetadata {
    fn default() -> Self {
        Self::new(
            STATION_ID.to_string(),
            STATION_NAME.to_string(),
            STATION_STATE.to_string(),
            STATION_REGION.to_string(),
            STATION_LATITUDE,
            STATION_LONGITUDE,
            STATION_ALTITUDE,
        )
    }
}
