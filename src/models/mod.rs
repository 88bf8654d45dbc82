pub mod observation;
pub mod station;

pub use observation::{seasonal_signal, DailyDraws, DailyObservation};
pub use station::StationMetadata;
