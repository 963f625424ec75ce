//! CO₂-savings arithmetic for a bike-instead-of-car trip.
//!
//! Pure functions the surrounding API combines with a trip distance from
//! the provider facade. Speeds and emission factors are city averages.

use serde::Serialize;

/// Kilograms of CO₂ a car emits per kilometre in city traffic.
pub const CO2_PER_KM_CAR_KG: f64 = 0.12;

/// Average city cycling speed.
pub const BIKE_SPEED_KPH: f64 = 15.0;

/// Average city driving speed.
pub const CAR_SPEED_KPH: f64 = 40.0;

/// Kilograms of CO₂ one tree absorbs per day.
const KG_CO2_PER_TREE: f64 = 0.021;

/// CO₂ saved by cycling `distance_km` instead of driving, in kilograms.
pub fn savings_kg(distance_km: f64) -> f64 {
    distance_km * CO2_PER_KM_CAR_KG
}

/// Render a duration in hours as a human-readable travel time.
///
/// Sub-minute precision is dropped: `0.5` becomes `"30 minutes"`, `1.0`
/// becomes `"1 hour"`, and mixed durations read `"2 hours 5 minutes"`.
pub fn format_travel_time(hours: f64) -> String {
    let minutes = (hours * 60.0) as i64;

    if minutes < 60 {
        return format!("{minutes} minutes");
    }

    let h = minutes / 60;
    let m = minutes % 60;

    let hour_part = if h == 1 {
        "1 hour".to_string()
    } else {
        format!("{h} hours")
    };

    if m == 0 {
        hour_part
    } else {
        format!("{hour_part} {m} minutes")
    }
}

/// The full set of figures the API serves for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripEstimate {
    /// Trip distance, rounded to 2 decimals.
    pub distance_km: f64,
    /// CO₂ saved, rounded to 3 decimals.
    pub co2_savings_kg: f64,
    /// CO₂ saved in whole grams.
    pub co2_saved_grams: i64,
    /// How many tree-days absorb the same CO₂, rounded to 2 decimals.
    pub equivalent_trees: f64,
    /// Cycling time, human-readable.
    pub bike_time: String,
    /// Driving time, human-readable.
    pub car_time: String,
}

impl TripEstimate {
    /// Compute every figure from a trip distance in kilometres.
    pub fn for_distance(distance_km: f64) -> Self {
        let savings = savings_kg(distance_km);

        Self {
            distance_km: round_to(distance_km, 2),
            co2_savings_kg: round_to(savings, 3),
            co2_saved_grams: (savings * 1000.0) as i64,
            equivalent_trees: round_to(savings / KG_CO2_PER_TREE, 2),
            bike_time: format_travel_time(distance_km / BIKE_SPEED_KPH),
            car_time: format_travel_time(distance_km / CAR_SPEED_KPH),
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
