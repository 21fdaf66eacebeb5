use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::ClassifierConfigError, traffic_level::TrafficLevel, traffic_schedule::TrafficSchedule,
    urban_area::UrbanArea,
};

/// Data driving the traffic classifier: which areas count as urban, how
/// tightly grouped stops must be to count as dense, and the hourly traffic
/// pattern of each area type.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub urban_areas: Vec<UrbanArea>,

    /// Spread (degrees) below which stops inside an urban area are dense
    /// urban, suburban from there on
    pub tight_spread: f64,

    /// Used when no stop is selected
    pub generic: TrafficSchedule,
    pub dense_urban: TrafficSchedule,
    pub suburban: TrafficSchedule,
    pub rural: TrafficSchedule,
}

impl ClassifierConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClassifierConfigError> {
        let path = path.as_ref();
        debug!("Loading classifier config from {}", path.display());

        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ClassifierConfigError> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClassifierConfigError> {
        let tight = self.tight_spread;
        if !tight.is_finite() || tight <= 0.0 {
            return Err(ClassifierConfigError::NonPositiveSpread(tight));
        }

        if let Some(area) = self.urban_areas.iter().find(|area| !area.is_valid()) {
            return Err(ClassifierConfigError::InvalidUrbanArea(area.name.clone()));
        }

        self.generic.validate("generic")?;
        self.dense_urban.validate("dense_urban")?;
        self.suburban.validate("suburban")?;
        self.rural.validate("rural")?;

        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        use TrafficLevel::*;

        let urban_areas = vec![
            UrbanArea::new("Bangalore", (12.7, 13.2), (77.4, 77.8)),
            UrbanArea::new("Mumbai", (18.9, 19.3), (72.7, 73.1)),
            UrbanArea::new("Delhi", (28.4, 28.8), (76.9, 77.4)),
            UrbanArea::new("Kolkata", (22.4, 22.8), (88.2, 88.5)),
            UrbanArea::new("Chennai", (12.8, 13.3), (80.1, 80.4)),
            UrbanArea::new("Hyderabad", (17.2, 17.6), (78.3, 78.6)),
            UrbanArea::new("Pune", (18.3, 18.7), (73.7, 74.0)),
            UrbanArea::new("Ahmedabad", (22.9, 23.2), (72.4, 72.7)),
            UrbanArea::new("Jaipur", (26.7, 27.1), (75.6, 76.0)),
            UrbanArea::new("Nagpur", (21.0, 21.4), (78.9, 79.2)),
            UrbanArea::new("Hubli-Dharwad", (15.2, 15.6), (75.0, 75.3)),
            UrbanArea::new("Guwahati", (26.0, 26.4), (91.6, 91.9)),
            UrbanArea::new("Coimbatore", (10.9, 11.3), (76.8, 77.2)),
            UrbanArea::new("Thiruvananthapuram", (8.3, 8.7), (76.8, 77.2)),
            UrbanArea::new("Kochi", (9.8, 10.2), (76.1, 76.5)),
            UrbanArea::new("Bhubaneswar", (20.1, 20.5), (85.7, 86.1)),
        ];

        Self {
            urban_areas,
            tight_spread: 0.3,
            generic: TrafficSchedule::new(FreeFlow)
                .with_window(5, 7, FreeFlow)
                .with_window(7, 10, Heavy)
                .with_window(10, 16, Moderate)
                .with_window(16, 19, Heavy),
            // Still some traffic at night
            dense_urban: TrafficSchedule::new(Moderate)
                .with_window(6, 10, Heavy)
                .with_window(10, 15, Moderate)
                .with_window(15, 20, Heavy),
            suburban: TrafficSchedule::new(FreeFlow)
                .with_window(6, 9, Heavy)
                .with_window(9, 16, Moderate)
                .with_window(16, 19, Heavy),
            rural: TrafficSchedule::new(FreeFlow)
                .with_window(7, 9, Moderate)
                .with_window(17, 19, Moderate),
        }
    }
}
