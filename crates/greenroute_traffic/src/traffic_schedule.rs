use serde::{Deserialize, Serialize};

use crate::{error::ClassifierConfigError, traffic_level::TrafficLevel};

/// A half-open hour window `[start_hour, end_hour)`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TrafficWindow {
    pub start_hour: u8,
    pub end_hour: u8,
    pub level: TrafficLevel,
}

impl TrafficWindow {
    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// Traffic level per hour of the day. Hours not covered by any window fall
/// back to `otherwise`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TrafficSchedule {
    #[serde(default)]
    pub windows: Vec<TrafficWindow>,
    pub otherwise: TrafficLevel,
}

impl TrafficSchedule {
    pub fn new(otherwise: TrafficLevel) -> Self {
        Self {
            windows: Vec::new(),
            otherwise,
        }
    }

    pub fn with_window(mut self, start_hour: u8, end_hour: u8, level: TrafficLevel) -> Self {
        self.windows.push(TrafficWindow {
            start_hour,
            end_hour,
            level,
        });
        self
    }

    pub fn level_at(&self, hour: u8) -> TrafficLevel {
        self.windows
            .iter()
            .find(|window| window.contains(hour))
            .map_or(self.otherwise, |window| window.level)
    }

    pub(crate) fn validate(&self, schedule: &'static str) -> Result<(), ClassifierConfigError> {
        for window in &self.windows {
            if window.start_hour >= window.end_hour || window.end_hour > 24 {
                return Err(ClassifierConfigError::InvalidWindow {
                    schedule,
                    start: window.start_hour,
                    end: window.end_hour,
                });
            }
        }

        for hour in 0..24 {
            if self.windows.iter().filter(|w| w.contains(hour)).count() > 1 {
                return Err(ClassifierConfigError::OverlappingWindows { schedule, hour });
            }
        }

        Ok(())
    }
}
