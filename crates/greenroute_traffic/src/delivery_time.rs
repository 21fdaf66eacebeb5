use std::{fmt::Display, str::FromStr};

use jiff::civil::{self, Time};

use crate::error::DeliveryTimeError;

/// Wall-clock time of day the deliveries are planned for. Only the hour
/// matters for traffic classification, minutes are kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeliveryTime(Time);

impl DeliveryTime {
    pub fn new(hour: i8, minute: i8) -> Result<Self, DeliveryTimeError> {
        Time::new(hour, minute, 0, 0)
            .map(DeliveryTime)
            .map_err(|_| DeliveryTimeError {
                input: format!("{hour:02}:{minute:02}"),
            })
    }

    pub fn hour(&self) -> u8 {
        self.0.hour() as u8
    }

    pub fn minute(&self) -> u8 {
        self.0.minute() as u8
    }
}

impl Default for DeliveryTime {
    fn default() -> Self {
        DeliveryTime(civil::time(9, 0, 0, 0))
    }
}

impl FromStr for DeliveryTime {
    type Err = DeliveryTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Time>()
            .map(DeliveryTime)
            .map_err(|_| DeliveryTimeError {
                input: s.to_string(),
            })
    }
}

impl Display for DeliveryTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nine() {
        let time = DeliveryTime::default();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 0);
        assert_eq!(time.to_string(), "09:00");
    }

    #[test]
    fn test_parse() {
        let time: DeliveryTime = "17:45".parse().unwrap();
        assert_eq!(time.hour(), 17);
        assert_eq!(time.minute(), 45);

        let time: DeliveryTime = "06:30:15".parse().unwrap();
        assert_eq!(time.to_string(), "06:30");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("25:00".parse::<DeliveryTime>().is_err());
        assert!("noon".parse::<DeliveryTime>().is_err());
        assert!(DeliveryTime::new(10, 60).is_err());
    }
}
