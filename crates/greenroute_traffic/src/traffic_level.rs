use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficLevel {
    #[serde(rename = "Free flow")]
    FreeFlow,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLevel::FreeFlow => "Free flow",
            TrafficLevel::Moderate => "Moderate",
            TrafficLevel::Heavy => "Heavy",
        }
    }
}

impl Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
