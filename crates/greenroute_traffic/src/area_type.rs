use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// How built-up the delivery area is, from most to least congested.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AreaType {
    DenseUrban,
    Suburban,
    Rural,
}

impl Display for AreaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AreaType::DenseUrban => "dense urban",
                AreaType::Suburban => "suburban",
                AreaType::Rural => "rural",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaAnalysis {
    /// Mean position of all selected stops
    pub centroid: geo::Point<f64>,

    /// Bounding box height + width, in degrees
    pub spread: f64,

    /// Name of the urban area the centroid falls in, if any
    pub urban_area: Option<String>,

    pub area_type: AreaType,
}
