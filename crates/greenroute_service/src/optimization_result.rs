use greenroute_traffic::{GeoPoint, TrafficLevel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vehicle_profile::{FuelType, VehicleType};

/// Response of `POST /optimize`.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Stops in visiting order
    pub best_route: Vec<GeoPoint>,

    /// Road geometry for drawing the route
    #[serde(default)]
    pub route_waypoints: Vec<GeoPoint>,

    /// `route_mapping[i]` is the 1-based position in the submitted stops of
    /// `best_route[i]`
    pub route_mapping: Vec<usize>,

    /// Kilograms
    pub predicted_co2: f64,

    /// Kilometers
    pub total_distance: f64,

    pub input_features: InputFeatures,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortest_route_comparison: Option<ShortestRouteComparison>,
}

/// The features the emission model was fed with.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct InputFeatures {
    pub vehicle_type: VehicleType,
    pub fuel_type: FuelType,
    pub traffic_conditions: TrafficLevel,
    pub derived_engine_size: f64,
    pub derived_speed: f64,
}

/// The shortest route, when it differs from the greenest one.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct ShortestRouteComparison {
    /// 1-based, like [`OptimizationResult::route_mapping`]
    pub route_mapping: Vec<usize>,
    pub distance: f64,
    pub co2: f64,
    pub is_different_route: bool,
    pub co2_savings: f64,
    #[serde(default)]
    pub green_choice_message: Option<String>,
}

impl ShortestRouteComparison {
    /// The greenest route is longer than the shortest one but emits less.
    pub fn is_green_choice(&self) -> bool {
        self.is_different_route && self.co2_savings > 0.0
    }
}

impl OptimizationResult {
    /// Checks the payload is consistent with a request of `stop_count` stops.
    pub fn validate(&self, stop_count: usize) -> Result<(), String> {
        if !self.total_distance.is_finite() || self.total_distance < 0.0 {
            return Err(format!("invalid total distance {}", self.total_distance));
        }

        if !self.predicted_co2.is_finite() || self.predicted_co2 < 0.0 {
            return Err(format!("invalid predicted CO2 {}", self.predicted_co2));
        }

        if self.best_route.is_empty() {
            return Err(String::from("empty best route"));
        }

        if self.route_mapping.len() != self.best_route.len() {
            return Err(format!(
                "route mapping has {} entries for {} stops",
                self.route_mapping.len(),
                self.best_route.len()
            ));
        }

        check_mapping(&self.route_mapping, stop_count)?;

        if let Some(comparison) = &self.shortest_route_comparison {
            check_mapping(&comparison.route_mapping, stop_count)
                .map_err(|err| format!("shortest route {err}"))?;
        }

        Ok(())
    }

    /// Yields `(original_index, stop)` in visiting order, where
    /// `original_index` is 0-based into the submitted stops.
    ///
    /// Only meaningful on a validated result.
    pub fn ordered_stops(&self) -> impl Iterator<Item = (usize, &GeoPoint)> {
        self.route_mapping
            .iter()
            .map(|index| index.saturating_sub(1))
            .zip(self.best_route.iter())
    }
}

fn check_mapping(mapping: &[usize], stop_count: usize) -> Result<(), String> {
    match mapping
        .iter()
        .find(|&&index| index == 0 || index > stop_count)
    {
        Some(index) => Err(format!(
            "route mapping index {} out of range 1..={}",
            index, stop_count
        )),
        None => Ok(()),
    }
}
