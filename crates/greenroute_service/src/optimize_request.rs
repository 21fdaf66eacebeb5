use greenroute_traffic::{GeoPoint, TrafficLevel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vehicle_profile::{FuelType, VehicleProfile, VehicleType};

/// Body of `POST /optimize`.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct OptimizeRequest {
    pub stops: Vec<GeoPoint>,
    pub vehicle_type: VehicleType,
    pub fuel_type: FuelType,
    pub traffic_conditions: TrafficLevel,
}

impl OptimizeRequest {
    pub fn new(stops: Vec<GeoPoint>, profile: VehicleProfile, traffic: TrafficLevel) -> Self {
        Self {
            stops,
            vehicle_type: profile.vehicle_type,
            fuel_type: profile.fuel_type,
            traffic_conditions: traffic,
        }
    }
}
