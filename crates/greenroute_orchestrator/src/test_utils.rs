use std::{collections::VecDeque, time::Duration};

use greenroute_service::{
    FuelType, InputFeatures, OptimizationResult, OptimizationService, OptimizeRequest,
    ServiceError, VehicleType,
};
use greenroute_traffic::{GeoPoint, TrafficLevel};
use parking_lot::Mutex;

/// Answers with queued responses after a fixed latency and records every
/// request it receives.
pub struct ScriptedService {
    latency: Duration,
    responses: Mutex<VecDeque<Result<OptimizationResult, ServiceError>>>,
    requests: Mutex<Vec<OptimizeRequest>>,
}

impl ScriptedService {
    pub fn new(
        latency: Duration,
        responses: Vec<Result<OptimizationResult, ServiceError>>,
    ) -> Self {
        Self {
            latency,
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(latency: Duration) -> Self {
        Self::new(latency, vec![Ok(sample_result())])
    }

    pub fn failing(latency: Duration, status: u16, message: &str) -> Self {
        Self::new(
            latency,
            vec![Err(ServiceError::Api {
                status,
                message: message.to_string(),
            })],
        )
    }

    pub fn requests(&self) -> Vec<OptimizeRequest> {
        self.requests.lock().clone()
    }
}

impl OptimizationService for ScriptedService {
    async fn optimize(
        &self,
        request: &OptimizeRequest,
    ) -> Result<OptimizationResult, ServiceError> {
        self.requests.lock().push(request.clone());
        tokio::time::sleep(self.latency).await;

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Malformed("no scripted response".to_string())))
    }
}

pub fn three_stops() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(12.97, 77.59),
        GeoPoint::new(12.98, 77.60),
        GeoPoint::new(12.99, 77.61),
    ]
}

pub fn sample_result() -> OptimizationResult {
    let stops = three_stops();

    OptimizationResult {
        best_route: vec![stops[0].clone(), stops[2].clone(), stops[1].clone()],
        route_waypoints: stops.clone(),
        route_mapping: vec![1, 3, 2],
        predicted_co2: 3.1,
        total_distance: 12.4,
        input_features: InputFeatures {
            vehicle_type: VehicleType::Car,
            fuel_type: FuelType::Petrol,
            traffic_conditions: TrafficLevel::Heavy,
            derived_engine_size: 1.6,
            derived_speed: 22.0,
        },
        shortest_route_comparison: None,
    }
}
