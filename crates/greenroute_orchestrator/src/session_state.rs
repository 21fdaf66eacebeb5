use greenroute_service::{OptimizationResult, VehicleProfile};
use greenroute_traffic::{DeliveryTime, GeoPoint};

use crate::optimization_log::OptimizationLog;

/// Everything one planning session holds. Only the orchestrator mutates it,
/// observers get read access or a clone.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub(crate) locations: Vec<GeoPoint>,
    pub(crate) vehicle_profile: VehicleProfile,
    pub(crate) delivery_time: DeliveryTime,
    pub(crate) log: OptimizationLog,
    pub(crate) result: Option<OptimizationResult>,
    pub(crate) is_optimizing: bool,
}

impl SessionState {
    /// Candidate stops, in the order they were selected
    pub fn locations(&self) -> &[GeoPoint] {
        &self.locations
    }

    pub fn vehicle_profile(&self) -> VehicleProfile {
        self.vehicle_profile
    }

    pub fn delivery_time(&self) -> DeliveryTime {
        self.delivery_time
    }

    pub fn log(&self) -> &OptimizationLog {
        &self.log
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        self.result.as_ref()
    }

    pub fn is_optimizing(&self) -> bool {
        self.is_optimizing
    }
}
