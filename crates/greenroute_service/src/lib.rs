pub mod error;
pub mod optimization_api;
pub mod optimization_result;
pub mod optimization_service;
pub mod optimize_request;
pub mod service_config;
pub mod vehicle_profile;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::ServiceError;
pub use optimization_api::OptimizationApiClient;
pub use optimization_result::{InputFeatures, OptimizationResult, ShortestRouteComparison};
pub use optimization_service::OptimizationService;
pub use optimize_request::OptimizeRequest;
pub use service_config::ServiceConfig;
pub use vehicle_profile::{FuelType, VehicleProfile, VehicleType};
