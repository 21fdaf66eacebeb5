pub mod area_type;
pub mod classifier_config;
pub mod delivery_time;
pub mod error;
pub mod geo_point;
pub mod traffic_classifier;
pub mod traffic_level;
pub mod traffic_schedule;
pub mod urban_area;

pub use area_type::{AreaAnalysis, AreaType};
pub use classifier_config::ClassifierConfig;
pub use delivery_time::DeliveryTime;
pub use error::{ClassifierConfigError, DeliveryTimeError};
pub use geo_point::GeoPoint;
pub use traffic_classifier::{TrafficClassifier, classify};
pub use traffic_level::TrafficLevel;
pub use traffic_schedule::{TrafficSchedule, TrafficWindow};
pub use urban_area::UrbanArea;
