use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierConfigError {
    #[error("Failed to read classifier config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Tight spread must be finite and positive, got {0}")]
    NonPositiveSpread(f64),

    #[error("Urban area {0} has an empty or inverted bounding box")]
    InvalidUrbanArea(String),

    #[error("Schedule {schedule} has an invalid window [{start}, {end})")]
    InvalidWindow {
        schedule: &'static str,
        start: u8,
        end: u8,
    },

    #[error("Schedule {schedule} has overlapping windows at hour {hour}")]
    OverlappingWindows { schedule: &'static str, hour: u8 },
}

#[derive(Debug, Error)]
#[error("Invalid delivery time {input:?}, expected HH:MM")]
pub struct DeliveryTimeError {
    pub input: String,
}
