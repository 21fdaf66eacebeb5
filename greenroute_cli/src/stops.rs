use std::path::PathBuf;

use clap::Args;
use greenroute_orchestrator::Preset;
use greenroute_traffic::{ClassifierConfig, DeliveryTime, GeoPoint, TrafficClassifier};

use crate::parsers;

/// Stop selection and classifier options shared by subcommands.
#[derive(Args)]
pub struct StopArgs {
    /// A stop as `lat,lon[,label]`, repeat for several stops
    #[arg(short, long = "stop", value_parser = parsers::parse_stop)]
    pub stops: Vec<GeoPoint>,

    /// Load a sample stop set (e.g. "bangalore") before the --stop values
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Delivery time of day, HH:MM
    #[arg(short, long, default_value = "09:00")]
    pub time: DeliveryTime,

    /// JSON file with urban areas, spread thresholds and traffic schedules
    #[arg(long, env = "GREENROUTE_TRAFFIC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl StopArgs {
    pub fn locations(&self) -> Vec<GeoPoint> {
        let mut locations = self.preset.map(|p| p.locations()).unwrap_or_default();
        locations.extend(self.stops.iter().cloned());
        locations
    }

    pub fn classifier(&self) -> anyhow::Result<TrafficClassifier> {
        match &self.config {
            Some(path) => Ok(TrafficClassifier::new(ClassifierConfig::from_file(path)?)?),
            None => Ok(TrafficClassifier::default()),
        }
    }
}
