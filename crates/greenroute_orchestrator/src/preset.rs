use std::str::FromStr;

use greenroute_traffic::GeoPoint;

/// Sample stop sets that can be loaded in one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Bangalore,
}

impl Preset {
    pub fn locations(&self) -> Vec<GeoPoint> {
        match self {
            Preset::Bangalore => vec![
                GeoPoint::new(12.8456, 77.6603).with_label("Electronic City"),
                GeoPoint::new(12.9716, 77.5946).with_label("UB City"),
                GeoPoint::new(12.9698, 77.6500).with_label("Indiranagar"),
                GeoPoint::new(12.8200, 77.7200).with_label("Sarjapur Road"),
                GeoPoint::new(12.9500, 77.7000).with_label("Marathahalli"),
                GeoPoint::new(13.0358, 77.5970).with_label("Hebbal"),
            ],
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bangalore" | "bengaluru" => Ok(Preset::Bangalore),
            other => Err(format!("Unknown preset {other:?}")),
        }
    }
}
