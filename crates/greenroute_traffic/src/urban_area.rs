use geo::Contains;
use serde::{Deserialize, Serialize};

/// A named lat/lon rectangle around a city center.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UrbanArea {
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl UrbanArea {
    pub fn new(name: impl Into<String>, lat: (f64, f64), lon: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            min_lat: lat.0,
            max_lat: lat.1,
            min_lon: lon.0,
            max_lon: lon.1,
        }
    }

    pub fn rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::coord! { x: self.min_lon, y: self.min_lat },
            geo::coord! { x: self.max_lon, y: self.max_lat },
        )
    }

    /// Points on the boundary are outside.
    pub fn contains(&self, point: &geo::Point<f64>) -> bool {
        self.rect().contains(point)
    }

    pub fn is_valid(&self) -> bool {
        self.min_lat.is_finite()
            && self.max_lat.is_finite()
            && self.min_lon.is_finite()
            && self.max_lon.is_finite()
            && self.min_lat < self.max_lat
            && self.min_lon < self.max_lon
    }
}
