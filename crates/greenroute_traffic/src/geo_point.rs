use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stop picked by the user. Points carry no identity of their own, they are
/// addressed by their position in the selected sequence.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,

    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<&GeoPoint> for geo::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo::Point::new(point.lon, point.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_sent_as_name() {
        let point = GeoPoint::new(12.9716, 77.5946).with_label("UB City");
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "lat": 12.9716, "lon": 77.5946, "name": "UB City" })
        );
    }

    #[test]
    fn test_missing_label() {
        let point: GeoPoint = serde_json::from_str(r#"{ "lat": 1.5, "lon": 2.5 }"#).unwrap();
        assert_eq!(point, GeoPoint::new(1.5, 2.5));
        assert_eq!(serde_json::to_string(&point).unwrap(), r#"{"lat":1.5,"lon":2.5}"#);
    }

    #[test]
    fn test_geo_point_axis_order() {
        let point: geo::Point = (&GeoPoint::new(10.0, 20.0)).into();
        assert_eq!(point.x(), 20.0);
        assert_eq!(point.y(), 10.0);
    }
}
