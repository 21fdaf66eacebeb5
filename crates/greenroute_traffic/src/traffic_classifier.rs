use std::sync::LazyLock;

use geo::{BoundingRect, Centroid};
use tracing::debug;

use crate::{
    area_type::{AreaAnalysis, AreaType},
    classifier_config::ClassifierConfig,
    delivery_time::DeliveryTime,
    error::ClassifierConfigError,
    geo_point::GeoPoint,
    traffic_level::TrafficLevel,
    traffic_schedule::TrafficSchedule,
};

static DEFAULT_CLASSIFIER: LazyLock<TrafficClassifier> = LazyLock::new(TrafficClassifier::default);

/// Classifies traffic with the built-in urban area table.
pub fn classify(time: DeliveryTime, locations: &[GeoPoint]) -> TrafficLevel {
    DEFAULT_CLASSIFIER.classify(time, locations)
}

/// Estimates the traffic level for a set of stops at a time of day.
///
/// The classifier is stateless: the output depends only on its config and
/// the `(time, locations)` pair, so callers recompute it whenever either
/// changes instead of caching it.
#[derive(Debug, Clone)]
pub struct TrafficClassifier {
    config: ClassifierConfig,
}

impl TrafficClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Returns `None` when there is no location to analyze.
    pub fn analyze_area(&self, locations: &[GeoPoint]) -> Option<AreaAnalysis> {
        let points: geo::MultiPoint<f64> =
            locations.iter().map(geo::Point::<f64>::from).collect();

        let centroid = points.centroid()?;
        let bounds = points.bounding_rect()?;
        let spread = bounds.width() + bounds.height();

        let urban_area = self
            .config
            .urban_areas
            .iter()
            .find(|area| area.contains(&centroid));

        // Only a centroid outside every urban area is rural, however wide the
        // stops are spread around a city.
        let area_type = match urban_area {
            None => AreaType::Rural,
            Some(_) if spread < self.config.tight_spread => AreaType::DenseUrban,
            Some(_) => AreaType::Suburban,
        };

        Some(AreaAnalysis {
            centroid,
            spread,
            urban_area: urban_area.map(|area| area.name.clone()),
            area_type,
        })
    }

    pub fn classify(&self, time: DeliveryTime, locations: &[GeoPoint]) -> TrafficLevel {
        let hour = time.hour();

        let Some(analysis) = self.analyze_area(locations) else {
            return self.config.generic.level_at(hour);
        };

        let level = self.schedule(analysis.area_type).level_at(hour);

        debug!(
            "Traffic: centroid = ({:.4}, {:.4}), spread = {:.4}, area = {}, hour = {} => {}",
            analysis.centroid.y(),
            analysis.centroid.x(),
            analysis.spread,
            analysis.area_type,
            hour,
            level
        );

        level
    }

    fn schedule(&self, area_type: AreaType) -> &TrafficSchedule {
        match area_type {
            AreaType::DenseUrban => &self.config.dense_urban,
            AreaType::Suburban => &self.config.suburban,
            AreaType::Rural => &self.config.rural,
        }
    }
}

impl Default for TrafficClassifier {
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: i8) -> DeliveryTime {
        DeliveryTime::new(hour, 0).unwrap()
    }

    fn bangalore_center() -> Vec<GeoPoint> {
        vec![GeoPoint::new(12.97, 77.59), GeoPoint::new(12.98, 77.60)]
    }

    #[test]
    fn test_generic_table_covers_every_hour() {
        use TrafficLevel::*;

        let expected = [
            FreeFlow, FreeFlow, FreeFlow, FreeFlow, FreeFlow, // 0-4
            FreeFlow, FreeFlow, // 5-6
            Heavy, Heavy, Heavy, // 7-9
            Moderate, Moderate, Moderate, Moderate, Moderate, Moderate, // 10-15
            Heavy, Heavy, Heavy, // 16-18
            FreeFlow, FreeFlow, FreeFlow, FreeFlow, FreeFlow, // 19-23
        ];

        for (hour, level) in expected.into_iter().enumerate() {
            assert_eq!(classify(at(hour as i8), &[]), level, "hour {hour}");
        }
    }

    #[test]
    fn test_empty_locations_at_nine_is_heavy() {
        let time: DeliveryTime = "09:00".parse().unwrap();
        assert_eq!(classify(time, &[]), TrafficLevel::Heavy);
    }

    #[test]
    fn test_dense_urban_morning_rush() {
        let classifier = TrafficClassifier::default();
        let locations = bangalore_center();

        let analysis = classifier.analyze_area(&locations).unwrap();
        assert_eq!(analysis.area_type, AreaType::DenseUrban);
        assert_eq!(analysis.urban_area.as_deref(), Some("Bangalore"));
        assert!((analysis.spread - 0.02).abs() < 1e-9);

        let time: DeliveryTime = "08:00".parse().unwrap();
        assert_eq!(classifier.classify(time, &locations), TrafficLevel::Heavy);
    }

    #[test]
    fn test_dense_urban_never_free_flow() {
        let locations = bangalore_center();

        for hour in 0..24 {
            assert_ne!(classify(at(hour), &locations), TrafficLevel::FreeFlow);
        }
    }

    #[test]
    fn test_rural_afternoon() {
        let locations = vec![GeoPoint::new(0.01, 0.01), GeoPoint::new(-0.01, 0.02)];
        let time: DeliveryTime = "14:00".parse().unwrap();

        let analysis = TrafficClassifier::default().analyze_area(&locations).unwrap();
        assert_eq!(analysis.area_type, AreaType::Rural);
        assert_eq!(analysis.urban_area, None);

        assert_eq!(classify(time, &locations), TrafficLevel::FreeFlow);
    }

    #[test]
    fn test_suburban_spread() {
        // Centroid (12.95, 77.60), spread 0.2 + 0.2
        let locations = vec![GeoPoint::new(12.85, 77.50), GeoPoint::new(13.05, 77.70)];
        let classifier = TrafficClassifier::default();

        let analysis = classifier.analyze_area(&locations).unwrap();
        assert_eq!(analysis.area_type, AreaType::Suburban);

        assert_eq!(classifier.classify(at(20), &locations), TrafficLevel::FreeFlow);
        assert_eq!(classifier.classify(at(12), &locations), TrafficLevel::Moderate);
    }

    #[test]
    fn test_bangalore_demo_is_suburban() {
        let locations = vec![
            GeoPoint::new(12.8456, 77.6603),
            GeoPoint::new(12.9716, 77.5946),
            GeoPoint::new(12.9698, 77.6500),
            GeoPoint::new(12.8200, 77.7200),
            GeoPoint::new(12.9500, 77.7000),
            GeoPoint::new(13.0358, 77.5970),
        ];

        let analysis = TrafficClassifier::default().analyze_area(&locations).unwrap();
        assert_eq!(analysis.area_type, AreaType::Suburban);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let locations = vec![
            GeoPoint::new(19.07, 72.87),
            GeoPoint::new(19.11, 72.91),
            GeoPoint::new(19.02, 72.84),
        ];

        for hour in 0..24 {
            let first = classify(at(hour), &locations);
            let second = classify(at(hour), &locations);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_area_type_is_monotonic_in_spread() {
        let classifier = TrafficClassifier::default();
        let center = (12.95, 77.60);

        let mut previous = AreaType::DenseUrban;
        for step in 0..40 {
            let half = step as f64 * 0.01;
            let locations = vec![
                GeoPoint::new(center.0 - half, center.1 - half),
                GeoPoint::new(center.0 + half, center.1 + half),
            ];

            let analysis = classifier.analyze_area(&locations).unwrap();
            assert!(
                analysis.area_type >= previous,
                "spread {} went from {:?} to {:?}",
                analysis.spread,
                previous,
                analysis.area_type
            );
            previous = analysis.area_type;
        }

        assert_eq!(previous, AreaType::Suburban);
    }

    #[test]
    fn test_wide_spread_around_city_is_suburban() {
        // Centroid (12.95, 77.60), spread 0.40 + 0.38
        let locations = vec![GeoPoint::new(12.75, 77.41), GeoPoint::new(13.15, 77.79)];
        let classifier = TrafficClassifier::default();

        let analysis = classifier.analyze_area(&locations).unwrap();
        assert!(analysis.spread > 0.5);
        assert_eq!(analysis.urban_area.as_deref(), Some("Bangalore"));
        assert_eq!(analysis.area_type, AreaType::Suburban);

        assert_eq!(classifier.classify(at(8), &locations), TrafficLevel::Heavy);
    }

    #[test]
    fn test_classification_follows_current_locations() {
        let time = at(23);
        let mut locations = bangalore_center();
        assert_eq!(classify(time, &locations), TrafficLevel::Moderate);

        locations.clear();
        locations.push(GeoPoint::new(0.0, 0.0));
        assert_eq!(classify(time, &locations), TrafficLevel::FreeFlow);
    }

    #[test]
    fn test_custom_config() {
        let config = ClassifierConfig {
            tight_spread: 0.01,
            ..ClassifierConfig::default()
        };
        let classifier = TrafficClassifier::new(config).unwrap();

        let analysis = classifier.analyze_area(&bangalore_center()).unwrap();
        assert_eq!(analysis.area_type, AreaType::Suburban);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClassifierConfig {
            tight_spread: 0.0,
            ..ClassifierConfig::default()
        };

        assert!(TrafficClassifier::new(config).is_err());
    }
}
