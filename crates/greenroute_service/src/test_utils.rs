pub fn sample_result_json() -> serde_json::Value {
    serde_json::json!({
        "best_route": [
            { "lat": 12.97, "lon": 77.59 },
            { "lat": 12.99, "lon": 77.61 },
            { "lat": 12.98, "lon": 77.60 }
        ],
        "route_waypoints": [
            { "lat": 12.97, "lon": 77.59 },
            { "lat": 12.975, "lon": 77.595 },
            { "lat": 12.99, "lon": 77.61 },
            { "lat": 12.98, "lon": 77.60 }
        ],
        "route_mapping": [1, 3, 2],
        "predicted_co2": 3.1,
        "total_distance": 12.4,
        "input_features": {
            "vehicle_type": "Car",
            "fuel_type": "Petrol",
            "traffic_conditions": "Moderate",
            "derived_engine_size": 1.6,
            "derived_speed": 28.0
        }
    })
}
