use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use greenroute_orchestrator::OptimizationLog;
use greenroute_service::OptimizationResult;
use greenroute_traffic::{AreaAnalysis, GeoPoint};

/// Prints the entries from `from` on and returns how many entries are printed.
pub fn print_log(log: &OptimizationLog, from: usize) -> usize {
    // A new cycle resets the log
    let from = if from > log.len() { 0 } else { from };

    for entry in log.entries().iter().skip(from) {
        println!("[{}] {:<7} {}", entry.local_time(), entry.kind, entry.message);
    }

    log.len()
}

pub fn print_area(analysis: &AreaAnalysis) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Centroid", "Spread", "Urban area", "Area type"]);
    table.add_row(vec![
        format!("{:.4}, {:.4}", analysis.centroid.y(), analysis.centroid.x()),
        format!("{:.4}", analysis.spread),
        analysis
            .urban_area
            .clone()
            .unwrap_or_else(|| String::from("-")),
        analysis.area_type.to_string(),
    ]);

    println!("{table}");
}

pub fn print_result(result: &OptimizationResult, stops: &[GeoPoint]) {
    let mut route = Table::new();
    route.load_preset(UTF8_FULL_CONDENSED);
    route.set_header(vec!["#", "Stop", "Lat", "Lon"]);

    for (position, (index, stop)) in result.ordered_stops().enumerate() {
        let label = stops
            .get(index)
            .and_then(|stop| stop.label.clone())
            .unwrap_or_else(|| format!("Stop {}", index + 1));

        route.add_row(vec![
            (position + 1).to_string(),
            label,
            format!("{:.4}", stop.lat),
            format!("{:.4}", stop.lon),
        ]);
    }

    println!("{route}");

    let features = &result.input_features;
    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL_CONDENSED);
    summary.set_header(vec!["Distance", "CO2", "Vehicle", "Traffic", "Engine", "Speed"]);
    summary.add_row(vec![
        format!("{} km", result.total_distance),
        format!("{} kg", result.predicted_co2),
        format!("{} ({})", features.vehicle_type, features.fuel_type),
        features.traffic_conditions.to_string(),
        format!("{:.1} L", features.derived_engine_size),
        format!("{:.1} km/h", features.derived_speed),
    ]);

    println!("{summary}");

    if let Some(comparison) = &result.shortest_route_comparison {
        let order: Vec<String> = comparison
            .route_mapping
            .iter()
            .map(|index| index.to_string())
            .collect();

        println!(
            "Shortest route: {} ({} km, {} kg CO2)",
            order.join(" -> "),
            comparison.distance,
            comparison.co2
        );

        if comparison.is_green_choice() {
            if let Some(message) = &comparison.green_choice_message {
                println!("Green choice: {}", message);
            }
        } else if !comparison.is_different_route {
            println!("The shortest route is also the greenest");
        }
    }
}
