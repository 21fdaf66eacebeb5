use clap::Args;
use tracing::info;

use crate::{output, stops::StopArgs};

#[derive(Args)]
pub struct TrafficArgs {
    #[command(flatten)]
    stops: StopArgs,
}

pub fn run(args: TrafficArgs) -> anyhow::Result<()> {
    let classifier = args.stops.classifier()?;
    let locations = args.stops.locations();
    let time = args.stops.time;

    match classifier.analyze_area(&locations) {
        Some(analysis) => output::print_area(&analysis),
        None => info!("No stops selected, using the generic time-of-day pattern"),
    }

    println!("Traffic at {}: {}", time, classifier.classify(time, &locations));

    Ok(())
}
