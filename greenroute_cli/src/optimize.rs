use clap::Args;
use greenroute_orchestrator::{OptimizeOutcome, RouteOrchestrator};
use greenroute_service::{
    FuelType, OptimizationApiClient, ServiceConfig, VehicleProfile, VehicleType,
};
use tracing::info;

use crate::{output, stops::StopArgs};

#[derive(Args)]
pub struct OptimizeArgs {
    #[command(flatten)]
    stops: StopArgs,

    /// Car, Truck, Bus or Motorcycle
    #[arg(long, default_value = "Car")]
    vehicle: VehicleType,

    /// Electric, Hybrid, Petrol or Diesel
    #[arg(long, default_value = "Petrol")]
    fuel: FuelType,

    /// Base URL of the optimization service, overrides GREENROUTE_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Print the final log and result as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let mut config = ServiceConfig::from_env()?;
    if let Some(api_url) = args.api_url {
        config.base_url = api_url;
    }

    let client = OptimizationApiClient::new(config)?;
    let orchestrator = RouteOrchestrator::with_classifier(client, args.stops.classifier()?);

    orchestrator.set_locations(args.stops.locations());
    orchestrator.set_vehicle_profile(VehicleProfile::new(args.vehicle, args.fuel));
    orchestrator.set_delivery_time(args.stops.time);

    info!(
        "Sending {} stops to {}",
        orchestrator.snapshot().locations().len(),
        orchestrator.service().config().optimize_url()
    );

    let mut updates = orchestrator.subscribe();
    let cycle = orchestrator.optimize();
    tokio::pin!(cycle);

    let mut printed = 0;
    let outcome = loop {
        tokio::select! {
            outcome = &mut cycle => break outcome,
            Ok(()) = updates.changed() => {
                if !args.json {
                    printed = output::print_log(updates.borrow_and_update().log(), printed);
                }
            }
        }
    };

    let state = orchestrator.snapshot();
    if args.json {
        let json = serde_json::json!({
            "log": state.log(),
            "result": state.result(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        output::print_log(state.log(), printed);
    }

    match outcome? {
        OptimizeOutcome::Completed => {
            if let (Some(result), false) = (state.result(), args.json) {
                output::print_result(result, state.locations());
            }
            Ok(())
        }
        OptimizeOutcome::Failed { message } => Err(anyhow::anyhow!(message)),
        OptimizeOutcome::AlreadyOptimizing => Err(anyhow::anyhow!(
            "An optimization is already in progress"
        )),
    }
}
