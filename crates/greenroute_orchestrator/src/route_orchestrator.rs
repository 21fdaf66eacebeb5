use greenroute_service::{
    FuelType, OptimizationResult, OptimizationService, OptimizeRequest, ServiceError,
    VehicleProfile, VehicleType,
};
use greenroute_traffic::{AreaAnalysis, DeliveryTime, GeoPoint, TrafficClassifier, TrafficLevel};
use tokio::{sync::watch, time::Instant};
use tracing::{debug, info, warn};

use crate::{
    error::OrchestratorError,
    optimization_log::LogKind,
    preset::Preset,
    progress_schedule::ProgressSchedule,
    session_state::SessionState,
};

/// Fewest stops worth optimizing.
pub const MIN_LOCATIONS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeOutcome {
    /// The service answered, the result is stored in the session.
    Completed,

    /// The service call failed, the message is the last log entry.
    Failed { message: String },

    /// A cycle was already in flight, nothing happened.
    AlreadyOptimizing,
}

/// Owns the session state and runs optimization cycles against the service.
///
/// A cycle goes `Idle -> InFlight -> Succeeded | Failed -> Idle`. Starting a
/// cycle with too few stops is rejected before anything changes, and starting
/// one while another is in flight is ignored.
pub struct RouteOrchestrator<S> {
    service: S,
    classifier: TrafficClassifier,
    progress: ProgressSchedule,
    state: watch::Sender<SessionState>,
}

impl<S> RouteOrchestrator<S>
where
    S: OptimizationService,
{
    pub fn new(service: S) -> Self {
        Self::with_classifier(service, TrafficClassifier::default())
    }

    pub fn with_classifier(service: S, classifier: TrafficClassifier) -> Self {
        Self {
            service,
            classifier,
            progress: ProgressSchedule::default(),
            state: watch::Sender::new(SessionState::default()),
        }
    }

    pub fn with_progress(mut self, progress: ProgressSchedule) -> Self {
        self.progress = progress;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receives a new snapshot after every action and log entry.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn is_optimizing(&self) -> bool {
        self.state.borrow().is_optimizing
    }

    /// Current traffic level, computed from the current time and stops.
    pub fn traffic_level(&self) -> TrafficLevel {
        let state = self.state.borrow();
        self.classifier.classify(state.delivery_time, &state.locations)
    }

    pub fn area_analysis(&self) -> Option<AreaAnalysis> {
        self.classifier.analyze_area(&self.state.borrow().locations)
    }

    pub fn add_location(&self, location: GeoPoint) {
        self.state.send_modify(|state| state.locations.push(location));
    }

    /// Returns the removed location, `None` if `index` is out of range.
    pub fn remove_location(&self, index: usize) -> Option<GeoPoint> {
        let mut removed = None;
        self.state.send_if_modified(|state| {
            if index < state.locations.len() {
                removed = Some(state.locations.remove(index));
                true
            } else {
                false
            }
        });
        removed
    }

    pub fn set_locations(&self, locations: Vec<GeoPoint>) {
        self.state.send_modify(|state| state.locations = locations);
    }

    pub fn clear_locations(&self) {
        self.set_locations(Vec::new());
    }

    pub fn load_preset(&self, preset: Preset) {
        self.set_locations(preset.locations());
    }

    pub fn set_vehicle_type(&self, vehicle_type: VehicleType) {
        self.state
            .send_modify(|state| state.vehicle_profile.vehicle_type = vehicle_type);
    }

    pub fn set_fuel_type(&self, fuel_type: FuelType) {
        self.state
            .send_modify(|state| state.vehicle_profile.fuel_type = fuel_type);
    }

    pub fn set_vehicle_profile(&self, profile: VehicleProfile) {
        self.state.send_modify(|state| state.vehicle_profile = profile);
    }

    pub fn set_delivery_time(&self, time: DeliveryTime) {
        self.state.send_modify(|state| state.delivery_time = time);
    }

    /// Clears the result and log of the last cycle.
    pub fn clear_optimization(&self) -> Result<(), OrchestratorError> {
        let mut outcome = Ok(());
        self.state.send_if_modified(|state| {
            if state.is_optimizing {
                outcome = Err(OrchestratorError::Busy);
                return false;
            }

            state.result = None;
            state.log.clear();
            true
        });
        outcome
    }

    /// Runs one optimization cycle.
    ///
    /// Only the too-few-stops rejection is returned as an error, service
    /// failures end up in the log and in [`OptimizeOutcome::Failed`].
    ///
    /// Dropping the returned future before it completes aborts the service
    /// call instead of letting it run to completion: the session leaves the
    /// in-flight state, no result is stored and the cycle ends with an
    /// `Error: optimization cancelled` log entry.
    pub async fn optimize(&self) -> Result<OptimizeOutcome, OrchestratorError> {
        let Some(request) = self.begin_cycle()? else {
            debug!("Optimization already in flight, ignoring trigger");
            return Ok(OptimizeOutcome::AlreadyOptimizing);
        };

        let mut cycle = InFlightCycle {
            state: &self.state,
            finished: false,
        };

        let response = self.await_response(&request).await;

        Ok(cycle.finish(response))
    }

    /// Validates the session and enters the in-flight state. Returns `None`
    /// when a cycle is already running.
    fn begin_cycle(&self) -> Result<Option<OptimizeRequest>, OrchestratorError> {
        let mut outcome = Ok(None);

        self.state.send_if_modified(|state| {
            if state.is_optimizing {
                return false;
            }

            let selected = state.locations.len();
            if selected < MIN_LOCATIONS {
                outcome = Err(OrchestratorError::InsufficientLocations {
                    selected,
                    required: MIN_LOCATIONS,
                });
                return false;
            }

            let traffic = self
                .classifier
                .classify(state.delivery_time, &state.locations);
            let profile = state.vehicle_profile;

            state.is_optimizing = true;
            state.result = None;
            state.log.clear();
            state.log.push(LogKind::Info, "Starting route optimization...");
            state.log.push(
                LogKind::Info,
                format!("Analyzing {} delivery locations", selected),
            );
            state.log.push(LogKind::Info, format!("Vehicle: {}", profile));
            state.log.push(LogKind::Info, format!("Traffic: {}", traffic));

            info!(
                "Optimizing {} stops for {} in {} traffic",
                selected, profile, traffic
            );

            outcome = Ok(Some(OptimizeRequest::new(
                state.locations.clone(),
                profile,
                traffic,
            )));
            true
        });

        outcome
    }

    /// Awaits the service while appending progress ticks as they come due.
    /// Ticks that are not due yet when the response arrives are dropped.
    async fn await_response(
        &self,
        request: &OptimizeRequest,
    ) -> Result<OptimizationResult, ServiceError> {
        let started = Instant::now();

        let call = self.service.optimize(request);
        tokio::pin!(call);

        for tick in self.progress.ticks() {
            tokio::select! {
                biased;
                response = &mut call => return response,
                _ = tokio::time::sleep_until(started + tick.delay) => {
                    self.state.send_modify(|state| {
                        state.log.push(LogKind::Process, tick.message.as_str())
                    });
                }
            }
        }

        call.await
    }
}

/// Leaves the in-flight state when dropped, so a cancelled `optimize` future
/// does not lock the session.
struct InFlightCycle<'a> {
    state: &'a watch::Sender<SessionState>,
    finished: bool,
}

impl InFlightCycle<'_> {
    fn finish(&mut self, response: Result<OptimizationResult, ServiceError>) -> OptimizeOutcome {
        self.finished = true;

        match response {
            Ok(result) => {
                info!(
                    "Optimization complete: {}km, {}kg CO2",
                    result.total_distance, result.predicted_co2
                );

                self.state.send_modify(|state| {
                    state.log.push(LogKind::Success, "Optimization complete!");
                    state.log.push(
                        LogKind::Success,
                        format!(
                            "Best route: {}km, {}kg CO2",
                            result.total_distance, result.predicted_co2
                        ),
                    );
                    state.result = Some(result);
                    state.is_optimizing = false;
                });

                OptimizeOutcome::Completed
            }
            Err(err) => {
                warn!("Optimization failed: {}", err);

                let message = format!("Error: {}", err);
                self.state.send_modify(|state| {
                    state.log.push(LogKind::Error, message.as_str());
                    state.is_optimizing = false;
                });

                OptimizeOutcome::Failed { message }
            }
        }
    }
}

impl Drop for InFlightCycle<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        warn!("Optimization cancelled before the service answered");
        self.state.send_modify(|state| {
            state.log.push(LogKind::Error, "Error: optimization cancelled");
            state.is_optimizing = false;
        });
    }
}
