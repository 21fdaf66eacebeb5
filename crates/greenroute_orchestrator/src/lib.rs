pub mod error;
pub mod optimization_log;
pub mod preset;
pub mod progress_schedule;
pub mod route_orchestrator;
pub mod session_state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::OrchestratorError;
pub use optimization_log::{LogEntry, LogKind, OptimizationLog};
pub use preset::Preset;
pub use progress_schedule::{ProgressSchedule, ProgressTick};
pub use route_orchestrator::{MIN_LOCATIONS, OptimizeOutcome, RouteOrchestrator};
pub use session_state::SessionState;
