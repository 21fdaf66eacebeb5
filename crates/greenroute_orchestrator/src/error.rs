use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrchestratorError {
    #[error("Please select at least {required} locations ({selected} selected)")]
    InsufficientLocations { selected: usize, required: usize },

    #[error("An optimization is already in progress")]
    Busy,
}
