use crate::{
    error::ServiceError, optimization_result::OptimizationResult,
    optimize_request::OptimizeRequest,
};

/// The external route optimizer. Solving and emission prediction happen
/// behind this seam.
pub trait OptimizationService {
    fn optimize(
        &self,
        request: &OptimizeRequest,
    ) -> impl Future<Output = Result<OptimizationResult, ServiceError>>;
}
