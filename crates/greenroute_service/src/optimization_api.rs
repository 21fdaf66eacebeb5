use tracing::{debug, instrument};

use crate::{
    error::ServiceError, optimization_result::OptimizationResult,
    optimization_service::OptimizationService, optimize_request::OptimizeRequest,
    service_config::ServiceConfig,
};

/// Talks to the optimizer over HTTP/JSON.
pub struct OptimizationApiClient {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl OptimizationApiClient {
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
        stop_count: usize,
    ) -> Result<OptimizationResult, ServiceError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        let result: OptimizationResult = serde_json::from_slice(&bytes)?;
        result.validate(stop_count).map_err(ServiceError::Malformed)?;

        Ok(result)
    }
}

impl OptimizationService for OptimizationApiClient {
    #[instrument(skip_all, fields(stops = request.stops.len()))]
    async fn optimize(
        &self,
        request: &OptimizeRequest,
    ) -> Result<OptimizationResult, ServiceError> {
        let url = self.config.optimize_url();
        debug!("OptimizationApi: Posting optimize request to {}", url);

        let response = self.client.post(url).json(request).send().await?;
        let result = self.handle_response(response, request.stops.len()).await?;

        debug!(
            "OptimizationApi: Received route of {}km, {}kg CO2",
            result.total_distance, result.predicted_co2
        );

        Ok(result)
    }
}
