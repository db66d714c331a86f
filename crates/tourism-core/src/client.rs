use tracing::{debug, instrument, warn};

use crate::{
    Generation, PendingRequest, RequestError, TourismRequest, TourismResponse, TOURISM_ENDPOINT,
};

#[derive(Debug, Clone)]
pub struct TourismClient {
    endpoint: String,
    client: reqwest::Client,
}

impl TourismClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        // Loopback service; environment proxies must not intercept it
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build proxy-free HTTP client, using defaults: {}", e);
                reqwest::Client::default()
            });

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn ask(&self, request: &TourismRequest) -> Result<TourismResponse, RequestError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        debug!(bytes = body.len(), "Received tourism response");
        TourismResponse::from_body(&body)
    }

    /// Sends a request minted by the form, handing back its generation with the result.
    pub async fn send(
        &self,
        pending: PendingRequest,
    ) -> (Generation, Result<TourismResponse, RequestError>) {
        let result = self.ask(&pending.payload).await;
        (pending.generation, result)
    }
}

impl Default for TourismClient {
    fn default() -> Self {
        Self::new(TOURISM_ENDPOINT)
    }
}
