//! HTTP client for the Wavepack calculation service.

use std::time::Duration;

use thiserror::Error;
use wave_core::{CalcRequest, CalculationResult};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the calculation service lives.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    /// Reads `WAVEPACK_URL`, falling back to the local development server.
    fn default() -> Self {
        let base_url =
            std::env::var("WAVEPACK_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("service returned an empty report payload")]
    EmptyReport,
}

/// Thin typed wrapper over the two service endpoints. One attempt per call,
/// no retries; callers own the stale-response bookkeeping.
#[derive(Clone)]
pub struct WavepackClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl WavepackClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build http client");
        Self { config, http }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// `POST /calculate`: solve the array for one set of inputs.
    pub async fn calculate(&self, request: &CalcRequest) -> Result<CalculationResult, ClientError> {
        let response = self
            .http
            .post(self.endpoint("calculate"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Service {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<CalculationResult>().await?)
    }

    /// `POST /report`: render the PDF report for one set of inputs and
    /// return its raw bytes.
    pub async fn report(&self, request: &CalcRequest) -> Result<Vec<u8>, ClientError> {
        let response = self
            .http
            .post(self.endpoint("report"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ClientError::EmptyReport);
        }
        Ok(bytes.to_vec())
    }
}
