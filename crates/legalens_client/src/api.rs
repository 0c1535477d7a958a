use std::time::Duration;

use app_logging::{app_debug, app_info};
use async_trait::async_trait;
use url::Url;

use crate::types::{AnalysisRecord, AnalyzeRequest, ApiEnvelope, ApiError, HealthStatus};

/// Connection settings for the analyzer service.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the service, e.g. `http://localhost:8000`.
    pub base_url: Url,
    /// TCP connect timeout. `None` waits indefinitely, the historical
    /// behavior of this client.
    pub connect_timeout: Option<Duration>,
    /// Whole-request timeout. `None` waits indefinitely, the historical
    /// behavior of this client.
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    /// Settings for a service at `base_url`, with unbounded waits.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// Typed access to the analyzer API.
#[async_trait]
pub trait AnalyzerApi: Send + Sync {
    /// Submits a URL for analysis and returns the stored record.
    async fn analyze(&self, url: &str) -> Result<AnalysisRecord, ApiError>;

    /// Fetches the cached analysis for a previously analyzed domain.
    async fn cached_analysis(&self, domain: &str) -> Result<AnalysisRecord, ApiError>;

    /// Fetches the recent-analyses listing, most recent first.
    async fn recent_analyses(&self) -> Result<Vec<AnalysisRecord>, ApiError>;

    /// Probes the service health endpoint.
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// reqwest-backed implementation of [`AnalyzerApi`].
#[derive(Debug, Clone)]
pub struct HttpAnalyzerClient {
    settings: ClientSettings,
    http: reqwest::Client,
}

impl HttpAnalyzerClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { settings, http })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.settings.base_url.join(path)?)
    }

    /// Reads the envelope from any response, ignoring the HTTP status.
    async fn read_envelope<T>(&self, response: reqwest::Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let status = response.status();
        let bytes = response.bytes().await?;
        app_debug!("analyzer answered {status} with {} bytes", bytes.len());

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&bytes)?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                message: envelope.message,
            });
        }
        envelope.data.ok_or(ApiError::MissingData)
    }
}

#[async_trait]
impl AnalyzerApi for HttpAnalyzerClient {
    async fn analyze(&self, url: &str) -> Result<AnalysisRecord, ApiError> {
        app_info!("requesting analysis of {url}");
        let response = self
            .http
            .post(self.endpoint("/api/analyze/")?)
            .json(&AnalyzeRequest { url })
            .send()
            .await?;
        self.read_envelope(response).await
    }

    async fn cached_analysis(&self, domain: &str) -> Result<AnalysisRecord, ApiError> {
        app_info!("requesting cached analysis of {domain}");
        let response = self
            .http
            .get(self.endpoint(&format!("/api/analysis/{domain}/"))?)
            .send()
            .await?;
        self.read_envelope(response).await
    }

    async fn recent_analyses(&self) -> Result<Vec<AnalysisRecord>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/analyses/")?)
            .send()
            .await?;
        self.read_envelope(response).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.http.get(self.endpoint("/api/health/")?).send().await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Probes the service health from synchronous code (used by `--check`).
pub fn check_health(settings: ClientSettings) -> Result<HealthStatus, ApiError> {
    let client = HttpAnalyzerClient::new(settings)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    runtime.block_on(client.health())
}
