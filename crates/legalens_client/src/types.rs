use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub url: &'a str,
}

/// Envelope every analyzer endpoint wraps its JSON payload in.
///
/// The HTTP status code is deliberately not part of the contract: the
/// service pairs `success: false` envelopes with 4xx/5xx statuses, and the
/// body is authoritative either way.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// One stored website analysis, as serialized by the service.
///
/// Every field tolerates absence: failed analyses are backfilled with
/// sparse records, and older rows may predate newer fields.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalysisRecord {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub what_you_accept: Option<String>,
    #[serde(default)]
    pub data_collected: Option<String>,
    #[serde(default)]
    pub data_usage: Option<String>,
    #[serde(default)]
    pub data_sharing: Option<String>,
    #[serde(default)]
    pub retention_period: Option<String>,
    #[serde(default)]
    pub critical_points: Option<String>,
    #[serde(default)]
    pub readability_score: f64,
    #[serde(default)]
    pub risk_level: RiskLevelCode,
    #[serde(default)]
    pub risk_level_display: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub documents_found: Vec<DocumentRef>,
    #[serde(default)]
    pub is_successful: Option<bool>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Risk rating code as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevelCode {
    Low,
    Moderate,
    High,
    /// Any rating this client version does not know.
    #[serde(other)]
    #[default]
    Unknown,
}

/// Reference to a legal document discovered on the analyzed site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentRef {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
}

/// Payload of `GET /api/health/` (served without the envelope).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    /// Whether the service reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Failure of one analyzer API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service answered but declared failure.
    #[error("analysis rejected by the service: {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// Message from the service, surfaced verbatim when provided.
        message: Option<String>,
    },
    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not a readable envelope.
    #[error("unreadable response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The service declared success without a payload.
    #[error("missing payload in successful response")]
    MissingData,
    /// The configured base URL cannot address the endpoint.
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
}
