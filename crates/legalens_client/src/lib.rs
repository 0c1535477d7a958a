//! Legalens client: typed access to the legal-document analyzer API.
mod api;
mod handle;
mod types;

pub use api::{check_health, AnalyzerApi, ClientSettings, HttpAnalyzerClient};
pub use handle::{ClientEvent, ClientHandle};
pub use types::{
    AnalysisRecord, AnalyzeRequest, ApiEnvelope, ApiError, DocumentRef, HealthStatus,
    RiskLevelCode,
};
