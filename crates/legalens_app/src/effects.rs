use app_logging::{app_info, app_warn};
use legalens_client::{
    AnalysisRecord, ApiError, ClientEvent, ClientHandle, ClientSettings, DocumentRef,
    RiskLevelCode,
};
use legalens_core::{
    AnalysisOutcome, AnalysisReport, Effect, FoundDocument, Msg, RecentAnalysis, RiskLevel,
};

/// Executes core effects against the analyzer client and converts client
/// events back into core messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientHandle::new(settings)?,
        })
    }

    /// Startup fetch of the recent-analyses listing.
    pub fn request_recent(&self) {
        self.client.load_recent();
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestAnalysis { url } => {
                    app_info!("analysis requested for {url}");
                    self.client.analyze(url);
                }
                Effect::FetchCachedAnalysis { domain } => {
                    app_info!("cached analysis requested for {domain}");
                    self.client.open_cached(domain);
                }
                Effect::LoadRecent => self.client.load_recent(),
            }
        }
    }

    /// Drains one pending client event, already mapped to a core message.
    pub fn try_recv(&self) -> Option<Msg> {
        let event = self.client.try_recv()?;
        Some(match event {
            ClientEvent::AnalysisSettled(result) => Msg::AnalysisSettled(settle_outcome(result)),
            ClientEvent::RecentLoaded(Ok(records)) => {
                Msg::RecentLoaded(records.into_iter().map(recent_entry).collect())
            }
            ClientEvent::RecentLoaded(Err(err)) => {
                // The recent list is decorative; failures stay in the log.
                app_warn!("recent analyses unavailable: {err}");
                Msg::NoOp
            }
        })
    }
}

fn settle_outcome(result: Result<AnalysisRecord, ApiError>) -> AnalysisOutcome {
    match result {
        Ok(record) => AnalysisOutcome::Report(Box::new(report_from(record))),
        Err(ApiError::Rejected { message }) => AnalysisOutcome::Rejected { message },
        Err(err) => {
            app_warn!("analysis call failed: {err}");
            AnalysisOutcome::Unreachable
        }
    }
}

fn report_from(record: AnalysisRecord) -> AnalysisReport {
    AnalysisReport {
        domain: record.domain,
        risk_level: risk_from(record.risk_level),
        risk_level_display: record.risk_level_display,
        readability_score: record.readability_score,
        summary: record.summary,
        what_you_accept: record.what_you_accept,
        data_collected: record.data_collected,
        data_usage: record.data_usage,
        data_sharing: record.data_sharing,
        retention_period: record.retention_period,
        critical_points: record.critical_points,
        key_points: record.key_points,
        documents_found: record.documents_found.into_iter().map(document_from).collect(),
        analyzed_at: record.created_at.map(format_timestamp),
    }
}

fn document_from(document: DocumentRef) -> FoundDocument {
    FoundDocument {
        kind: document.kind,
        title: document.title,
        url: document.url,
    }
}

fn risk_from(code: RiskLevelCode) -> RiskLevel {
    match code {
        RiskLevelCode::Low => RiskLevel::Low,
        RiskLevelCode::Moderate => RiskLevel::Moderate,
        RiskLevelCode::High => RiskLevel::High,
        RiskLevelCode::Unknown => RiskLevel::Unknown,
    }
}

fn recent_entry(record: AnalysisRecord) -> RecentAnalysis {
    RecentAnalysis {
        domain: record.domain,
        risk_level: risk_from(record.risk_level),
        analyzed_at: record.created_at.map(format_timestamp),
    }
}

fn format_timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}
