/// Structured report returned by the analyzer service for one website.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisReport {
    pub domain: String,
    pub risk_level: RiskLevel,
    /// Human label shown next to the risk icon, when the service sent one.
    pub risk_level_display: Option<String>,
    /// 0–10; 0 when the service omitted the score.
    pub readability_score: f64,
    pub summary: String,
    pub what_you_accept: Option<String>,
    pub data_collected: Option<String>,
    pub data_usage: Option<String>,
    pub data_sharing: Option<String>,
    pub retention_period: Option<String>,
    pub critical_points: Option<String>,
    pub key_points: Vec<String>,
    pub documents_found: Vec<FoundDocument>,
    /// Display timestamp of when the service produced the analysis.
    pub analyzed_at: Option<String>,
}

/// A legal document discovered on the analyzed site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundDocument {
    /// Document category, e.g. terms of use or privacy policy.
    pub kind: String,
    pub title: Option<String>,
    pub url: String,
}

/// Server-assigned rating of how unfavorable the analyzed terms are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    /// Any rating this client does not recognize.
    #[default]
    Unknown,
}

/// One row of the recent-analyses listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentAnalysis {
    pub domain: String,
    pub risk_level: RiskLevel,
    pub analyzed_at: Option<String>,
}
