use crate::report::{AnalysisReport, FoundDocument, RecentAnalysis, RiskLevel};

/// Placeholder for category panels whose field is absent or blank.
pub const PANEL_PLACEHOLDER: &str = "Information non disponible";
/// Placeholder for the critical-points panel.
pub const CRITICAL_POINTS_PLACEHOLDER: &str = "Aucun point critique identifié";

/// Render-ready projection of the whole application state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub session: SessionView,
    pub recent: Vec<RecentRowView>,
    pub recent_cursor: usize,
    /// False while a call is in flight (the submit control is disabled).
    pub can_submit: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionView {
    #[default]
    Idle,
    Loading,
    Report(ReportView),
    Failed {
        message: String,
    },
}

/// Pure mapping from an [`AnalysisReport`] to its visual layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub title: String,
    pub risk: BadgeView,
    pub readability: ScoreView,
    pub summary: String,
    /// The six category panels, always present, in fixed order.
    pub panels: [PanelView; 6],
    /// Rendered as a checklist only when non-empty.
    pub key_points: Vec<String>,
    /// Rendered as link cards only when non-empty.
    pub documents: Vec<DocumentRowView>,
    pub analyzed_at: Option<String>,
}

/// Color register for risk and readability accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Danger,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub glyph: &'static str,
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRowView {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRowView {
    pub domain: String,
    pub risk: BadgeView,
    pub analyzed_at: Option<String>,
    pub selected: bool,
}

impl ReportView {
    pub fn of(report: &AnalysisReport) -> Self {
        Self {
            title: format!("Analyse de {}", report.domain),
            risk: risk_badge(report.risk_level, report.risk_level_display.as_deref()),
            readability: readability_score(report.readability_score),
            summary: report.summary.clone(),
            panels: [
                panel(
                    "Ce que vous acceptez",
                    report.what_you_accept.as_deref(),
                    PANEL_PLACEHOLDER,
                ),
                panel(
                    "Données collectées",
                    report.data_collected.as_deref(),
                    PANEL_PLACEHOLDER,
                ),
                panel(
                    "Utilisation des données",
                    report.data_usage.as_deref(),
                    PANEL_PLACEHOLDER,
                ),
                panel(
                    "Partage des données",
                    report.data_sharing.as_deref(),
                    PANEL_PLACEHOLDER,
                ),
                panel(
                    "Durée de conservation",
                    report.retention_period.as_deref(),
                    PANEL_PLACEHOLDER,
                ),
                panel(
                    "Points critiques",
                    report.critical_points.as_deref(),
                    CRITICAL_POINTS_PLACEHOLDER,
                ),
            ],
            key_points: report.key_points.clone(),
            documents: report.documents_found.iter().map(document_row).collect(),
            analyzed_at: report.analyzed_at.clone(),
        }
    }
}

impl RecentRowView {
    pub(crate) fn of(entry: &RecentAnalysis, selected: bool) -> Self {
        Self {
            domain: entry.domain.clone(),
            risk: risk_badge(entry.risk_level, None),
            analyzed_at: entry.analyzed_at.clone(),
            selected,
        }
    }
}

fn panel(title: &'static str, body: Option<&str>, placeholder: &'static str) -> PanelView {
    let body = body
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(placeholder);
    PanelView {
        title,
        body: body.to_owned(),
    }
}

fn document_row(document: &FoundDocument) -> DocumentRowView {
    // Title falls back to the document type, matching blank titles too.
    let label = document
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(&document.kind);
    DocumentRowView {
        label: label.to_owned(),
        url: document.url.clone(),
    }
}

fn risk_badge(level: RiskLevel, display: Option<&str>) -> BadgeView {
    let (glyph, tone, fallback) = match level {
        RiskLevel::Low => ("✓", Tone::Positive, "Faible"),
        RiskLevel::Moderate => ("⚠", Tone::Caution, "Modéré"),
        RiskLevel::High => ("🛡", Tone::Danger, "Élevé"),
        RiskLevel::Unknown => ("⚠", Tone::Neutral, "Inconnu"),
    };
    let display = display
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or(fallback);
    BadgeView {
        glyph,
        label: format!("Risque {display}"),
        tone,
    }
}

fn readability_score(score: f64) -> ScoreView {
    let tone = if score >= 8.0 {
        Tone::Positive
    } else if score >= 6.0 {
        Tone::Caution
    } else {
        Tone::Danger
    };
    ScoreView {
        text: format!("{score}/10"),
        tone,
    }
}
