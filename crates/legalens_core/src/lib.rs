//! Legalens core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod report;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{AnalysisOutcome, CursorMove, Msg};
pub use report::{AnalysisReport, FoundDocument, RecentAnalysis, RiskLevel};
pub use state::{AppState, SessionState};
pub use update::{update, ANALYSIS_ERROR_MESSAGE, CONNECTION_ERROR_MESSAGE, VALIDATION_MESSAGE};
pub use view_model::{
    AppViewModel, BadgeView, DocumentRowView, PanelView, RecentRowView, ReportView, ScoreView,
    SessionView, Tone, CRITICAL_POINTS_PLACEHOLDER, PANEL_PLACEHOLDER,
};
