use crate::report::{AnalysisReport, RecentAnalysis};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current input for analysis (button or Enter).
    AnalyzeSubmitted,
    /// The outbound analysis call settled.
    AnalysisSettled(AnalysisOutcome),
    /// Recent analyses fetched from the service.
    RecentLoaded(Vec<RecentAnalysis>),
    /// Move the selection in the recent-analyses list.
    RecentCursorMoved(CursorMove),
    /// Open the selected recent analysis (served from the service cache).
    RecentOpened,
    /// User asked to start over with a fresh analysis.
    ResetRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// How the single in-flight analysis call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The service returned a report.
    Report(Box<AnalysisReport>),
    /// The service answered but declared failure.
    Rejected { message: Option<String> },
    /// The call never produced a readable answer.
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
}
