use crate::msg::CursorMove;
use crate::report::{AnalysisReport, RecentAnalysis};
use crate::view_model::{AppViewModel, RecentRowView, ReportView, SessionView};

/// Lifecycle of the single analysis request owned by the view.
///
/// Exactly one variant holds at any time; entering `Loading` atomically
/// discards any previous result or error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Ready(Box<AnalysisReport>),
    Failed {
        message: String,
    },
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    session: SessionState,
    recent: Vec<RecentAnalysis>,
    recent_cursor: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let session = match &self.session {
            SessionState::Idle => SessionView::Idle,
            SessionState::Loading => SessionView::Loading,
            SessionState::Ready(report) => SessionView::Report(ReportView::of(report)),
            SessionState::Failed { message } => SessionView::Failed {
                message: message.clone(),
            },
        };
        let recent = self
            .recent
            .iter()
            .enumerate()
            .map(|(index, entry)| RecentRowView::of(entry, index == self.recent_cursor))
            .collect();
        AppViewModel {
            input: self.input.clone(),
            session,
            recent,
            recent_cursor: self.recent_cursor,
            can_submit: !self.session.is_loading(),
            dirty: self.dirty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_loading(&mut self) {
        self.session = SessionState::Loading;
        self.dirty = true;
    }

    pub(crate) fn complete(&mut self, report: AnalysisReport) {
        self.session = SessionState::Ready(Box::new(report));
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.session = SessionState::Failed { message };
        self.dirty = true;
    }

    pub(crate) fn reset(&mut self) {
        self.input.clear();
        self.session = SessionState::Idle;
        self.dirty = true;
    }

    pub(crate) fn set_recent(&mut self, entries: Vec<RecentAnalysis>) {
        self.recent = entries;
        self.recent_cursor = self
            .recent_cursor
            .min(self.recent.len().saturating_sub(1));
        self.dirty = true;
    }

    pub(crate) fn move_recent_cursor(&mut self, direction: CursorMove) {
        let moved = match direction {
            CursorMove::Up => self.recent_cursor.saturating_sub(1),
            CursorMove::Down => (self.recent_cursor + 1).min(self.recent.len().saturating_sub(1)),
        };
        if moved != self.recent_cursor {
            self.recent_cursor = moved;
            self.dirty = true;
        }
    }

    pub(crate) fn selected_recent_domain(&self) -> Option<String> {
        self.recent
            .get(self.recent_cursor)
            .map(|entry| entry.domain.clone())
    }
}
