use crate::msg::AnalysisOutcome;
use crate::{AppState, Effect, Msg};

/// Shown when submit is invoked with an empty or whitespace-only URL.
pub const VALIDATION_MESSAGE: &str = "Veuillez entrer une URL valide";
/// Fallback when the service declares failure without a message.
pub const ANALYSIS_ERROR_MESSAGE: &str = "Erreur lors de l'analyse";
/// Shown when the call never produced a readable answer.
pub const CONNECTION_ERROR_MESSAGE: &str = "Erreur de connexion au serveur";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::AnalyzeSubmitted => {
            if state.session().is_loading() {
                // The submit control is disabled while a call is in flight.
                return (state, Vec::new());
            }
            let url = state.input().trim().to_owned();
            if url.is_empty() {
                // Handled entirely locally; the service never sees it.
                state.fail(VALIDATION_MESSAGE.to_owned());
                Vec::new()
            } else {
                state.begin_loading();
                vec![Effect::RequestAnalysis { url }]
            }
        }
        Msg::AnalysisSettled(outcome) => {
            // Applied whatever the current session is: a stale settle may
            // overwrite, but Loading always ends.
            match outcome {
                AnalysisOutcome::Report(report) => state.complete(*report),
                AnalysisOutcome::Rejected { message } => {
                    let message = message
                        .filter(|text| !text.trim().is_empty())
                        .unwrap_or_else(|| ANALYSIS_ERROR_MESSAGE.to_owned());
                    state.fail(message);
                }
                AnalysisOutcome::Unreachable => state.fail(CONNECTION_ERROR_MESSAGE.to_owned()),
            }
            Vec::new()
        }
        Msg::RecentLoaded(entries) => {
            state.set_recent(entries);
            Vec::new()
        }
        Msg::RecentCursorMoved(direction) => {
            state.move_recent_cursor(direction);
            Vec::new()
        }
        Msg::RecentOpened => {
            if state.session().is_loading() {
                return (state, Vec::new());
            }
            match state.selected_recent_domain() {
                Some(domain) => {
                    state.begin_loading();
                    vec![Effect::FetchCachedAnalysis { domain }]
                }
                None => Vec::new(),
            }
        }
        Msg::ResetRequested => {
            if state.session().is_loading() {
                // The in-flight call still owns the session.
                return (state, Vec::new());
            }
            state.reset();
            vec![Effect::LoadRecent]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
