use std::sync::Once;

use legalens_core::{
    update, AnalysisOutcome, AnalysisReport, AppState, CursorMove, Effect, Msg, RecentAnalysis,
    RiskLevel, SessionState, SessionView, Tone, ANALYSIS_ERROR_MESSAGE, CONNECTION_ERROR_MESSAGE,
    VALIDATION_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::AnalyzeSubmitted)
}

fn settle(state: AppState, outcome: AnalysisOutcome) -> (AppState, Vec<Effect>) {
    update(state, Msg::AnalysisSettled(outcome))
}

fn sample_report() -> AnalysisReport {
    AnalysisReport {
        domain: "example.com".to_string(),
        risk_level: RiskLevel::High,
        risk_level_display: Some("Élevé".to_string()),
        readability_score: 9.0,
        summary: "Conditions globalement défavorables.".to_string(),
        ..AnalysisReport::default()
    }
}

#[test]
fn whitespace_submit_fails_locally_without_effect() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = submit(state, "   \t  ");

    assert!(effects.is_empty());
    assert_eq!(
        state.session(),
        &SessionState::Failed {
            message: VALIDATION_MESSAGE.to_string(),
        }
    );
    assert!(state.consume_dirty());
}

#[test]
fn empty_submit_fails_locally_without_effect() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "");

    assert!(effects.is_empty());
    assert_eq!(
        state.session(),
        &SessionState::Failed {
            message: VALIDATION_MESSAGE.to_string(),
        }
    );
}

#[test]
fn valid_submit_enters_loading_with_trimmed_url() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "  https://example.com  ");

    assert_eq!(
        effects,
        vec![Effect::RequestAnalysis {
            url: "https://example.com".to_string(),
        }]
    );
    assert_eq!(state.session(), &SessionState::Loading);
    let view = state.view();
    assert!(!view.can_submit);
    assert_eq!(view.session, SessionView::Loading);
}

#[test]
fn submit_while_loading_is_ignored() {
    init_logging();
    let (state, _effects) = submit(AppState::new(), "https://example.com");
    assert_eq!(state.session(), &SessionState::Loading);

    let (state, effects) = update(state, Msg::AnalyzeSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state.session(), &SessionState::Loading);
}

#[test]
fn submit_clears_previous_error() {
    init_logging();
    let (state, _) = submit(AppState::new(), "");
    let (state, effects) = submit(state, "https://example.com");

    assert_eq!(effects.len(), 1);
    assert_eq!(state.session(), &SessionState::Loading);
}

#[test]
fn successful_settle_stores_report() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (mut state, effects) = settle(
        state,
        AnalysisOutcome::Report(Box::new(sample_report())),
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    match state.view().session {
        SessionView::Report(report) => {
            assert_eq!(report.title, "Analyse de example.com");
            assert_eq!(report.risk.label, "Risque Élevé");
            assert_eq!(report.risk.tone, Tone::Danger);
            assert_eq!(report.readability.text, "9/10");
            assert_eq!(report.readability.tone, Tone::Positive);
            assert_eq!(report.summary, "Conditions globalement défavorables.");
        }
        other => panic!("expected a report, got {other:?}"),
    }
}

#[test]
fn rejected_settle_keeps_server_message_verbatim() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (state, _) = settle(
        state,
        AnalysisOutcome::Rejected {
            message: Some("bad url".to_string()),
        },
    );

    assert_eq!(
        state.session(),
        &SessionState::Failed {
            message: "bad url".to_string(),
        }
    );
}

#[test]
fn rejected_settle_without_message_uses_generic_fallback() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (state, _) = settle(state, AnalysisOutcome::Rejected { message: None });

    assert_eq!(
        state.session(),
        &SessionState::Failed {
            message: ANALYSIS_ERROR_MESSAGE.to_string(),
        }
    );
}

#[test]
fn rejected_settle_with_blank_message_uses_generic_fallback() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (state, _) = settle(
        state,
        AnalysisOutcome::Rejected {
            message: Some("   ".to_string()),
        },
    );

    assert_eq!(
        state.session(),
        &SessionState::Failed {
            message: ANALYSIS_ERROR_MESSAGE.to_string(),
        }
    );
}

#[test]
fn unreachable_settle_uses_connection_message() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (state, _) = settle(state, AnalysisOutcome::Unreachable);

    assert_eq!(
        state.session(),
        &SessionState::Failed {
            message: CONNECTION_ERROR_MESSAGE.to_string(),
        }
    );
    // The session is interactable again.
    assert!(state.view().can_submit);
}

#[test]
fn reset_clears_input_result_and_error() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, _) = settle(state, AnalysisOutcome::Report(Box::new(sample_report())));

    let (state, effects) = update(state, Msg::ResetRequested);

    assert_eq!(effects, vec![Effect::LoadRecent]);
    assert_eq!(state.session(), &SessionState::Idle);
    assert_eq!(state.input(), "");
    assert_eq!(state.view().session, SessionView::Idle);
}

#[test]
fn reset_is_ignored_while_loading() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (state, effects) = update(state, Msg::ResetRequested);

    assert!(effects.is_empty());
    assert_eq!(state.session(), &SessionState::Loading);
}

#[test]
fn stale_settle_after_reset_still_lands() {
    // The disabled submit control is the only guard against overlapping
    // calls; a settle arriving out of band is applied as-is.
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, _) = settle(state, AnalysisOutcome::Report(Box::new(sample_report())));
    let (state, _) = update(state, Msg::ResetRequested);
    assert_eq!(state.session(), &SessionState::Idle);

    let (state, _) = settle(state, AnalysisOutcome::Report(Box::new(sample_report())));
    assert!(matches!(state.session(), SessionState::Ready(_)));
}

#[test]
fn recent_loaded_replaces_list_and_cursor_stays_in_bounds() {
    init_logging();
    let entries = vec![
        RecentAnalysis {
            domain: "a.example.com".to_string(),
            risk_level: RiskLevel::Low,
            analyzed_at: None,
        },
        RecentAnalysis {
            domain: "b.example.com".to_string(),
            risk_level: RiskLevel::Moderate,
            analyzed_at: Some("01/08/2025 10:00".to_string()),
        },
    ];
    let (state, effects) = update(AppState::new(), Msg::RecentLoaded(entries));
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::RecentCursorMoved(CursorMove::Down));
    let (state, _) = update(state, Msg::RecentCursorMoved(CursorMove::Down));
    assert_eq!(state.view().recent_cursor, 1);

    // Shrinking the list pulls the cursor back in bounds.
    let (state, _) = update(
        state,
        Msg::RecentLoaded(vec![RecentAnalysis {
            domain: "c.example.com".to_string(),
            risk_level: RiskLevel::High,
            analyzed_at: None,
        }]),
    );
    assert_eq!(state.view().recent_cursor, 0);
}

#[test]
fn recent_opened_requests_cached_analysis() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::RecentLoaded(vec![RecentAnalysis {
            domain: "example.com".to_string(),
            risk_level: RiskLevel::Low,
            analyzed_at: None,
        }]),
    );

    let (state, effects) = update(state, Msg::RecentOpened);

    assert_eq!(
        effects,
        vec![Effect::FetchCachedAnalysis {
            domain: "example.com".to_string(),
        }]
    );
    assert_eq!(state.session(), &SessionState::Loading);
}

#[test]
fn recent_opened_with_empty_list_does_nothing() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RecentOpened);

    assert!(effects.is_empty());
    assert_eq!(state.session(), &SessionState::Idle);
}

#[test]
fn recent_opened_while_loading_is_ignored() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::RecentLoaded(vec![RecentAnalysis {
            domain: "example.com".to_string(),
            risk_level: RiskLevel::Low,
            analyzed_at: None,
        }]),
    );
    let (state, _) = submit(state, "https://other.example.com");

    let (state, effects) = update(state, Msg::RecentOpened);

    assert!(effects.is_empty());
    assert_eq!(state.session(), &SessionState::Loading);
}
