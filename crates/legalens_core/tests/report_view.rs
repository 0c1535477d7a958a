use legalens_core::{
    AnalysisReport, FoundDocument, ReportView, RiskLevel, Tone, CRITICAL_POINTS_PLACEHOLDER,
    PANEL_PLACEHOLDER,
};

fn report_with_risk(level: RiskLevel) -> AnalysisReport {
    AnalysisReport {
        domain: "example.com".to_string(),
        risk_level: level,
        ..AnalysisReport::default()
    }
}

#[test]
fn risk_badge_matches_level_table() {
    let cases = [
        (RiskLevel::Low, "✓", Tone::Positive, "Risque Faible"),
        (RiskLevel::Moderate, "⚠", Tone::Caution, "Risque Modéré"),
        (RiskLevel::High, "🛡", Tone::Danger, "Risque Élevé"),
        (RiskLevel::Unknown, "⚠", Tone::Neutral, "Risque Inconnu"),
    ];
    for (level, glyph, tone, label) in cases {
        let view = ReportView::of(&report_with_risk(level));
        assert_eq!(view.risk.glyph, glyph, "glyph for {level:?}");
        assert_eq!(view.risk.tone, tone, "tone for {level:?}");
        assert_eq!(view.risk.label, label, "label for {level:?}");
    }
}

#[test]
fn risk_badge_prefers_server_display_label() {
    let report = AnalysisReport {
        risk_level: RiskLevel::High,
        risk_level_display: Some("Critique".to_string()),
        ..AnalysisReport::default()
    };
    let view = ReportView::of(&report);
    assert_eq!(view.risk.label, "Risque Critique");
    assert_eq!(view.risk.tone, Tone::Danger);
}

#[test]
fn readability_buckets_are_inclusive_at_boundaries() {
    let score = |value: f64| {
        ReportView::of(&AnalysisReport {
            readability_score: value,
            ..AnalysisReport::default()
        })
        .readability
    };

    assert_eq!(score(8.0).tone, Tone::Positive);
    assert_eq!(score(8.0).text, "8/10");
    assert_eq!(score(6.0).tone, Tone::Caution);
    assert_eq!(score(6.0).text, "6/10");
    assert_eq!(score(5.9).tone, Tone::Danger);
    assert_eq!(score(5.9).text, "5.9/10");
    assert_eq!(score(10.0).tone, Tone::Positive);
    assert_eq!(score(0.0).tone, Tone::Danger);
}

#[test]
fn panels_are_always_six_in_fixed_order() {
    let view = ReportView::of(&AnalysisReport::default());
    let titles: Vec<&str> = view.panels.iter().map(|panel| panel.title).collect();
    assert_eq!(
        titles,
        vec![
            "Ce que vous acceptez",
            "Données collectées",
            "Utilisation des données",
            "Partage des données",
            "Durée de conservation",
            "Points critiques",
        ]
    );
}

#[test]
fn absent_panel_fields_fall_back_to_placeholders() {
    let view = ReportView::of(&AnalysisReport::default());
    for panel in &view.panels[..5] {
        assert_eq!(panel.body, PANEL_PLACEHOLDER, "panel {}", panel.title);
    }
    assert_eq!(view.panels[5].body, CRITICAL_POINTS_PLACEHOLDER);
}

#[test]
fn blank_panel_fields_fall_back_to_placeholders() {
    let report = AnalysisReport {
        what_you_accept: Some("   ".to_string()),
        critical_points: Some(String::new()),
        ..AnalysisReport::default()
    };
    let view = ReportView::of(&report);
    assert_eq!(view.panels[0].body, PANEL_PLACEHOLDER);
    assert_eq!(view.panels[5].body, CRITICAL_POINTS_PLACEHOLDER);
}

#[test]
fn filled_panel_fields_are_kept() {
    let report = AnalysisReport {
        data_collected: Some("Adresse e-mail et historique de navigation".to_string()),
        retention_period: Some("3 ans".to_string()),
        ..AnalysisReport::default()
    };
    let view = ReportView::of(&report);
    assert_eq!(
        view.panels[1].body,
        "Adresse e-mail et historique de navigation"
    );
    assert_eq!(view.panels[4].body, "3 ans");
}

#[test]
fn key_points_preserve_order_and_empty_stays_empty() {
    assert!(ReportView::of(&AnalysisReport::default())
        .key_points
        .is_empty());

    let report = AnalysisReport {
        key_points: vec![
            "Revente de données à des tiers".to_string(),
            "Résiliation à tout moment".to_string(),
            "Tribunal compétent à l'étranger".to_string(),
        ],
        ..AnalysisReport::default()
    };
    let view = ReportView::of(&report);
    assert_eq!(view.key_points.len(), 3);
    assert_eq!(view.key_points[0], "Revente de données à des tiers");
    assert_eq!(view.key_points[2], "Tribunal compétent à l'étranger");
}

#[test]
fn document_labels_fall_back_to_type() {
    let report = AnalysisReport {
        documents_found: vec![
            FoundDocument {
                kind: "terms".to_string(),
                title: Some("Conditions Générales d'Utilisation".to_string()),
                url: "https://example.com/cgu".to_string(),
            },
            FoundDocument {
                kind: "privacy".to_string(),
                title: None,
                url: "https://example.com/privacy".to_string(),
            },
            FoundDocument {
                kind: "cookies".to_string(),
                title: Some("  ".to_string()),
                url: "https://example.com/cookies".to_string(),
            },
        ],
        ..AnalysisReport::default()
    };
    let view = ReportView::of(&report);
    let labels: Vec<&str> = view
        .documents
        .iter()
        .map(|document| document.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["Conditions Générales d'Utilisation", "privacy", "cookies"]
    );
    assert_eq!(view.documents[1].url, "https://example.com/privacy");
}

#[test]
fn documents_empty_stays_empty() {
    assert!(ReportView::of(&AnalysisReport::default())
        .documents
        .is_empty());
}
