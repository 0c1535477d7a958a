use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use legalens_core::{AppViewModel, RecentRowView, ReportView, SessionView, Tone};

use super::theme;

/// Paints one frame from the view model.
pub fn render(frame: &mut Frame, view: &AppViewModel, scroll: u16, input_cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header(frame, chunks[0]);
    match &view.session {
        SessionView::Report(report) => report_body(frame, chunks[1], report, scroll),
        _ => search_body(frame, chunks[1], view, input_cursor),
    }
    footer(frame, chunks[2], view);
}

fn header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Analyseur Juridique", theme::title()),
        Span::raw("  "),
        Span::styled("Simplifiez vos documents légaux", theme::dim()),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn search_body(frame: &mut Frame, area: Rect, view: &AppViewModel, input_cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::styled(
            "Comprenez facilement les documents juridiques des sites web",
            theme::title(),
        ),
        Line::styled(
            "Résumé clair, points clés et évaluation des risques des CGU et politiques de confidentialité.",
            theme::dim(),
        ),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, chunks[0]);

    input_box(frame, chunks[1], view, input_cursor);
    status_line(frame, chunks[2], view);
    recent_list(frame, chunks[3], &view.recent);
}

fn input_box(frame: &mut Frame, area: Rect, view: &AppViewModel, input_cursor: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Analyser un site web ");
    let contents = if view.input.is_empty() {
        Line::styled("https://example.com", theme::dim())
    } else {
        Line::raw(view.input.as_str())
    };
    frame.render_widget(Paragraph::new(contents).block(block), area);

    // Keep the terminal cursor inside the box.
    let column =
        (input_cursor.min(u16::MAX as usize) as u16).min(area.width.saturating_sub(2));
    frame.set_cursor_position((area.x + 1 + column, area.y + 1));
}

fn status_line(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    match &view.session {
        SessionView::Loading => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "Analyse en cours…",
                    theme::tone_style(Tone::Caution),
                )),
                area,
            );
        }
        SessionView::Failed { message } => {
            let alert = Paragraph::new(Line::styled(
                format!("⚠ {message}"),
                theme::tone_style(Tone::Danger),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::tone_style(Tone::Danger)),
            );
            frame.render_widget(alert, area);
        }
        _ => {}
    }
}

fn recent_list(frame: &mut Frame, area: Rect, rows: &[RecentRowView]) {
    if rows.is_empty() {
        return;
    }
    let items: Vec<ListItem> = rows.iter().map(recent_item).collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Analyses récentes "),
    );
    frame.render_widget(list, area);
}

fn recent_item(row: &RecentRowView) -> ListItem<'_> {
    let mut spans = vec![
        Span::styled(
            format!("{} ", row.risk.glyph),
            theme::tone_style(row.risk.tone),
        ),
        Span::raw(row.domain.clone()),
    ];
    if let Some(at) = &row.analyzed_at {
        spans.push(Span::styled(format!("  {at}"), theme::dim()));
    }
    let item = ListItem::new(Line::from(spans));
    if row.selected {
        item.style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        item
    }
}

fn report_body(frame: &mut Frame, area: Rect, report: &ReportView, scroll: u16) {
    let mut lines: Vec<Line> = Vec::new();

    let mut badge_row = vec![
        Span::styled(
            format!("{} {}", report.risk.glyph, report.risk.label),
            theme::tone_style(report.risk.tone).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Lisibilité ", theme::dim()),
        Span::styled(
            report.readability.text.clone(),
            theme::tone_style(report.readability.tone).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(at) = &report.analyzed_at {
        badge_row.push(Span::styled(format!("    Analysé le {at}"), theme::dim()));
    }
    lines.push(Line::from(badge_row));
    lines.push(Line::default());

    lines.push(Line::styled("Résumé", theme::section()));
    lines.push(Line::raw(report.summary.clone()));
    lines.push(Line::default());

    for panel in &report.panels {
        lines.push(Line::styled(panel.title, theme::section()));
        lines.push(Line::raw(panel.body.clone()));
        lines.push(Line::default());
    }

    if !report.key_points.is_empty() {
        lines.push(Line::styled("Points clés à retenir", theme::section()));
        for point in &report.key_points {
            lines.push(Line::from(vec![
                Span::styled("✓ ", theme::tone_style(Tone::Positive)),
                Span::raw(point.clone()),
            ]));
        }
        lines.push(Line::default());
    }

    if !report.documents.is_empty() {
        lines.push(Line::styled("Documents analysés", theme::section()));
        for document in &report.documents {
            lines.push(Line::from(Span::styled(
                document.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", document.url),
                theme::link(),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", report.title)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn footer(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let hints = match &view.session {
        SessionView::Report(_) => " n nouvelle analyse · ↑/↓ défiler · q quitter",
        SessionView::Loading => " Analyse en cours · Ctrl-C quitter",
        _ => " Entrée analyser · ↑/↓ historique · Tab ouvrir · Échap effacer · Ctrl-C quitter",
    };
    frame.render_widget(Paragraph::new(Line::styled(hints, theme::dim())), area);
}
