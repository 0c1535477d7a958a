use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app_logging::app_info;
use legalens_client::ClientSettings;
use legalens_core::{update, AppState, CursorMove, Msg, SessionState};

use crate::effects::EffectRunner;
use crate::input::InputBox;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive session until the user quits.
pub fn run(settings: ClientSettings) -> Result<()> {
    let effects = EffectRunner::new(settings)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = App::new(effects).run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

struct App {
    state: AppState,
    input: InputBox,
    effects: EffectRunner,
    /// Report scroll offset; purely presentational, reset on new results.
    scroll: u16,
    needs_redraw: bool,
    should_quit: bool,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            input: InputBox::default(),
            effects,
            scroll: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    fn run(mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        // Populate the recent-analyses list before the first frame.
        self.effects.request_recent();

        while !self.should_quit {
            if self.state.consume_dirty() || self.needs_redraw {
                self.needs_redraw = false;
                let view = self.state.view();
                let cursor = self.input.cursor();
                let scroll = self.scroll;
                terminal.draw(|frame| ui::render(frame, &view, scroll, cursor))?;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
                    Event::Resize(_, _) => self.needs_redraw = true,
                    _ => {}
                }
            } else {
                self.dispatch(Msg::Tick);
            }

            while let Some(msg) = self.effects.try_recv() {
                self.dispatch(msg);
            }
        }

        app_info!("session closed by user");
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        if matches!(msg, Msg::AnalysisSettled(_) | Msg::ResetRequested) {
            self.scroll = 0;
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        match self.state.session() {
            SessionState::Ready(_) => self.on_report_key(key),
            SessionState::Loading => {
                // Submission is disabled while the call is in flight.
            }
            SessionState::Idle | SessionState::Failed { .. } => self.on_search_key(key),
        }
    }

    fn on_report_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Esc => {
                self.input.clear();
                self.dispatch(Msg::ResetRequested);
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                self.needs_redraw = true;
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                self.needs_redraw = true;
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                self.needs_redraw = true;
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.dispatch(Msg::AnalyzeSubmitted),
            KeyCode::Esc => {
                self.input.clear();
                self.dispatch(Msg::ResetRequested);
            }
            KeyCode::Up => self.dispatch(Msg::RecentCursorMoved(CursorMove::Up)),
            KeyCode::Down => self.dispatch(Msg::RecentCursorMoved(CursorMove::Down)),
            KeyCode::Tab => self.dispatch(Msg::RecentOpened),
            KeyCode::Left => {
                self.input.move_left();
                self.needs_redraw = true;
            }
            KeyCode::Right => {
                self.input.move_right();
                self.needs_redraw = true;
            }
            KeyCode::Home => {
                self.input.move_home();
                self.needs_redraw = true;
            }
            KeyCode::End => {
                self.input.move_end();
                self.needs_redraw = true;
            }
            KeyCode::Backspace => {
                if let Some(text) = self.input.backspace() {
                    self.dispatch(Msg::InputChanged(text));
                }
            }
            KeyCode::Delete => {
                if let Some(text) = self.input.delete() {
                    self.dispatch(Msg::InputChanged(text));
                }
            }
            KeyCode::Char(ch) => {
                let text = self.input.insert(ch);
                self.dispatch(Msg::InputChanged(text));
            }
            _ => {}
        }
    }
}
