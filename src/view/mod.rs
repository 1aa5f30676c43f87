//! TUI rendering and terminal management (impure shell).
//!
//! Everything below `render` is pure over [`AppState`], so the full screen
//! can be exercised against ratatui's `TestBackend`. Only [`TuiApp`] and
//! the run functions touch the real terminal.

mod banner;
mod cards;
mod detail;
mod helpers;
mod results;
mod saved;
mod styles;

pub use styles::{ColorConfig, DealStyles};

use crate::config::KeyBindings;
use crate::state::{AppState, Screen};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for crate::model::AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io) => crate::model::AppError::Terminal(io),
        }
    }
}

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: DealStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen.
    pub fn new(app_state: AppState, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: DealStyles::with_color_config(colors),
        })
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (q or Ctrl+C). Event-driven: redraws
    /// after every handled input event; idle polling only keeps the loop
    /// responsive to Ctrl+C.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        // Initial render so the screen has content immediately
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, regardless of bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        debug!(?action, "Handling key action");
        self.app_state.handle_action(action)
    }

    /// Render the current state.
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| render(frame, state, styles))?;
        Ok(())
    }
}

/// Render the whole screen: navbar, the active screen, and the detail
/// overlay when open.
///
/// Pure over the state; used directly by TestBackend tests.
pub fn render(frame: &mut Frame, state: &AppState, styles: &DealStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(frame.area());

    render_navbar(frame, chunks[0], state, styles);

    match state.screen {
        Screen::Search => banner::render_search(frame, chunks[1], state, styles),
        Screen::Results => results::render_results(frame, chunks[1], state, styles),
        Screen::Saved => saved::render_saved(frame, chunks[1], state, styles),
    }

    if let Some(ticket) = &state.overlay {
        detail::render_detail_overlay(frame, ticket, styles);
    }
}

fn render_navbar(frame: &mut Frame, area: Rect, state: &AppState, styles: &DealStyles) {
    let entry = |label: &str, active: bool| {
        if active {
            Span::styled(label.to_string(), Style::default().add_modifier(Modifier::BOLD))
        } else {
            Span::styled(label.to_string(), styles.muted())
        }
    };

    let line = Line::from(vec![
        Span::raw(" farescout  "),
        entry("Search", state.screen == Screen::Search),
        Span::raw("  "),
        entry("Results", state.screen == Screen::Results),
        Span::raw("  "),
        entry(
            &format!("Saved ({})", state.saved.len()),
            state.screen == Screen::Saved,
        ),
        Span::raw("   q: quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Run the TUI over prepared state, restoring the terminal on exit.
///
/// The terminal is restored even when the event loop fails, so a broken
/// pipe or render error never leaves the shell in raw mode.
pub fn run_with_state(app_state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, colors)?;
    let result = app.run();
    let restore_result = restore_terminal();
    result.and(restore_result)
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
