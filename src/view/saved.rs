//! Saved-deals screen.

use crate::state::AppState;
use crate::view::cards::deal_card;
use crate::view::helpers::empty_line;
use crate::view::DealStyles;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph};
use ratatui::Frame;

/// Render the saved-deals screen: the saved collection in insertion
/// order, or the "No saved deals yet." empty state.
pub fn render_saved(frame: &mut Frame, area: Rect, state: &AppState, styles: &DealStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = vec![
        Line::from(Span::styled(
            "Saved Deals",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Space: remove  Enter: details  Esc: back to search",
            styles.muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    if state.saved.is_empty() {
        let lines = vec![
            empty_line(),
            Line::from("No saved deals yet.").alignment(Alignment::Center),
        ];
        let block = Block::default().borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), chunks[1]);
        return;
    }

    let items: Vec<_> = state
        .saved
        .deals()
        .iter()
        .map(|t| deal_card(t, &state.saved, styles))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Saved Deals"))
        .highlight_style(styles.selection());

    let mut list_state = ListState::default();
    list_state.select(Some(state.saved_selected));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}
