//! Results screen: filtered and sorted deal cards.

use crate::state::AppState;
use crate::view::cards::deal_card;
use crate::view::helpers::empty_line;
use crate::view::DealStyles;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph};
use ratatui::Frame;

/// Render the results screen: a header with the query summary and sort
/// order, then the card list, or the "No deals found" empty state.
pub fn render_results(frame: &mut Frame, area: Rect, state: &AppState, styles: &DealStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_header(frame, chunks[0], state, styles);

    if state.results().is_empty() {
        render_empty_state(frame, chunks[1], styles);
        return;
    }

    let items: Vec<_> = state
        .results()
        .iter()
        .map(|t| deal_card(t, &state.saved, styles))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Flight Deals"))
        .highlight_style(styles.selection());

    let mut list_state = ListState::default();
    list_state.select(Some(state.results_selected));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &DealStyles) {
    let mut summary = state.query.summary();
    if let Some(date) = state.query.travel_date {
        summary.push_str(&format!(" \u{2022} {}", date.format("%B %-d, %Y")));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("Flight Deals", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(summary, styles.muted()),
        ]),
        Line::from(Span::styled(
            format!(
                "{}   s: sort  Space: save  Enter: details  Esc: back to search",
                state.sort.label()
            ),
            styles.muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_empty_state(frame: &mut Frame, area: Rect, styles: &DealStyles) {
    let lines = vec![
        empty_line(),
        Line::from(Span::styled(
            "No deals found",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Try adjusting your search criteria to find more results.",
            styles.muted(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled("Esc: modify search", styles.muted()))
            .alignment(Alignment::Center),
    ];
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
