//! Search form rendering ("Find your next adventure for less").

use crate::state::{AppState, FormField};
use crate::view::helpers::empty_line;
use crate::view::DealStyles;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the search form: origin and destination dropdowns, the travel
/// date, and the submit hint. The focused field carries a `>` marker and
/// bold styling.
pub fn render_search(frame: &mut Frame, area: Rect, state: &AppState, styles: &DealStyles) {
    let airports = state.airports();
    let form = &state.form;

    let origin_value = form
        .origin_index
        .and_then(|i| airports.origins.get(i))
        .map(|a| format!("{} ({})", a.code, a.name))
        .unwrap_or_else(|| "Select airport".to_string());
    let destination_value = form
        .destination_index
        .and_then(|i| airports.destinations.get(i))
        .map(|a| format!("{} ({})", a.code, a.name))
        .unwrap_or_else(|| "Select airport".to_string());
    let date_value = form
        .travel_date
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "Select a date".to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            "Find your next adventure for less",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Discover amazing flight deals to destinations worldwide.",
            styles.muted(),
        ))
        .alignment(Alignment::Center),
        empty_line(),
    ];

    lines.push(field_line(
        "Origin",
        &origin_value,
        form.focus == FormField::Origin,
    ));
    lines.push(field_line(
        "Destination",
        &destination_value,
        form.focus == FormField::Destination,
    ));
    lines.push(field_line(
        "Travel Date",
        &date_value,
        form.focus == FormField::TravelDate,
    ));

    lines.push(empty_line());
    lines.push(
        Line::from(Span::styled(
            "Enter: Find Deals   Up/Down: field   Left/Right: change value",
            styles.muted(),
        ))
        .alignment(Alignment::Center),
    );

    let block = Block::default().borders(Borders::ALL).title("Search Flights");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker.to_string()),
        Span::styled(format!("{label:<12}"), style),
        Span::styled(value.to_string(), style),
    ])
}
