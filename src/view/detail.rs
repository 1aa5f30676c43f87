//! Flight-details overlay.
//!
//! Centered modal over whichever list opened it: airline and date range,
//! score badge, From/To panel, price, and the travel tips.

use crate::model::Ticket;
use crate::view::helpers::{centered_rect, empty_line, key_value_line};
use crate::view::DealStyles;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the detail overlay for `ticket`.
///
/// Clears the backdrop under the modal so list content does not bleed
/// through.
pub fn render_detail_overlay(frame: &mut Frame, ticket: &Ticket, styles: &DealStyles) {
    let area = frame.area();

    // Height grows with the tip list; width is fixed and clamped by the
    // terminal size.
    let height = 10 + ticket.travel_tips.len() as u16;
    let modal_area = centered_rect(48, height, area);

    frame.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} \u{2022} {}  ", ticket.airline, ticket.date_range)),
            Span::styled(
                format!("[{} Deal]", ticket.score),
                styles.badge(ticket.score_tier()),
            ),
        ]),
        empty_line(),
        key_value_line("From", &ticket.origin, styles.muted()),
        key_value_line("To", &ticket.destination, styles.muted()),
        Line::from(vec![
            Span::styled("Price: ", styles.muted()),
            Span::styled(format!("${}", ticket.price), styles.price()),
        ]),
    ];

    if !ticket.travel_tips.is_empty() {
        lines.push(empty_line());
        lines.push(Line::from(Span::styled(
            "Travel Tips",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for tip in &ticket.travel_tips {
            lines.push(Line::from(format!("  - {tip}")));
        }
    }

    lines.push(empty_line());
    lines.push(Line::from(Span::styled("Esc: close", styles.muted())));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Flight Details");
    frame.render_widget(Paragraph::new(lines).block(block), modal_area);
}
