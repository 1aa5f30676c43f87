//! Deal card construction shared by the results and saved screens.

use crate::model::Ticket;
use crate::store::SavedDeals;
use crate::view::helpers::empty_line;
use crate::view::DealStyles;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

/// Build one deal card.
///
/// Airline and price on top with the score badge (and a saved marker
/// when the store holds this deal), then the route, then the date range.
pub fn deal_card<'a>(ticket: &Ticket, saved: &SavedDeals, styles: &DealStyles) -> ListItem<'a> {
    let mut header = vec![
        Span::styled(format!("${}", ticket.price), styles.price()),
        Span::raw(format!("  {}  ", ticket.airline)),
        Span::styled(
            format!("[{} Deal]", ticket.score),
            styles.badge(ticket.score_tier()),
        ),
    ];
    if saved.is_saved(ticket) {
        header.push(Span::raw(" "));
        header.push(Span::styled("\u{2665} saved", styles.saved()));
    }

    let lines = vec![
        Line::from(header),
        Line::from(ticket.route()),
        Line::from(Span::styled(ticket.date_range.clone(), styles.muted())),
        empty_line(),
    ];
    ListItem::new(lines)
}
