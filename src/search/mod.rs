//! Result filtering and sorting (pure).
//!
//! Narrows the ticket catalog by optional origin/destination equality and
//! orders by price. The travel date is part of the query for display in
//! the results header but never filters; catalog date ranges are opaque
//! display strings.

use crate::model::Ticket;
use chrono::NaiveDate;
use serde::Deserialize;

/// What the user asked for on the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Origin airport code; `None` means any origin.
    pub origin: Option<String>,
    /// Destination airport code; `None` means any destination.
    pub destination: Option<String>,
    /// Chosen travel date. Display-only; does not narrow results.
    pub travel_date: Option<NaiveDate>,
}

impl SearchQuery {
    /// Header line for the results screen, e.g. "JFK to LAX" or
    /// "All destinations".
    pub fn summary(&self) -> String {
        match (&self.origin, &self.destination) {
            (Some(o), Some(d)) => format!("{o} to {d}"),
            _ => "All destinations".to_string(),
        }
    }
}

/// Price ordering for the result list.
///
/// Deserializes from the config-file spellings "asc" and "desc".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortOrder {
    /// Price: Low to High.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Price: High to Low.
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// The other ordering.
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label shown in the results header sort indicator.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Price: Low to High",
            SortOrder::Descending => "Price: High to Low",
        }
    }
}

/// Filter the catalog by the query and sort by price.
///
/// An unset origin or destination matches everything; a set one matches by
/// code equality. The sort is stable, so equal-priced tickets keep their
/// catalog order.
pub fn filter_and_sort(tickets: &[Ticket], query: &SearchQuery, order: SortOrder) -> Vec<Ticket> {
    let mut results: Vec<Ticket> = tickets
        .iter()
        .filter(|t| {
            query.origin.as_deref().is_none_or(|o| t.origin == o)
                && query.destination.as_deref().is_none_or(|d| t.destination == d)
        })
        .cloned()
        .collect();

    match order {
        SortOrder::Ascending => results.sort_by_key(|t| t.price),
        SortOrder::Descending => results.sort_by_key(|t| std::cmp::Reverse(t.price)),
    }

    results
}
