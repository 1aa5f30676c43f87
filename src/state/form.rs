//! Search form state (pure).
//!
//! Three fields: origin dropdown, destination dropdown, travel date.
//! Dropdown options come from the airport catalog; `None` selection is the
//! "Select airport" placeholder, which searches all airports. The date is
//! adjusted a day at a time and never goes below the minimum date the form
//! was built with (today at startup).

use crate::model::AirportCatalog;
use crate::search::SearchQuery;
use chrono::{Duration, NaiveDate};

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Origin dropdown.
    Origin,
    /// Destination dropdown.
    Destination,
    /// Travel date field.
    TravelDate,
}

impl FormField {
    /// Next field, wrapping from the date back to the origin.
    pub fn next(self) -> Self {
        match self {
            FormField::Origin => FormField::Destination,
            FormField::Destination => FormField::TravelDate,
            FormField::TravelDate => FormField::Origin,
        }
    }

    /// Previous field, wrapping from the origin back to the date.
    pub fn prev(self) -> Self {
        match self {
            FormField::Origin => FormField::TravelDate,
            FormField::Destination => FormField::Origin,
            FormField::TravelDate => FormField::Destination,
        }
    }
}

/// State of the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    /// Focused field.
    pub focus: FormField,
    /// Index into the origins list; `None` is the placeholder.
    pub origin_index: Option<usize>,
    /// Index into the destinations list; `None` is the placeholder.
    pub destination_index: Option<usize>,
    /// Chosen travel date; `None` until the user picks one.
    pub travel_date: Option<NaiveDate>,
    min_date: NaiveDate,
}

impl SearchForm {
    /// Create a blank form. `min_date` is the earliest selectable travel
    /// date (today in the real application).
    pub fn new(min_date: NaiveDate) -> Self {
        Self {
            focus: FormField::Origin,
            origin_index: None,
            destination_index: None,
            travel_date: None,
            min_date,
        }
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the focused field forward: next dropdown option, or date +1 day.
    pub fn next_value(&mut self, airports: &AirportCatalog) {
        match self.focus {
            FormField::Origin => {
                self.origin_index = step_forward(self.origin_index, airports.origins.len());
            }
            FormField::Destination => {
                self.destination_index =
                    step_forward(self.destination_index, airports.destinations.len());
            }
            FormField::TravelDate => {
                self.travel_date = Some(match self.travel_date {
                    Some(date) => date + Duration::days(1),
                    None => self.min_date,
                });
            }
        }
    }

    /// Step the focused field backward: previous dropdown option (down to
    /// the placeholder), or date -1 day clamped at the minimum.
    pub fn prev_value(&mut self, _airports: &AirportCatalog) {
        match self.focus {
            FormField::Origin => {
                self.origin_index = step_backward(self.origin_index);
            }
            FormField::Destination => {
                self.destination_index = step_backward(self.destination_index);
            }
            FormField::TravelDate => {
                self.travel_date = self.travel_date.map(|date| {
                    let prev = date - Duration::days(1);
                    prev.max(self.min_date)
                });
            }
        }
    }

    /// The query this form currently describes.
    pub fn query(&self, airports: &AirportCatalog) -> SearchQuery {
        SearchQuery {
            origin: self
                .origin_index
                .and_then(|i| airports.origins.get(i))
                .map(|a| a.code.clone()),
            destination: self
                .destination_index
                .and_then(|i| airports.destinations.get(i))
                .map(|a| a.code.clone()),
            travel_date: self.travel_date,
        }
    }
}

fn step_forward(index: Option<usize>, len: usize) -> Option<usize> {
    match index {
        None if len > 0 => Some(0),
        Some(i) if i + 1 < len => Some(i + 1),
        other => other,
    }
}

fn step_backward(index: Option<usize>) -> Option<usize> {
    match index {
        Some(0) | None => None,
        Some(i) => Some(i - 1),
    }
}
