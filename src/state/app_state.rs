//! Application state and transitions.
//!
//! `AppState` is the root state type. It owns the loaded catalog, the
//! search form, the computed result list, and the saved-deals store; the
//! store is reached only through this state, never through any ambient
//! mechanism. All transitions are pure and synchronous: every mutation
//! happens inside `handle_action` before the next render reads the state,
//! so views always observe a consistent snapshot.

use crate::model::{AirportCatalog, KeyAction, Ticket};
use crate::search::{filter_and_sort, SearchQuery, SortOrder};
use crate::state::form::SearchForm;
use crate::store::SavedDeals;
use chrono::NaiveDate;

/// Which screen is visible.
///
/// Search and Results swap in place; Saved is reachable from anywhere
/// via its navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The search form.
    Search,
    /// Filtered/sorted result cards for the last submitted query.
    Results,
    /// The saved-deals list.
    Saved,
}

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full ticket catalog as loaded at startup. Never mutated.
    catalog: Vec<Ticket>,
    /// Airport lists for the form dropdowns. Never mutated.
    airports: AirportCatalog,

    /// Visible screen.
    pub screen: Screen,
    /// Search form state.
    pub form: SearchForm,
    /// Query captured at the last submit; what the results header shows.
    pub query: SearchQuery,
    /// Current result ordering.
    pub sort: SortOrder,
    /// Results for `query` under `sort`.
    results: Vec<Ticket>,
    /// Selected card on the results screen.
    pub results_selected: usize,
    /// Selected card on the saved screen.
    pub saved_selected: usize,
    /// The saved-deals store.
    pub saved: SavedDeals,
    /// Deal shown in the detail overlay, if open. The overlay is modal:
    /// while open, only closing it (Back/Activate) and Quit act.
    pub overlay: Option<Ticket>,
}

impl AppState {
    /// Create state over the loaded catalog. `today` seeds the form's
    /// minimum travel date; `sort` is the configured default ordering.
    pub fn new(
        catalog: Vec<Ticket>,
        airports: AirportCatalog,
        today: NaiveDate,
        sort: SortOrder,
    ) -> Self {
        Self {
            catalog,
            airports,
            screen: Screen::Search,
            form: SearchForm::new(today),
            query: SearchQuery::default(),
            sort,
            results: Vec::new(),
            results_selected: 0,
            saved_selected: 0,
            saved: SavedDeals::new(),
            overlay: None,
        }
    }

    /// The airport lists backing the form dropdowns.
    pub fn airports(&self) -> &AirportCatalog {
        &self.airports
    }

    /// Results of the last submitted search.
    pub fn results(&self) -> &[Ticket] {
        &self.results
    }

    /// The result card under the cursor, if any.
    pub fn selected_result(&self) -> Option<&Ticket> {
        self.results.get(self.results_selected)
    }

    /// The saved card under the cursor, if any.
    pub fn selected_saved(&self) -> Option<&Ticket> {
        self.saved.deals().get(self.saved_selected)
    }

    /// Apply one domain action. Returns `true` when the application
    /// should quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        // The overlay is modal: everything except closing it (or quitting)
        // is ignored while it is open.
        if self.overlay.is_some() {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Back | KeyAction::Activate => self.overlay = None,
                _ => {}
            }
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::MoveUp => self.move_up(),
            KeyAction::MoveDown => self.move_down(),
            KeyAction::PrevValue => self.prev_value(),
            KeyAction::NextValue => self.next_value(),
            KeyAction::Activate => self.activate(),
            KeyAction::Back => self.back(),
            KeyAction::GoToSaved => self.go_to_saved(),
            KeyAction::GoToResults => self.go_to_results(),
            KeyAction::ToggleSave => self.toggle_save(),
            KeyAction::ToggleSort => self.toggle_sort(),
        }
        false
    }

    fn move_up(&mut self) {
        match self.screen {
            Screen::Search => self.form.focus_prev(),
            Screen::Results => {
                self.results_selected = self.results_selected.saturating_sub(1);
            }
            Screen::Saved => {
                self.saved_selected = self.saved_selected.saturating_sub(1);
            }
        }
    }

    fn move_down(&mut self) {
        match self.screen {
            Screen::Search => self.form.focus_next(),
            Screen::Results => {
                if self.results_selected + 1 < self.results.len() {
                    self.results_selected += 1;
                }
            }
            Screen::Saved => {
                if self.saved_selected + 1 < self.saved.len() {
                    self.saved_selected += 1;
                }
            }
        }
    }

    fn prev_value(&mut self) {
        if self.screen == Screen::Search {
            self.form.prev_value(&self.airports);
        }
    }

    fn next_value(&mut self) {
        if self.screen == Screen::Search {
            self.form.next_value(&self.airports);
        }
    }

    fn activate(&mut self) {
        match self.screen {
            Screen::Search => self.submit_search(),
            Screen::Results => self.overlay = self.selected_result().cloned(),
            Screen::Saved => self.overlay = self.selected_saved().cloned(),
        }
    }

    /// Capture the form as the active query and recompute results.
    fn submit_search(&mut self) {
        self.query = self.form.query(&self.airports);
        self.results = filter_and_sort(&self.catalog, &self.query, self.sort);
        self.results_selected = 0;
        self.screen = Screen::Results;
    }

    fn back(&mut self) {
        match self.screen {
            Screen::Search => {}
            Screen::Results | Screen::Saved => self.screen = Screen::Search,
        }
    }

    fn go_to_saved(&mut self) {
        self.screen = Screen::Saved;
        self.clamp_saved_selection();
    }

    fn go_to_results(&mut self) {
        self.screen = Screen::Results;
    }

    fn toggle_save(&mut self) {
        match self.screen {
            Screen::Search => {}
            Screen::Results => {
                if let Some(ticket) = self.selected_result().cloned() {
                    self.saved.toggle(&ticket);
                    self.clamp_saved_selection();
                }
            }
            Screen::Saved => {
                // On the saved screen the selected entry is saved by
                // definition, so toggling deletes it.
                if let Some(ticket) = self.selected_saved().cloned() {
                    self.saved.delete(&ticket);
                    self.clamp_saved_selection();
                }
            }
        }
    }

    fn toggle_sort(&mut self) {
        if self.screen != Screen::Results {
            return;
        }
        self.sort = self.sort.flipped();
        self.results = filter_and_sort(&self.catalog, &self.query, self.sort);
        self.results_selected = 0;
    }

    fn clamp_saved_selection(&mut self) {
        if self.saved_selected >= self.saved.len() {
            self.saved_selected = self.saved.len().saturating_sub(1);
        }
    }
}
