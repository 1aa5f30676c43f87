//! Domain-level keyboard actions independent of key bindings.

/// User intent behind a key press.
///
/// These represent actions, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`crate::config::KeyBindings`] so bindings can change without touching
/// the state machine. Context decides what an action means: `Activate`
/// submits the search form but opens the detail overlay on a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move selection up one entry, or to the previous form field. Default: k/Up
    MoveUp,
    /// Move selection down one entry, or to the next form field. Default: j/Down
    MoveDown,
    /// Previous value for the focused form field (dropdown option, or date -1 day). Default: h/Left
    PrevValue,
    /// Next value for the focused form field (dropdown option, or date +1 day). Default: l/Right
    NextValue,

    /// Context action: run the search ("Find Deals") from the form, open
    /// the flight-details overlay from a list. Default: Enter
    Activate,
    /// Close the detail overlay if open, otherwise return to the search
    /// form. Default: Esc/b
    Back,
    /// Switch to the saved-deals screen. Default: v
    GoToSaved,
    /// Switch to the results screen. Default: r
    GoToResults,

    /// Save the selected deal, or remove it when already saved. Default: Space
    ToggleSave,
    /// Flip result ordering between price ascending and descending. Default: s
    ToggleSort,

    /// Exit the application. Default: q (Ctrl+C always quits)
    Quit,
}
