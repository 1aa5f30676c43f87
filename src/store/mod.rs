//! Saved-deals store (pure core).
//!
//! Holds the tickets the user has chosen to keep and answers "is this deal
//! currently saved?" for arbitrary candidates coming out of the filtered
//! result list. Tickets have no id, so membership is decided by the full
//! content tuple: all seven fields equal, `travel_tips` element-wise. That
//! is exactly `Ticket`'s derived `PartialEq`, and every call site goes
//! through this store rather than re-comparing fields ad hoc.
//!
//! Lifecycle: created empty at startup, owned by [`crate::state::AppState`],
//! discarded on exit. Never persisted.

use crate::model::Ticket;

/// The ordered collection of deals the user has saved this session.
///
/// Insertion order is preserved; a deal identity appears at most once
/// (save is idempotent). All operations are synchronous and O(n) over the
/// saved list, which stays small at this system's scale.
///
/// Per-deal state machine:
/// Unsaved --save--> Saved --delete--> Unsaved; save while Saved and
/// delete while Unsaved are no-ops.
#[derive(Debug, Clone, Default)]
pub struct SavedDeals {
    deals: Vec<Ticket>,
}

impl SavedDeals {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tuple-equal entry for `candidate` exists in the store.
    ///
    /// Pure query; the candidate is in general a distinct value freshly
    /// filtered from the catalog, never the stored entry itself, so this
    /// must be (and is) a structural comparison.
    pub fn is_saved(&self, candidate: &Ticket) -> bool {
        self.deals.iter().any(|d| d == candidate)
    }

    /// Append `ticket` unless a tuple-equal entry is already present.
    ///
    /// Idempotent: saving the same displayed deal repeatedly keeps exactly
    /// one entry.
    pub fn save(&mut self, ticket: Ticket) {
        if !self.is_saved(&ticket) {
            self.deals.push(ticket);
        }
    }

    /// Remove every tuple-equal entry for `ticket`.
    ///
    /// No-op when nothing matches; idempotent. Matches on the full tuple,
    /// never a subset of fields.
    pub fn delete(&mut self, ticket: &Ticket) {
        self.deals.retain(|d| d != ticket);
    }

    /// Save the deal if unsaved, delete it if saved. Returns `true` when
    /// the deal is saved after the call.
    ///
    /// This is the single toggle affordance result views bind to a key;
    /// it carries no state of its own.
    pub fn toggle(&mut self, ticket: &Ticket) -> bool {
        if self.is_saved(ticket) {
            self.delete(ticket);
            false
        } else {
            self.save(ticket.clone());
            true
        }
    }

    /// The saved deals in insertion order.
    pub fn deals(&self) -> &[Ticket] {
        &self.deals
    }

    /// Number of saved deals.
    pub fn len(&self) -> usize {
        self.deals.len()
    }

    /// Whether nothing is saved yet.
    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(price: u32) -> Ticket {
        Ticket {
            origin: "JFK".to_string(),
            destination: "LAX".to_string(),
            price,
            date_range: "Jun 1-5".to_string(),
            airline: "Delta".to_string(),
            score: "Hot".to_string(),
            travel_tips: vec!["Book early".to_string()],
        }
    }

    #[test]
    fn starts_empty() {
        let store = SavedDeals::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(!store.is_saved(&ticket(199)));
    }

    #[test]
    fn save_then_is_saved() {
        let mut store = SavedDeals::new();
        store.save(ticket(199));
        assert!(store.is_saved(&ticket(199)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_is_idempotent() {
        let mut store = SavedDeals::new();
        store.save(ticket(199));
        store.save(ticket(199));
        assert_eq!(store.len(), 1, "repeated save keeps exactly one entry");
    }

    #[test]
    fn is_saved_uses_structural_equality() {
        // Two independently constructed values for the same deal. A
        // reference comparison would never match here.
        let mut store = SavedDeals::new();
        store.save(ticket(199));

        let candidate = ticket(199);
        assert!(store.is_saved(&candidate));
    }

    #[test]
    fn delete_removes_the_entry() {
        let mut store = SavedDeals::new();
        store.save(ticket(199));
        store.delete(&ticket(199));
        assert!(!store.is_saved(&ticket(199)));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_on_absent_is_a_noop() {
        let mut store = SavedDeals::new();
        store.save(ticket(199));
        store.save(ticket(249));

        let before = store.deals().to_vec();
        store.delete(&ticket(999));
        assert_eq!(store.deals(), &before[..], "length, order, and contents unchanged");
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = SavedDeals::new();
        store.save(ticket(199));
        store.delete(&ticket(199));
        store.delete(&ticket(199));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_matches_full_tuple_not_subset() {
        // Same route and price, different airline: a distinct deal and it
        // must survive the delete.
        let mut store = SavedDeals::new();
        let delta = ticket(199);
        let mut united = ticket(199);
        united.airline = "United".to_string();

        store.save(delta.clone());
        store.save(united.clone());
        store.delete(&delta);

        assert!(!store.is_saved(&delta));
        assert!(store.is_saved(&united));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn independent_deals_coexist() {
        let mut store = SavedDeals::new();
        store.save(ticket(199));
        store.save(ticket(249));

        store.delete(&ticket(199));
        assert!(store.is_saved(&ticket(249)), "deleting A must not remove B");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = SavedDeals::new();
        store.save(ticket(300));
        store.save(ticket(100));
        store.save(ticket(200));

        let prices: Vec<u32> = store.deals().iter().map(|d| d.price).collect();
        assert_eq!(prices, vec![300, 100, 200]);
    }

    #[test]
    fn toggle_round_trip() {
        // Save, save again, delete.
        let mut store = SavedDeals::new();
        let a = ticket(199);

        assert!(store.toggle(&a), "first toggle saves");
        assert!(store.is_saved(&a));
        assert_eq!(store.len(), 1);

        store.save(a.clone());
        assert_eq!(store.len(), 1, "second save is a no-op");

        assert!(!store.toggle(&a), "second toggle deletes");
        assert!(!store.is_saved(&a));
        assert_eq!(store.len(), 0);
    }
}
