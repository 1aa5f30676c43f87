//! Ticket value type and score-tier mapping.
//!
//! A ticket carries no identifier of its own. Two tickets describe the same
//! deal exactly when every field matches, `travel_tips` element-wise, which
//! is what the derived `PartialEq` gives us over owned data. Every
//! membership check in the application goes through that one equality.

use serde::Deserialize;

/// One flight offer as loaded from the ticket catalog.
///
/// Immutable once loaded. Identity is the full content tuple: there is no
/// id field, so deduplication and saved-deal membership compare all seven
/// fields structurally (see [`crate::store::SavedDeals`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Origin airport code (e.g. "JFK").
    pub origin: String,
    /// Destination airport code (e.g. "LAX").
    pub destination: String,
    /// Price in whole dollars. Unsigned, so non-negative by construction.
    pub price: u32,
    /// Display string for the travel window (e.g. "Jun 1-5"). Never parsed.
    pub date_range: String,
    /// Operating airline name.
    pub airline: String,
    /// Qualitative deal score label ("Hot", "Amazing", ...). Open-ended;
    /// unknown labels render with the default tier style.
    pub score: String,
    /// Advisory strings shown in the detail overlay. Absent in the catalog
    /// JSON deserializes as empty.
    #[serde(default)]
    pub travel_tips: Vec<String>,
}

impl Ticket {
    /// Display tier for this ticket's score label.
    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_label(&self.score)
    }

    /// Route summary, e.g. "JFK -> LAX".
    pub fn route(&self) -> String {
        format!("{} -> {}", self.origin, self.destination)
    }
}

/// Display tier for a score label.
///
/// The label set is open-ended; this maps the known tiers to styling and
/// collapses everything else into [`ScoreTier::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// "Amazing" deals.
    Amazing,
    /// "Great" deals.
    Great,
    /// "Hot" deals.
    Hot,
    /// "Good" deals.
    Good,
    /// "Fair" deals.
    Fair,
    /// Any label not in the known set.
    Standard,
}

impl ScoreTier {
    /// Map a score label to its tier. Total: unknown labels become
    /// [`ScoreTier::Standard`] rather than an error.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Amazing" => ScoreTier::Amazing,
            "Great" => ScoreTier::Great,
            "Hot" => ScoreTier::Hot,
            "Good" => ScoreTier::Good,
            "Fair" => ScoreTier::Fair,
            _ => ScoreTier::Standard,
        }
    }
}
