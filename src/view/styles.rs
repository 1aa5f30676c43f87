//! Deal styling configuration.
//!
//! Score badges: "Amazing" renders green, "Great" renders cyan, every
//! other tier falls back to blue.

use crate::model::ScoreTier;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` CLI flag or a set `NO_COLOR`
/// environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== DealStyles =====

/// Styles for deal cards and badges.
#[derive(Debug, Clone)]
pub struct DealStyles {
    price_style: Style,
    badge_amazing: Style,
    badge_great: Style,
    badge_default: Style,
    saved_style: Style,
    selection_style: Style,
    muted_style: Style,
}

impl DealStyles {
    /// Create styles with default colors (respecting `NO_COLOR`).
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles under the given color configuration.
    ///
    /// With colors disabled everything renders in the default style except
    /// the selection highlight, which stays visible via REVERSED.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                price_style: Style::default().add_modifier(Modifier::BOLD),
                badge_amazing: Style::default().fg(Color::Green),
                badge_great: Style::default().fg(Color::Cyan),
                badge_default: Style::default().fg(Color::Blue),
                saved_style: Style::default().fg(Color::Red),
                selection_style: Style::default().add_modifier(Modifier::REVERSED),
                muted_style: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                price_style: Style::default(),
                badge_amazing: Style::default(),
                badge_great: Style::default(),
                badge_default: Style::default(),
                saved_style: Style::default(),
                selection_style: Style::default().add_modifier(Modifier::REVERSED),
                muted_style: Style::default(),
            }
        }
    }

    /// Style for the price figure.
    pub fn price(&self) -> Style {
        self.price_style
    }

    /// Style for a score badge of the given tier.
    pub fn badge(&self, tier: ScoreTier) -> Style {
        match tier {
            ScoreTier::Amazing => self.badge_amazing,
            ScoreTier::Great => self.badge_great,
            _ => self.badge_default,
        }
    }

    /// Style for the saved ("hearted") marker.
    pub fn saved(&self) -> Style {
        self.saved_style
    }

    /// Highlight style for the selected card.
    pub fn selection(&self) -> Style {
        self.selection_style
    }

    /// Style for secondary text (date ranges, hints).
    pub fn muted(&self) -> Style {
        self.muted_style
    }
}

impl Default for DealStyles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amazing_and_great_have_distinct_badges() {
        let styles = DealStyles::with_color_config(ColorConfig { enabled: true });
        assert_ne!(styles.badge(ScoreTier::Amazing), styles.badge(ScoreTier::Great));
    }

    #[test]
    fn unknown_tiers_share_the_default_badge() {
        let styles = DealStyles::with_color_config(ColorConfig { enabled: true });
        assert_eq!(styles.badge(ScoreTier::Hot), styles.badge(ScoreTier::Standard));
        assert_eq!(styles.badge(ScoreTier::Fair), styles.badge(ScoreTier::Standard));
    }

    #[test]
    fn no_color_strips_everything_but_selection() {
        let styles = DealStyles::with_color_config(ColorConfig { enabled: false });
        assert_eq!(styles.badge(ScoreTier::Amazing), Style::default());
        assert_eq!(styles.price(), Style::default());
        assert_ne!(styles.selection(), Style::default(), "selection must stay visible");
    }

    #[test]
    fn no_color_flag_disables_colors() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
    }
}
