//! Color themes for the quiz client

mod tokyo_night;

pub use tokyo_night::TOKYO_NIGHT;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::api::Difficulty;

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Answer highlighting after submission
    pub correct_bg: Color,
    pub incorrect_bg: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub cursor: Color,
}

impl Theme {
    /// Built-in theme by name, ignoring case
    pub fn named(name: &str) -> Option<Self> {
        let theme = Theme::tokyo_night();
        theme.name.eq_ignore_ascii_case(name.trim()).then_some(theme)
    }

    /// Badge color for a question difficulty
    pub fn difficulty(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Easy => self.success,
            Difficulty::Medium => self.warning,
            Difficulty::Hard => self.error,
            Difficulty::Unknown => self.fg_muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_tokyo_night() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Tokyo Night");
    }

    #[test]
    fn builtin_lookup_ignores_case() {
        assert!(Theme::named("tokyo night").is_some());
        assert!(Theme::named("Solarized").is_none());
    }

    #[test]
    fn difficulty_colors_follow_semantics() {
        let theme = Theme::default();
        assert_eq!(theme.difficulty(Difficulty::Easy), theme.success);
        assert_eq!(theme.difficulty(Difficulty::Medium), theme.warning);
        assert_eq!(theme.difficulty(Difficulty::Hard), theme.error);
        assert_eq!(theme.difficulty(Difficulty::Unknown), theme.fg_muted);
    }
}
