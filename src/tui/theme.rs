//! TUI colour semantics and the dark/light switch.
//!
//! Two palettes share one set of semantic slots; the renderer asks the
//! active [`Theme`] for styles and never names raw colours itself.
//!
//! Colour semantics:
//! - Primary: titles, active tab, interactive hints
//! - Accent: per-category gradient, taken from the category data
//! - Success/Warning/Info: impact badges (High/Medium/Low)
//! - Muted: de-emphasized metadata, help line
//! - Bold: names and counts

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;
use crate::types::{Accent, Impact, Level, Rgb};

// ============================================================================
// VARIANT
// ============================================================================

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Resolve a configured mode, asking the OS when set to Auto.
    pub fn resolve(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => ThemeVariant::Dark,
            ThemeMode::Light => ThemeVariant::Light,
            ThemeMode::Auto => Self::detect(),
        }
    }

    /// OS dark/light detection; dark when unknown.
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeVariant::Light,
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => {
                ThemeVariant::Dark
            }
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeVariant::Dark => ThemeVariant::Light,
            ThemeVariant::Light => ThemeVariant::Dark,
        }
    }

    /// Label for the title-bar switch.
    pub fn label(self) -> &'static str {
        match self {
            ThemeVariant::Dark => "[☾ dark]",
            ThemeVariant::Light => "[☀ light]",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeVariant::Dark => Theme::dark(),
            ThemeVariant::Light => Theme::light(),
        }
    }
}

// ============================================================================
// PALETTE
// ============================================================================

/// Semantic palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub text_muted: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub danger: Color,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            text_muted: Color::DarkGray,
            highlight_bg: Color::Rgb(40, 44, 52),
            success: Color::Green,
            warning: Color::Yellow,
            info: Color::LightBlue,
            danger: Color::Red,
        }
    }

    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            text: Color::Black,
            text_muted: Color::Gray,
            highlight_bg: Color::Rgb(226, 232, 240),
            success: Color::Rgb(21, 128, 61),
            warning: Color::Rgb(161, 98, 7),
            info: Color::Rgb(29, 78, 216),
            danger: Color::Rgb(185, 28, 28),
        }
    }

    // --- UI element styles ---

    pub fn title(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::new().fg(self.text)
    }

    pub fn important(&self) -> Style {
        Style::new().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::new().fg(self.text_muted)
    }

    pub fn interactive(&self) -> Style {
        Style::new().fg(self.primary)
    }

    pub fn help(&self) -> Style {
        Style::new().fg(self.text_muted)
    }

    /// Active tab / current summary row.
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.primary)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor row in a list.
    pub fn cursor(&self) -> Style {
        Style::new().add_modifier(Modifier::REVERSED)
    }

    /// Button chrome.
    pub fn button(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn impact(&self, impact: Impact) -> Style {
        let color = match impact {
            Impact::High => self.success,
            Impact::Medium => self.warning,
            Impact::Low => self.info,
        };
        Style::new().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn level(&self, level: Level) -> Style {
        match level {
            Level::Expert => Style::new().fg(self.success).add_modifier(Modifier::BOLD),
            Level::Advanced => Style::new().fg(self.primary),
            Level::Intermediate => Style::new().fg(self.warning),
            Level::Beginner => Style::new().fg(self.text_muted),
        }
    }
}

// ============================================================================
// CATEGORY ACCENTS
// ============================================================================

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Border/chrome colour for a category.
pub fn accent_style(accent: Accent) -> Style {
    Style::new().fg(rgb(accent.from))
}

/// Emphasis for the active dot and selected tile: end of the gradient.
pub fn accent_strong(accent: Accent) -> Style {
    Style::new().fg(rgb(accent.to)).add_modifier(Modifier::BOLD)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CATEGORIES;

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(ThemeVariant::Dark.toggled(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Dark.toggled().toggled(), ThemeVariant::Dark);
    }

    #[test]
    fn explicit_modes_skip_detection() {
        assert_eq!(ThemeVariant::resolve(ThemeMode::Dark), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::resolve(ThemeMode::Light), ThemeVariant::Light);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::dark(), Theme::light());
        assert_eq!(ThemeVariant::Light.theme(), Theme::light());
    }

    #[test]
    fn impact_styles_use_semantic_colours() {
        let theme = Theme::dark();
        assert_eq!(theme.impact(Impact::High).fg, Some(Color::Green));
        assert_eq!(theme.impact(Impact::Medium).fg, Some(Color::Yellow));
    }

    #[test]
    fn accent_maps_gradient_to_rgb() {
        let backend = CATEGORIES[0].accent;
        assert_eq!(accent_style(backend).fg, Some(Color::Rgb(0x3B, 0x82, 0xF6)));
        assert_eq!(accent_strong(backend).fg, Some(Color::Rgb(0x06, 0xB6, 0xD4)));
        assert!(accent_strong(backend).add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(Theme::dark().cursor().add_modifier.contains(Modifier::REVERSED));
    }
}
