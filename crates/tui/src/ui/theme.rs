//! Theme styling for the brochure UI.
//!
//! One semantic palette in two renditions: the truecolor "marine" palette
//! (navy page, azure accent, matching the site it presents) and an ANSI
//! fallback for terminals without 24-bit color. Prefer the semantic fields
//! over hard-coding colors so the bar, menu, and page stay consistent.

use std::env;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub page_bg: Color,
    pub text: Color,
    pub text_muted: Color,
    pub heading: Color,
    pub accent: Color,

    /// Bar background before the threshold is crossed ("transparent" state)
    pub bar_bg: Color,
    /// Bar background once scrolled past the threshold (elevated state)
    pub bar_bg_elevated: Color,
    pub bar_text: Color,
    pub bar_text_muted: Color,

    pub panel_bg: Color,
    pub panel_border: Color,
    pub selection_bg: Color,

    pub scrollbar_thumb: Color,
}

impl Theme {
    /// Navy-and-azure palette matching the brochure's subject.
    pub fn marine() -> Self {
        Self {
            page_bg: Color::Rgb(11, 23, 42),
            text: Color::Rgb(214, 222, 235),
            text_muted: Color::Rgb(136, 152, 176),
            heading: Color::Rgb(240, 246, 255),
            accent: Color::Rgb(56, 189, 248),
            bar_bg: Color::Rgb(11, 23, 42),
            bar_bg_elevated: Color::Rgb(22, 38, 64),
            bar_text: Color::Rgb(226, 232, 240),
            bar_text_muted: Color::Rgb(148, 163, 184),
            panel_bg: Color::Rgb(17, 31, 54),
            panel_border: Color::Rgb(51, 78, 116),
            selection_bg: Color::Rgb(30, 58, 95),
            scrollbar_thumb: Color::Rgb(56, 189, 248),
        }
    }

    /// 16-color fallback for terminals without truecolor support.
    pub fn ansi() -> Self {
        Self {
            page_bg: Color::Reset,
            text: Color::White,
            text_muted: Color::DarkGray,
            heading: Color::White,
            accent: Color::Cyan,
            bar_bg: Color::Reset,
            bar_bg_elevated: Color::Blue,
            bar_text: Color::White,
            bar_text_muted: Color::Gray,
            panel_bg: Color::Black,
            panel_border: Color::Blue,
            selection_bg: Color::Blue,
            scrollbar_thumb: Color::Cyan,
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the active navigation link (highlighted + underlined, the
    /// bar's `aria-current` analog).
    pub fn active_link_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}

/// Selects a theme from an explicit preference, falling back to terminal
/// capability detection. Unknown names fall through to detection.
pub fn load(preferred: Option<&str>) -> Theme {
    match preferred.map(str::trim) {
        Some("marine") => Theme::marine(),
        Some("ansi") => Theme::ansi(),
        _ => {
            if supports_truecolor() {
                Theme::marine()
            } else {
                Theme::ansi()
            }
        }
    }
}

fn supports_truecolor() -> bool {
    let colorterm = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return true;
    }
    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    term.contains("truecolor")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preference_wins() {
        assert_eq!(load(Some("ansi")).accent, Color::Cyan);
        assert_eq!(load(Some("marine")).accent, Color::Rgb(56, 189, 248));
    }
}
