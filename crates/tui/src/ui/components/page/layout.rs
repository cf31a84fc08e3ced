//! Virtual page layout: all sections rendered top-to-bottom into one tall
//! column of styled lines, with each section's row extent recorded for the
//! scroll-spy.

use chrono::Datelike;
use navetta_content::SiteContent;
use navetta_types::SectionExtent;
use ratatui::text::{Line, Span};
use textwrap::Options;
use unicode_width::UnicodeWidthStr;

use crate::ui::scroll::SectionGeometry;
use crate::ui::theme::Theme;

/// Minimum usable wrap width; below this the copy becomes unreadable anyway.
const MIN_WRAP_WIDTH: usize = 20;

/// The rendered page: styled lines plus per-section extents.
///
/// Built once per `(width, viewport)` pair and reused until a resize; the
/// extents double as the geometry the navigator probes on every scroll event.
#[derive(Debug, Default, Clone)]
pub struct PageLayout {
    width: u16,
    viewport: u16,
    lines: Vec<Line<'static>>,
    extents: Vec<(String, SectionExtent)>,
}

impl PageLayout {
    /// True when the cached layout no longer matches the draw dimensions.
    pub fn is_stale(&self, width: u16, viewport: u16) -> bool {
        self.lines.is_empty() || self.width != width || self.viewport != viewport
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Total page height in rows.
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn build(site: &SiteContent, theme: &Theme, width: u16, viewport: u16) -> Self {
        let wrap_width = usize::from(width.saturating_sub(4)).max(MIN_WRAP_WIDTH);
        let bullet_options = Options::new(wrap_width)
            .initial_indent("  ▸ ")
            .subsequent_indent("    ");

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut extents: Vec<(String, SectionExtent)> = Vec::new();

        for (index, section) in site.sections.iter().enumerate() {
            let top = lines.len();

            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("■ ", theme.accent_style()),
                Span::styled(section.title.clone(), theme.heading_style()),
            ]));
            let rule_width = (section.title.width() + 2).min(wrap_width);
            lines.push(Line::styled("─".repeat(rule_width), theme.muted_style()));
            lines.push(Line::default());

            for paragraph in &section.lead {
                for wrapped in textwrap::wrap(paragraph, wrap_width) {
                    lines.push(Line::styled(format!("  {wrapped}"), theme.text_style()));
                }
                lines.push(Line::default());
            }

            for bullet in &section.bullets {
                for wrapped in textwrap::wrap(bullet, bullet_options.clone()) {
                    lines.push(Line::styled(wrapped.into_owned(), theme.text_style()));
                }
            }
            if !section.bullets.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::default());

            // The hero fills the first screen, like the full-height banner
            // it stands in for.
            if index == 0 {
                while lines.len() - top < usize::from(viewport) {
                    lines.push(Line::default());
                }
            }

            let height = (lines.len() - top) as u16;
            extents.push((section.anchor.clone(), SectionExtent::new(top as u16, height)));
        }

        lines.push(Line::styled("─".repeat(wrap_width), theme.muted_style()));
        lines.push(Line::default());
        for (index, entry) in site.footer.iter().enumerate() {
            let text = if index == 0 {
                format!("  © {} {}", chrono::Local::now().year(), entry)
            } else {
                format!("  {entry}")
            };
            lines.push(Line::styled(text, theme.muted_style()));
        }
        lines.push(Line::default());

        // Pad the page end so the last section can still reach the viewport
        // top; without this the scroll clamp would stop it short and the
        // final link could never become active.
        if let Some((_, last)) = extents.last() {
            let min_total = usize::from(last.top) + usize::from(viewport);
            while lines.len() < min_total {
                lines.push(Line::default());
            }
        }

        Self {
            width,
            viewport,
            lines,
            extents,
        }
    }
}

impl SectionGeometry for PageLayout {
    fn resolve(&self, anchor: &str) -> Option<SectionExtent> {
        self.extents
            .iter()
            .find(|(name, _)| name == anchor)
            .map(|(_, extent)| *extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::build(&SiteContent::default(), &Theme::ansi(), 80, 24)
    }

    #[test]
    fn extents_are_contiguous_and_ordered() {
        let layout = layout();
        let site = SiteContent::default();
        let mut expected_top = 0u16;
        for link in &site.links {
            let extent = layout.resolve(&link.anchor).expect("anchor resolves");
            assert_eq!(extent.top, expected_top, "section {} top", link.anchor);
            assert!(extent.height > 0);
            expected_top = extent.bottom();
        }
    }

    #[test]
    fn hero_fills_the_viewport() {
        let layout = layout();
        let hero = layout.resolve("home").expect("hero resolves");
        assert!(hero.height >= 24);
    }

    #[test]
    fn last_section_can_reach_the_viewport_top() {
        let layout = layout();
        let last = layout.resolve("contact").expect("contact resolves");
        assert!(layout.height() >= last.top + 24);
    }

    #[test]
    fn unknown_anchor_resolves_to_none() {
        assert!(layout().resolve("footer").is_none());
    }

    #[test]
    fn staleness_tracks_both_dimensions() {
        let layout = layout();
        assert!(!layout.is_stale(80, 24));
        assert!(layout.is_stale(100, 24));
        assert!(layout.is_stale(80, 30));
        assert!(PageLayout::default().is_stale(0, 0));
    }
}
