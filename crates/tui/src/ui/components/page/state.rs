//! Scroll state for the page view: clamped offset, viewport tracking, and
//! the smooth-scroll animator.

use navetta_content::SiteContent;

use super::PageLayout;
use crate::ui::scroll::SmoothScroll;
use crate::ui::theme::Theme;

#[derive(Debug, Default)]
pub struct PageState {
    layout: PageLayout,
    offset: u16,
    viewport: u16,
    smooth: SmoothScroll,
}

impl PageState {
    /// Current vertical scroll offset, in page rows.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// The section geometry the navigator probes.
    pub fn geometry(&self) -> &PageLayout {
        &self.layout
    }

    /// Maximum valid scroll offset.
    pub fn max_offset(&self) -> u16 {
        self.layout.height().saturating_sub(self.viewport)
    }

    pub fn is_animating(&self) -> bool {
        self.smooth.is_animating()
    }

    /// Records the viewport height, clamping the offset if it shrank.
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport = rows;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Rebuilds the layout when the draw dimensions changed. Returns whether
    /// a rebuild happened so the caller can re-derive scroll-dependent state.
    pub fn ensure_layout(&mut self, site: &SiteContent, theme: &Theme, width: u16) -> bool {
        if !self.layout.is_stale(width, self.viewport) {
            return false;
        }
        self.layout = PageLayout::build(site, theme, width, self.viewport);
        self.offset = self.offset.min(self.max_offset());
        true
    }

    /// Direct user scroll by lines. Cancels any in-flight animation and
    /// returns whether the offset changed.
    pub fn scroll_lines(&mut self, delta: i32) -> bool {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset())) as u16;
        let moved = next != self.offset;
        self.offset = next;
        self.smooth.sync(next);
        moved
    }

    /// Direct user scroll by viewport pages.
    pub fn scroll_pages(&mut self, pages: i32) -> bool {
        self.scroll_lines(pages.saturating_mul(i32::from(self.viewport)))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_lines(-i32::from(self.layout.height()))
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.scroll_lines(i32::from(self.layout.height()))
    }

    /// Starts (or redirects) a smooth scroll toward the given offset.
    pub fn animate_to(&mut self, target: u16) {
        self.smooth.retarget(target.min(self.max_offset()));
    }

    /// Advances the animation one frame. Returns whether the offset moved.
    pub fn tick(&mut self) -> bool {
        match self.smooth.tick() {
            Some(position) => {
                let next = position.min(self.max_offset());
                let moved = next != self.offset;
                self.offset = next;
                moved
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageState {
        let mut page = PageState::default();
        page.set_viewport(24);
        page.ensure_layout(&SiteContent::default(), &Theme::ansi(), 80);
        page
    }

    #[test]
    fn scrolling_clamps_to_bounds() {
        let mut page = page();
        assert!(page.scroll_lines(5));
        assert_eq!(page.offset(), 5);
        assert!(page.scroll_lines(-50));
        assert_eq!(page.offset(), 0);
        assert!(!page.scroll_lines(-1));

        page.scroll_to_bottom();
        assert_eq!(page.offset(), page.max_offset());
        assert!(!page.scroll_lines(1));
    }

    #[test]
    fn page_scrolling_uses_viewport_height() {
        let mut page = page();
        page.scroll_pages(1);
        assert_eq!(page.offset(), 24);
        page.scroll_pages(-2);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn user_scroll_cancels_animation() {
        let mut page = page();
        page.animate_to(40);
        assert!(page.is_animating());
        page.scroll_lines(1);
        assert!(!page.is_animating());
        assert!(!page.tick());
    }

    #[test]
    fn animation_target_is_clamped_to_max_offset() {
        let mut page = page();
        page.animate_to(u16::MAX);
        while page.is_animating() {
            page.tick();
        }
        assert_eq!(page.offset(), page.max_offset());
    }

    #[test]
    fn layout_rebuild_is_keyed_on_dimensions() {
        let mut page = page();
        let site = SiteContent::default();
        let theme = Theme::ansi();
        assert!(!page.ensure_layout(&site, &theme, 80));
        assert!(page.ensure_layout(&site, &theme, 100));
        page.set_viewport(30);
        assert!(page.ensure_layout(&site, &theme, 100));
    }
}
