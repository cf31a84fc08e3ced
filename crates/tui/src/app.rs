//! Application state and logic for the Navetta TUI.
//!
//! `App` is the central state container: the scroll-threshold watcher, the
//! navigation bar (which owns the section navigator), the slide-out menu, and
//! the page view. All state lives on the UI thread and is mutated
//! synchronously inside `update`; side effects are reported back to the
//! runtime as `Effect`s.

use std::time::{Duration, Instant};

use navetta_content::SiteContent;
use navetta_types::{Effect, Msg};

use crate::ui::components::menu::MenuState;
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::components::page::PageState;
use crate::ui::scroll::{NavigatorConfig, ScrollThreshold};
use crate::ui::theme::Theme;

/// Interaction tuning scaled to terminal rows. The scroll core defaults to
/// the page's native offsets; these are proportional to the three-row bar.
const THRESHOLD_ROWS: u16 = 2;
const PROBE_LOOKAHEAD_ROWS: u16 = 3;
const SCROLL_MARGIN_ROWS: u16 = 1;

/// How long a transient status notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_millis(2500);

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    /// Page content, navigation list, and metadata
    pub site: SiteContent,
    /// Active color theme
    pub theme: Theme,
}

/// A one-line transient notice (clipboard feedback and the like).
#[derive(Debug, Clone)]
pub struct StatusNotice {
    pub text: String,
    pub shown_at: Instant,
}

pub struct App {
    /// Shared, cross-cutting context (content, theme)
    pub ctx: SharedCtx,
    /// Top-level scroll-threshold watcher; its boolean styles the bar
    pub threshold: ScrollThreshold,
    /// Navigation bar state, owner of the section navigator
    pub nav: NavBarState,
    /// Slide-out menu state (cursor + hit areas; openness lives on the navigator)
    pub menu: MenuState,
    /// Scrollable page state (layout cache, offset, smooth scroll)
    pub page: PageState,
    /// Transient status notice, if any
    pub status: Option<StatusNotice>,
    /// Whether the next loop iteration must redraw
    dirty: bool,
}

impl App {
    pub fn new(site: SiteContent, theme: Theme) -> Self {
        let nav = NavBarState::new(
            site.links.clone(),
            NavigatorConfig {
                probe_lookahead: PROBE_LOOKAHEAD_ROWS,
                scroll_margin: SCROLL_MARGIN_ROWS,
            },
        );
        Self {
            ctx: SharedCtx { site, theme },
            threshold: ScrollThreshold::new(THRESHOLD_ROWS),
            nav,
            menu: MenuState::default(),
            page: PageState::default(),
            status: None,
            dirty: true,
        }
    }

    /// True while the smooth scroll animation is in flight; the runtime
    /// switches to its fast tick interval.
    pub fn is_animating(&self) -> bool {
        self.page.is_animating()
    }

    /// Takes and clears the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Shows a transient status notice.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.status = Some(StatusNotice {
            text: text.into(),
            shown_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Re-derives everything that hangs off the scroll offset: the threshold
    /// flag and the active section. Runs after every offset change.
    pub fn after_scroll(&mut self) {
        let offset = self.page.offset();
        self.threshold.observe(offset);
        self.nav.navigator.observe_scroll(offset, self.page.geometry());
    }

    /// Resolves a navigation request: smooth-scrolls toward the target
    /// section and closes the menu (found or not).
    pub fn navigate_to(&mut self, anchor: &str) {
        let Self { nav, page, .. } = self;
        if let Some(target) = nav.navigator.navigate_to(anchor, page.geometry()) {
            page.animate_to(target);
        }
        self.dirty = true;
    }

    /// Updates the application state based on a message, returning side
    /// effects for the runtime to execute.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::Tick => {
                if self.page.tick() {
                    self.after_scroll();
                    self.dirty = true;
                }
                let expired = self
                    .status
                    .as_ref()
                    .is_some_and(|notice| notice.shown_at.elapsed() >= NOTICE_TTL);
                if expired {
                    self.status = None;
                    self.dirty = true;
                }
            }
            Msg::Resize(_, _) => {
                // Layout is cached per width and rebuilt at the next draw.
                self.dirty = true;
            }
            Msg::ScrollLines(delta) => {
                if self.page.scroll_lines(delta) {
                    self.after_scroll();
                    self.dirty = true;
                }
            }
            Msg::ScrollPages(pages) => {
                if self.page.scroll_pages(pages) {
                    self.after_scroll();
                    self.dirty = true;
                }
            }
            Msg::ScrollToTop => {
                if self.page.scroll_to_top() {
                    self.after_scroll();
                    self.dirty = true;
                }
            }
            Msg::ScrollToBottom => {
                if self.page.scroll_to_bottom() {
                    self.after_scroll();
                    self.dirty = true;
                }
            }
            Msg::NavActivate(idx) => {
                if let Some(link) = self.nav.navigator.links().get(idx) {
                    effects.push(Effect::NavigateTo(link.anchor.clone()));
                }
            }
            Msg::NavFocusNext => {
                self.nav.focus_next();
                self.dirty = true;
            }
            Msg::NavFocusPrev => {
                self.nav.focus_prev();
                self.dirty = true;
            }
            Msg::NavActivateFocused => {
                if let Some(idx) = self.nav.focused
                    && let Some(link) = self.nav.navigator.links().get(idx)
                {
                    effects.push(Effect::NavigateTo(link.anchor.clone()));
                }
            }
            Msg::MenuToggle => {
                self.nav.navigator.toggle_menu();
                if self.nav.navigator.menu_open() {
                    // Open with the cursor on the active section.
                    self.menu.selected = self.nav.navigator.active_index().unwrap_or(0);
                }
                self.dirty = true;
            }
            Msg::MenuDismiss => {
                self.nav.navigator.set_menu_open(false);
                self.dirty = true;
            }
            Msg::MenuMoveSelection(delta) => {
                self.menu.move_selection(delta, self.nav.navigator.links().len());
                self.dirty = true;
            }
            Msg::MenuActivate => {
                if let Some(link) = self.nav.navigator.links().get(self.menu.selected) {
                    effects.push(Effect::NavigateTo(link.anchor.clone()));
                }
            }
            Msg::CopyPhone => {
                effects.push(Effect::CopyToClipboardRequested(
                    self.ctx.site.meta.phone_display.clone(),
                ));
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navetta_types::{Effect, Msg};

    fn app_with_layout() -> App {
        let mut app = App::new(SiteContent::default(), Theme::ansi());
        // Build the page layout the way the first draw would.
        app.page.set_viewport(20);
        app.page.ensure_layout(&app.ctx.site, &app.ctx.theme, 80);
        app.after_scroll();
        app
    }

    #[test]
    fn initial_active_section_is_home() {
        let app = app_with_layout();
        assert_eq!(app.nav.navigator.active(), "home");
    }

    #[test]
    fn scrolling_to_the_bottom_activates_the_last_section() {
        let mut app = app_with_layout();
        app.update(Msg::ScrollToBottom);
        assert_eq!(app.nav.navigator.active(), "contact");
        assert!(app.threshold.is_past());
    }

    #[test]
    fn nav_activate_emits_navigate_effect() {
        let mut app = app_with_layout();
        let effects = app.update(Msg::NavActivate(2));
        assert_eq!(effects, vec![Effect::NavigateTo("services".into())]);
    }

    #[test]
    fn menu_navigation_closes_menu_in_one_step() {
        let mut app = app_with_layout();
        app.update(Msg::MenuToggle);
        assert!(app.nav.navigator.menu_open());

        let effects = app.update(Msg::MenuActivate);
        let anchor = match effects.as_slice() {
            [Effect::NavigateTo(anchor)] => anchor.clone(),
            other => panic!("unexpected effects: {other:?}"),
        };
        app.navigate_to(&anchor);
        assert!(!app.nav.navigator.menu_open());
        assert!(app.is_animating());
    }

    #[test]
    fn navigate_to_unknown_anchor_closes_menu_without_scrolling() {
        let mut app = app_with_layout();
        app.update(Msg::MenuToggle);
        app.navigate_to("nowhere");
        assert!(!app.nav.navigator.menu_open());
        assert!(!app.is_animating());
    }

    #[test]
    fn animation_ticks_settle_and_update_the_active_section() {
        let mut app = app_with_layout();
        app.navigate_to("contact");
        for _ in 0..128 {
            app.update(Msg::Tick);
            if !app.is_animating() {
                break;
            }
        }
        assert!(!app.is_animating());
        assert_eq!(app.nav.navigator.active(), "contact");
    }

    #[test]
    fn copy_phone_requests_the_display_number() {
        let mut app = app_with_layout();
        let effects = app.update(Msg::CopyPhone);
        assert_eq!(
            effects,
            vec![Effect::CopyToClipboardRequested("348 241 8145".into())]
        );
    }

    #[test]
    fn focus_cursor_wraps_around_the_link_list() {
        let mut app = app_with_layout();
        app.update(Msg::NavFocusPrev);
        assert_eq!(app.nav.focused, Some(4));
        app.update(Msg::NavFocusNext);
        assert_eq!(app.nav.focused, Some(0));
    }
}
