//! Section navigator: scroll-spy, smooth-scroll targeting, and the slide-out
//! menu state machine.

use navetta_types::NavLink;

use super::SectionGeometry;

/// Default probe lookahead past the viewport top, in offset units. A section
/// counts as active slightly before it visually reaches the top, compensating
/// for the fixed bar.
pub const DEFAULT_PROBE_LOOKAHEAD: u16 = 100;

/// Default clearance between a navigated-to section top and the viewport top.
pub const DEFAULT_SCROLL_MARGIN: u16 = 80;

/// Tuning for the navigator, in the page's own offset units.
#[derive(Debug, Clone, Copy)]
pub struct NavigatorConfig {
    /// Added to the scroll offset to form the active-section probe
    pub probe_lookahead: u16,
    /// Subtracted from a target section's top when navigating
    pub scroll_margin: u16,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            probe_lookahead: DEFAULT_PROBE_LOOKAHEAD,
            scroll_margin: DEFAULT_SCROLL_MARGIN,
        }
    }
}

/// Owns the navigation list, the currently active section, and the slide-out
/// menu state.
///
/// The active anchor is a stored last-known value: scroll positions that
/// match no section (above the first, past the last) leave it untouched, so
/// the bar never flickers to an undefined state at the page extremes.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    links: Vec<NavLink>,
    config: NavigatorConfig,
    active: String,
    menu_open: bool,
}

impl SectionNavigator {
    /// Creates a navigator over the given links. The active section defaults
    /// to the first link.
    pub fn new(links: Vec<NavLink>, config: NavigatorConfig) -> Self {
        let active = links.first().map(|l| l.anchor.clone()).unwrap_or_default();
        Self {
            links,
            config,
            active,
            menu_open: false,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Anchor id of the currently active section.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Index of the active link within the configured list.
    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|l| l.anchor == self.active)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    /// Recomputes the active section for the given scroll offset.
    ///
    /// Probes `offset + lookahead` against each link's extent in list order;
    /// the first whose half-open interval `[top, top + height)` contains the
    /// probe wins. Anchors with no placement are skipped. Runs on every
    /// scroll event, and once at mount to establish the initial value.
    pub fn observe_scroll(&mut self, offset: u16, geometry: &dyn SectionGeometry) {
        let probe = offset.saturating_add(self.config.probe_lookahead);
        for link in &self.links {
            if let Some(extent) = geometry.resolve(&link.anchor)
                && extent.contains(probe)
            {
                self.active = link.anchor.clone();
                break;
            }
        }
    }

    /// Resolves the smooth-scroll target for the given anchor: the section
    /// top minus the configured margin, so the section clears the fixed bar.
    ///
    /// Always closes the menu: navigation from an open menu is one combined
    /// step. Returns `None` (no scroll) when the anchor has no placement.
    pub fn navigate_to(&mut self, anchor: &str, geometry: &dyn SectionGeometry) -> Option<u16> {
        self.menu_open = false;
        let extent = geometry.resolve(anchor)?;
        Some(extent.top.saturating_sub(self.config.scroll_margin))
    }
}

#[cfg(test)]
mod tests {
    use navetta_types::{NavLink, SectionExtent};

    use super::*;
    use crate::ui::scroll::testing::FixedGeometry;

    fn navigator() -> SectionNavigator {
        SectionNavigator::new(
            vec![
                NavLink::new("Home", "home"),
                NavLink::new("Chi Siamo", "about"),
                NavLink::new("Servizi", "services"),
            ],
            NavigatorConfig::default(),
        )
    }

    fn geometry() -> FixedGeometry {
        FixedGeometry(vec![
            ("home", SectionExtent::new(0, 800)),
            ("about", SectionExtent::new(800, 800)),
            ("services", SectionExtent::new(1600, 800)),
        ])
    }

    #[test]
    fn active_defaults_to_first_link() {
        assert_eq!(navigator().active(), "home");
    }

    #[test]
    fn probe_scenarios_from_contiguous_layout() {
        let geometry = geometry();
        let mut nav = navigator();

        nav.observe_scroll(0, &geometry);
        assert_eq!(nav.active(), "home");

        nav.observe_scroll(750, &geometry);
        assert_eq!(nav.active(), "about");

        nav.observe_scroll(1550, &geometry);
        assert_eq!(nav.active(), "services");
    }

    #[test]
    fn boundary_probe_belongs_to_the_entered_section() {
        let geometry = geometry();
        let mut nav = navigator();
        // probe = 700 + 100 = 800, exactly the about/home boundary
        nav.observe_scroll(700, &geometry);
        assert_eq!(nav.active(), "about");
    }

    #[test]
    fn no_match_retains_previous_active() {
        let geometry = FixedGeometry(vec![
            ("home", SectionExtent::new(500, 300)),
            ("about", SectionExtent::new(800, 300)),
        ]);
        let mut nav = navigator();
        nav.observe_scroll(750, &geometry);
        assert_eq!(nav.active(), "about");
        // Probe 100 lands before the first section; active must not reset.
        nav.observe_scroll(0, &geometry);
        assert_eq!(nav.active(), "about");
    }

    #[test]
    fn missing_anchor_is_skipped() {
        let geometry = FixedGeometry(vec![("about", SectionExtent::new(0, 4000))]);
        let mut nav = navigator();
        nav.observe_scroll(100, &geometry);
        assert_eq!(nav.active(), "about");
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let geometry = FixedGeometry(vec![
            ("home", SectionExtent::new(0, 1000)),
            ("about", SectionExtent::new(0, 1000)),
        ]);
        let mut nav = navigator();
        nav.observe_scroll(200, &geometry);
        assert_eq!(nav.active(), "home");
    }

    #[test]
    fn navigate_targets_top_minus_margin_and_closes_menu() {
        let geometry = geometry();
        let mut nav = navigator();
        nav.set_menu_open(true);
        let target = nav.navigate_to("about", &geometry);
        assert_eq!(target, Some(720));
        assert!(!nav.menu_open());
    }

    #[test]
    fn navigate_near_page_top_saturates_to_zero() {
        let geometry = geometry();
        let mut nav = navigator();
        assert_eq!(nav.navigate_to("home", &geometry), Some(0));
    }

    #[test]
    fn navigate_to_missing_anchor_still_closes_menu() {
        let geometry = geometry();
        let mut nav = navigator();
        nav.set_menu_open(true);
        assert_eq!(nav.navigate_to("nowhere", &geometry), None);
        assert!(!nav.menu_open());
    }

    #[test]
    fn menu_toggle_round_trip() {
        let mut nav = navigator();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn active_index_follows_active_anchor() {
        let geometry = geometry();
        let mut nav = navigator();
        nav.observe_scroll(1550, &geometry);
        assert_eq!(nav.active_index(), Some(2));
    }
}
