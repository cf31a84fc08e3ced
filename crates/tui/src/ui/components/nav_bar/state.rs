//! State for the fixed navigation bar.

use navetta_types::NavLink;
use ratatui::layout::Rect;

use crate::ui::scroll::{NavigatorConfig, SectionNavigator};

/// Owns the section navigator plus the bar's own UI state: the keyboard
/// cursor over the links and the hit areas recorded at render time for
/// mouse routing.
#[derive(Debug)]
pub struct NavBarState {
    /// Scroll-spy, navigation targeting, and menu openness
    pub navigator: SectionNavigator,
    /// Keyboard cursor over the links (None until the user starts cycling)
    pub focused: Option<usize>,
    /// Per-link hit areas, in link order
    pub link_areas: Vec<Rect>,
    /// Phone CTA hit area
    pub phone_area: Rect,
    /// Menu trigger hit area
    pub trigger_area: Rect,
}

impl NavBarState {
    pub fn new(links: Vec<NavLink>, config: NavigatorConfig) -> Self {
        Self {
            navigator: SectionNavigator::new(links, config),
            focused: None,
            link_areas: Vec::new(),
            phone_area: Rect::default(),
            trigger_area: Rect::default(),
        }
    }

    /// Moves the keyboard cursor forward, wrapping; starts at the first link.
    pub fn focus_next(&mut self) {
        let len = self.navigator.links().len();
        if len == 0 {
            return;
        }
        self.focused = Some(match self.focused {
            None => 0,
            Some(idx) => (idx + 1) % len,
        });
    }

    /// Moves the keyboard cursor backward, wrapping; starts at the last link.
    pub fn focus_prev(&mut self) {
        let len = self.navigator.links().len();
        if len == 0 {
            return;
        }
        self.focused = Some(match self.focused {
            None | Some(0) => len - 1,
            Some(idx) => idx - 1,
        });
    }
}
