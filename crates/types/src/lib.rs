use serde::{Deserialize, Serialize};

/// A single entry in the page navigation list.
///
/// Links are defined once, in top-to-bottom page order, and never change for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Text shown in the navigation bar and the slide-out menu
    pub label: String,
    /// Identifier of the target section (unique, stable, non-empty)
    pub anchor: String,
}

impl NavLink {
    /// Creates a new navigation link.
    pub fn new(label: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            anchor: anchor.into(),
        }
    }
}

/// Resolved vertical placement of a section within the page, in page rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionExtent {
    /// First row of the section
    pub top: u16,
    /// Number of rows the section spans
    pub height: u16,
}

impl SectionExtent {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    /// First row past the end of the section.
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Half-open interval test: `top <= probe < bottom`.
    pub fn contains(&self, probe: u16) -> bool {
        self.top <= probe && probe < self.bottom()
    }
}

/// Messages that can be sent to update the application state.
///
/// This enum defines all the possible user actions and system events
/// that can trigger state changes in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (drives the smooth-scroll animation)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Scroll the page by a relative line count (`+` down, `-` up)
    ScrollLines(i32),
    /// Scroll the page by viewport pages
    ScrollPages(i32),
    /// Jump to the top of the page
    ScrollToTop,
    /// Jump to the bottom of the page
    ScrollToBottom,
    /// Activate the navigation link at the given index
    NavActivate(usize),
    /// Move the bar's link cursor forward
    NavFocusNext,
    /// Move the bar's link cursor backward
    NavFocusPrev,
    /// Activate the link under the bar's cursor, if any
    NavActivateFocused,
    /// Toggle the slide-out menu
    MenuToggle,
    /// Dismiss the slide-out menu (Esc, backdrop click)
    MenuDismiss,
    /// Move the menu selection by the given offset
    MenuMoveSelection(isize),
    /// Activate the selected menu entry
    MenuActivate,
    /// Copy the contact phone number
    CopyPhone,
}

/// Side effects that can be triggered by state changes.
///
/// Effects are collected by the runtime and executed outside the reducer,
/// keeping `App::update` synchronous and side-effect free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Smooth-scroll the page so the named section clears the fixed bar
    NavigateTo(String),
    /// Request to copy the given text to the system clipboard
    CopyToClipboardRequested(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_link_round_trip() {
        let link = NavLink::new("Chi Siamo", "about");
        let json = serde_json::to_string(&link).expect("serialize NavLink");
        let back: NavLink = serde_json::from_str(&json).expect("deserialize NavLink");
        assert_eq!(back, link);
    }

    #[test]
    fn extent_interval_is_half_open() {
        let extent = SectionExtent::new(800, 800);
        assert!(!extent.contains(799));
        assert!(extent.contains(800));
        assert!(extent.contains(1599));
        assert!(!extent.contains(1600));
    }

    #[test]
    fn extent_bottom_saturates() {
        let extent = SectionExtent::new(u16::MAX - 10, 100);
        assert_eq!(extent.bottom(), u16::MAX);
    }
}
