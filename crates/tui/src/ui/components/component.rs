//! Component abstraction for the brochure UI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while reporting side effects back to the runtime through
//! `Effect`s. State lives on the `App` so components stay stateless where
//! possible and coordination stays cheap.

use crossterm::event::{KeyEvent, MouseEvent};
use navetta_types::Effect;
use ratatui::{Frame, layout::Rect};

use crate::app::App;

/// A UI element that can consume input and render itself into a `Rect`.
///
/// Event handlers return the effects the runtime should execute; rendering
/// must stay free of side effects beyond frame drawing and recording hit
/// areas for mouse routing.
pub trait Component {
    /// Handle key events routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}

/// Returns the index of the area containing the given position, for mapping
/// mouse clicks onto per-item rectangles recorded during rendering.
pub fn hit_test(areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    areas
        .iter()
        .position(|area| x >= area.x && x < area.right() && y >= area.y && y < area.bottom())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_maps_positions_to_areas() {
        let areas = [Rect::new(0, 0, 10, 1), Rect::new(12, 0, 6, 1)];
        assert_eq!(hit_test(&areas, 3, 0), Some(0));
        assert_eq!(hit_test(&areas, 12, 0), Some(1));
        assert_eq!(hit_test(&areas, 17, 0), Some(1));
        assert_eq!(hit_test(&areas, 18, 0), None);
        assert_eq!(hit_test(&areas, 3, 1), None);
    }
}
