//! Scroll-threshold watcher.
//!
//! Exposes a single derived boolean: has the page scrolled past a fixed
//! offset. The navigation bar uses it for purely visual styling (elevated
//! background once the hero starts leaving the viewport).

/// Default threshold, in vertical offset units.
pub const DEFAULT_THRESHOLD: u16 = 50;

/// Watches the vertical scroll offset for a fixed threshold crossing.
///
/// The comparison is strict: an offset exactly at the threshold is not past
/// it. Recomputed on every scroll event; no other state.
#[derive(Debug, Clone, Copy)]
pub struct ScrollThreshold {
    threshold: u16,
    past: bool,
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl ScrollThreshold {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            past: false,
        }
    }

    /// Recomputes the flag for the given offset and returns it.
    pub fn observe(&mut self, offset: u16) -> bool {
        self.past = offset > self.threshold;
        self.past
    }

    /// Last observed result.
    pub fn is_past(&self) -> bool {
        self.past
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_comparison_at_the_boundary() {
        let mut watcher = ScrollThreshold::default();
        assert!(!watcher.observe(50));
        assert!(watcher.observe(51));
        assert!(!watcher.observe(0));
    }

    #[test]
    fn observation_is_retained() {
        let mut watcher = ScrollThreshold::new(3);
        watcher.observe(10);
        assert!(watcher.is_past());
        watcher.observe(3);
        assert!(!watcher.is_past());
    }
}
