//! Scroll interaction core: threshold watcher, section navigator, and the
//! smooth-scroll animator.
//!
//! All three are unit-agnostic over "vertical offset units" (page rows here,
//! pixels in a browser) and know nothing about rendering. The page view feeds
//! them offsets and implements [`SectionGeometry`] from its computed layout;
//! the navigation bar and menu read their state back.

mod navigator;
mod smooth;
mod threshold;

pub use navigator::{NavigatorConfig, SectionNavigator};
pub use smooth::SmoothScroll;
pub use threshold::ScrollThreshold;

use navetta_types::SectionExtent;

/// Read-only section placement, supplied by whoever owns the page layout.
///
/// An anchor with no placement at evaluation time resolves to `None` and is
/// simply skipped, never an error.
pub trait SectionGeometry {
    fn resolve(&self, anchor: &str) -> Option<SectionExtent>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SectionGeometry;
    use navetta_types::SectionExtent;

    /// Fixed geometry table for navigator tests.
    pub struct FixedGeometry(pub Vec<(&'static str, SectionExtent)>);

    impl SectionGeometry for FixedGeometry {
        fn resolve(&self, anchor: &str) -> Option<SectionExtent> {
            self.0
                .iter()
                .find(|(name, _)| *name == anchor)
                .map(|(_, extent)| *extent)
        }
    }
}
